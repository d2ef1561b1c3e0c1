/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::clip_rect::*;
use super::clip_accumulator::*;
use crate::error::*;

///
/// A region of device pixels stored as a normalized list of rectangles
///
/// The rectangles are grouped into bands: every rectangle in a band has the same `ymin` and `ymax`, the
/// rectangles of a band are sorted by x and neither overlap nor touch, and the bands are sorted by y without
/// overlapping. Two bands that touch vertically always differ in their x intervals.
///
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ClipList {
    rects:  Vec<ClipRect>,
    bounds: Option<ClipRect>,
}

///
/// Finds the index just after the band that starts at `start`
///
#[inline]
fn band_end(rects: &[ClipRect], start: usize) -> usize {
    let (ymin, ymax) = (rects[start].ymin, rects[start].ymax);

    rects[start..].iter()
        .position(|rect| rect.ymin != ymin || rect.ymax != ymax)
        .map(|len| start + len)
        .unwrap_or(rects.len())
}

///
/// Iterates over the bands of a clip list
///
pub struct ClipBands<'a> {
    rects:  &'a [ClipRect],
    pos:    usize,
}

impl<'a> Iterator for ClipBands<'a> {
    type Item = &'a [ClipRect];

    fn next(&mut self) -> Option<&'a [ClipRect]> {
        if self.pos >= self.rects.len() {
            None
        } else {
            let start   = self.pos;
            self.pos    = band_end(self.rects, start);

            Some(&self.rects[start..self.pos])
        }
    }
}

impl ClipList {
    ///
    /// Creates an empty region
    ///
    pub fn new() -> ClipList {
        ClipList { rects: vec![], bounds: None }
    }

    ///
    /// Creates a region covering a single rectangle
    ///
    pub fn from_rect(rect: ClipRect) -> ClipList {
        if rect.is_empty() {
            ClipList::new()
        } else {
            ClipList { rects: vec![rect], bounds: Some(rect) }
        }
    }

    ///
    /// Wraps a list of rectangles that is already normalized
    ///
    pub(crate) fn from_normalized(rects: Vec<ClipRect>) -> ClipList {
        let bounds = rects.split_first().map(|(first, rest)| rest.iter().fold(*first, |bounds, rect| bounds.union(rect)));
        let list   = ClipList { rects, bounds };

        test_assert!(list.is_normalized());

        list
    }

    #[inline]
    pub fn rects(&self) -> &[ClipRect] {
        &self.rects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    ///
    /// The smallest rectangle containing the whole region, or `None` if the region is empty
    ///
    #[inline]
    pub fn bounds(&self) -> Option<ClipRect> {
        self.bounds
    }

    ///
    /// If this region is a single rectangle, returns it
    ///
    #[inline]
    pub fn is_rectangle(&self) -> Option<ClipRect> {
        match self.rects.as_slice() {
            [only]  => Some(*only),
            _       => None,
        }
    }

    ///
    /// The rectangle in the list with the largest area (the first one if several are equally large)
    ///
    pub fn largest_rect(&self) -> Option<ClipRect> {
        self.rects.iter().fold(None, |largest: Option<ClipRect>, rect| {
            match largest {
                Some(largest) if largest.area() >= rect.area()  => Some(largest),
                _                                               => Some(*rect),
            }
        })
    }

    /// Total number of pixels in the region
    pub fn area(&self) -> i64 {
        self.rects.iter().map(|rect| rect.area()).sum()
    }

    ///
    /// Iterates over the bands of this list
    ///
    #[inline]
    pub fn bands(&self) -> ClipBands<'_> {
        ClipBands { rects: &self.rects, pos: 0 }
    }

    ///
    /// Checks that the list is sorted into non-overlapping bands, with no touching rectangles and no
    /// duplicate touching bands
    ///
    pub fn is_normalized(&self) -> bool {
        let mut previous_band: Option<&[ClipRect]> = None;

        for band in self.bands() {
            if band.iter().any(|rect| rect.is_empty()) {
                return false;
            }

            if band.windows(2).any(|pair| pair[0].xmax >= pair[1].xmin) {
                return false;
            }

            if let Some(previous) = previous_band {
                let (prev_ymax, ymin) = (previous[0].ymax, band[0].ymin);

                if prev_ymax > ymin {
                    return false;
                }

                let same_intervals = previous.len() == band.len()
                    && previous.iter().zip(band.iter()).all(|(a, b)| a.xmin == b.xmin && a.xmax == b.xmax);
                if prev_ymax == ymin && same_intervals {
                    return false;
                }
            }

            previous_band = Some(band);
        }

        true
    }

    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|rect| rect.contains_pixel(x, y))
    }

    ///
    /// True if every pixel of a rectangle is inside this region
    ///
    pub fn contains_rect(&self, rect: &ClipRect) -> bool {
        if rect.is_empty() {
            return true;
        }

        let covered: i64 = self.rects.iter()
            .filter_map(|clip| clip.intersection(rect))
            .map(|overlap| overlap.area())
            .sum();

        covered == rect.area()
    }

    ///
    /// Computes the region covered by both this list and another one
    ///
    pub fn intersect(&self, other: &ClipList) -> Result<ClipList, GeometryError> {
        let mut result  = ClipAccumulator::new();
        let a           = &self.rects;
        let b           = &other.rects;

        let (mut a_start, mut b_start) = (0, 0);
        while a_start < a.len() && b_start < b.len() {
            let a_end   = band_end(a, a_start);
            let b_end   = band_end(b, b_start);

            let y0      = a[a_start].ymin.max(b[b_start].ymin);
            let y1      = a[a_start].ymax.min(b[b_start].ymax);

            if y0 < y1 {
                // Both bands are sorted by x, so their intervals can be merged in one pass
                let (mut p, mut q) = (a_start, b_start);
                while p < a_end && q < b_end {
                    let xmin = a[p].xmin.max(b[q].xmin);
                    let xmax = a[p].xmax.min(b[q].xmax);

                    if xmin < xmax {
                        result.add(ClipRect::new(xmin, y0, xmax, y1))?;
                    }

                    if a[p].xmax <= b[q].xmax {
                        p += 1;
                    } else {
                        q += 1;
                    }
                }
            }

            if a[a_start].ymax <= b[b_start].ymax {
                a_start = a_end;
            } else {
                b_start = b_end;
            }
        }

        result.finish()
    }

    ///
    /// Returns the parts of a rectangle that are inside this region (or outside it, when `outside` is set)
    ///
    /// The returned rectangles never overlap each other.
    ///
    pub fn rectangles_in(&self, query: &ClipRect, outside: bool) -> Result<Vec<ClipRect>, GeometryError> {
        let mut result = vec![];
        if query.is_empty() {
            return Ok(result);
        }

        if !outside {
            for band in self.bands() {
                if band[0].ymax <= query.ymin { continue; }
                if band[0].ymin >= query.ymax { break; }

                for rect in band.iter() {
                    if let Some(overlap) = rect.intersection(query) {
                        result.try_reserve(1)?;
                        result.push(overlap);
                    }
                }
            }
        } else {
            let mut y = query.ymin;

            for band in self.bands() {
                if band[0].ymax <= query.ymin { continue; }
                if band[0].ymin >= query.ymax { break; }

                let y0 = band[0].ymin.max(query.ymin);
                let y1 = band[0].ymax.min(query.ymax);

                result.try_reserve(band.len() + 2)?;

                // The strip between this band and the last one is completely outside
                if y < y0 {
                    result.push(ClipRect::new(query.xmin, y, query.xmax, y0));
                }

                // The gaps between the rectangles of this band
                let mut x = query.xmin;
                for rect in band.iter() {
                    if rect.xmax <= x { continue; }
                    if rect.xmin >= query.xmax { break; }

                    if rect.xmin > x {
                        result.push(ClipRect::new(x, y0, rect.xmin, y1));
                    }
                    x = rect.xmax;
                }

                if x < query.xmax {
                    result.push(ClipRect::new(x, y0, query.xmax, y1));
                }

                y = y1;
            }

            if y < query.ymax {
                result.try_reserve(1)?;
                result.push(ClipRect::new(query.xmin, y, query.xmax, query.ymax));
            }
        }

        Ok(result)
    }

    ///
    /// Moves every rectangle by a whole number of pixels
    ///
    pub fn translate(&self, dx: i32, dy: i32) -> Result<ClipList, GeometryError> {
        let mut rects = vec![];
        rects.try_reserve(self.rects.len())?;
        rects.extend(self.rects.iter().map(|rect| rect.translate(dx, dy)));

        Ok(ClipList::from_normalized(rects))
    }

    ///
    /// Scales the region up by powers of two (both factors must be zero or more)
    ///
    pub fn scale_exp2(&self, log2_x: i32, log2_y: i32) -> Result<ClipList, GeometryError> {
        if log2_x < 0 || log2_y < 0 {
            return Err(GeometryError::InvalidArgument);
        }

        let scale = |value: i32, log2: i32| {
            let scaled = (value as i64) << (log2.min(32) as u32);

            if scaled < MIN_PIXEL as i64 || scaled > MAX_PIXEL as i64 {
                Err(GeometryError::Limit)
            } else {
                Ok(scaled as i32)
            }
        };

        let mut rects = vec![];
        rects.try_reserve(self.rects.len())?;
        for rect in self.rects.iter() {
            rects.push(ClipRect::new(scale(rect.xmin, log2_x)?, scale(rect.ymin, log2_y)?, scale(rect.xmax, log2_x)?, scale(rect.ymax, log2_y)?));
        }

        Ok(ClipList::from_normalized(rects))
    }
}
