/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::clip_rect::*;
use super::clip_list::*;
use crate::error::*;

use log::*;

///
/// Collects rectangles in any order and turns them into a normalized `ClipList`
///
/// The rectangles may overlap or touch: the result covers exactly the same pixels.
///
#[derive(Clone, Debug, Default)]
pub struct ClipAccumulator {
    rects: Vec<ClipRect>,
}

///
/// Sorts and merges a list of x intervals in place, so touching or overlapping intervals become one
///
fn merge_intervals(intervals: &mut Vec<(i32, i32)>) {
    intervals.sort_unstable();

    let mut merged = 0;
    for idx in 0..intervals.len() {
        let (xmin, xmax) = intervals[idx];

        if merged > 0 && xmin <= intervals[merged - 1].1 {
            intervals[merged - 1].1 = intervals[merged - 1].1.max(xmax);
        } else {
            intervals[merged] = (xmin, xmax);
            merged += 1;
        }
    }

    intervals.truncate(merged);
}

impl ClipAccumulator {
    pub fn new() -> ClipAccumulator {
        ClipAccumulator { rects: vec![] }
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
    /// Adds a rectangle to the region (empty rectangles are ignored)
    ///
    pub fn add(&mut self, rect: ClipRect) -> Result<(), GeometryError> {
        if !rect.is_empty() {
            self.rects.try_reserve(1)?;
            self.rects.push(rect);
        }

        Ok(())
    }

    ///
    /// Produces the normalized list of bands covering every rectangle that was added
    ///
    pub fn finish(mut self) -> Result<ClipList, GeometryError> {
        let mut edges = vec![];
        edges.try_reserve(self.rects.len() * 2)?;
        edges.extend(self.rects.iter().flat_map(|rect| [rect.ymin, rect.ymax]));
        edges.sort_unstable();
        edges.dedup();

        self.rects.sort_unstable_by_key(|rect| (rect.ymin, rect.xmin));

        let mut result: Vec<ClipRect>   = vec![];
        let mut active: Vec<ClipRect>   = vec![];
        let mut intervals               = vec![];
        let mut last_band               = (0, 0);
        let mut next                    = 0;

        for window in edges.windows(2) {
            let (y0, y1) = (window[0], window[1]);

            // Every active rectangle covers all of y0..y1, as every rectangle edge is in the list
            while next < self.rects.len() && self.rects[next].ymin <= y0 {
                active.try_reserve(1)?;
                active.push(self.rects[next]);
                next += 1;
            }
            active.retain(|rect| rect.ymax > y0);

            if active.is_empty() {
                continue;
            }

            intervals.clear();
            intervals.try_reserve(active.len())?;
            intervals.extend(active.iter().map(|rect| (rect.xmin, rect.xmax)));
            merge_intervals(&mut intervals);

            // Bands that continue the previous band are merged into it
            let previous        = &mut result[last_band.0..last_band.1];
            let continues       = previous.first().map(|rect| rect.ymax == y0).unwrap_or(false)
                && previous.len() == intervals.len()
                && previous.iter().zip(intervals.iter()).all(|(rect, (xmin, xmax))| rect.xmin == *xmin && rect.xmax == *xmax);

            if continues {
                previous.iter_mut().for_each(|rect| rect.ymax = y1);
            } else {
                result.try_reserve(intervals.len())?;

                let start = result.len();
                result.extend(intervals.iter().map(|(xmin, xmax)| ClipRect::new(*xmin, y0, *xmax, y1)));
                last_band = (start, result.len());
            }
        }

        trace!("Accumulated {} rectangles into {}", self.rects.len(), result.len());

        Ok(ClipList::from_normalized(result))
    }
}
