/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::clip_rect::*;
use super::clip_list::*;
use crate::geo::*;
use crate::path::*;

use smallvec::SmallVec;

///
/// Where the outline enumerator is in its walk around the region
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum OutlineState {
    /// Looking for the next rectangle with an unvisited left edge, starting at the specified index
    Scanning(usize),

    /// Travelling down the left edge of a rectangle
    TracingLeft(usize),

    /// Travelling up the right edge of a rectangle
    TracingRight(usize),

    /// The current loop has returned to its start and needs a closepath
    Closing,

    /// Every edge has been visited
    Done,
}

///
/// Enumerates the outline of a clip list as path elements
///
/// Each loop starts at the top of the first unvisited left edge (in list order) and follows the boundary
/// with the region on the left of the direction of travel, down the left edges of rectangles and up their
/// right edges. Where two rectangles only meet at a corner, the outline turns so that each rectangle's loop
/// stays separate. Collinear edges of touching bands are merged, so the outline has no redundant vertices
/// along vertical edges. Holes are traced in the opposite direction to the loops that contain them.
///
pub struct ClipOutline<'a> {
    rects:          &'a [ClipRect],

    /// The `(start, end)` indexes of each band
    band_ranges:    Vec<(usize, usize)>,

    /// For each rectangle, the index of its band in `band_ranges`
    band_of_rect:   Vec<usize>,

    visited_left:   Vec<bool>,
    visited_right:  Vec<bool>,

    state:          OutlineState,
    loop_start:     usize,
    pending:        SmallVec<[FixedPoint; 2]>,
}

impl<'a> ClipOutline<'a> {
    ///
    /// Creates an enumerator for the outline of a clip list
    ///
    pub fn new(list: &'a ClipList) -> ClipOutline<'a> {
        let rects               = list.rects();
        let mut band_ranges     = vec![];
        let mut band_of_rect    = Vec::with_capacity(rects.len());

        let mut pos = 0;
        for band in list.bands() {
            band_of_rect.extend(band.iter().map(|_| band_ranges.len()));
            band_ranges.push((pos, pos + band.len()));

            pos += band.len();
        }

        ClipOutline {
            rects,
            band_ranges,
            band_of_rect,
            visited_left:   vec![false; rects.len()],
            visited_right:  vec![false; rects.len()],
            state:          OutlineState::Scanning(0),
            loop_start:     0,
            pending:        SmallVec::new(),
        }
    }

    #[inline]
    fn point(x: i32, y: i32) -> FixedPoint {
        FixedPoint::new(pixel_to_fixed(x), pixel_to_fixed(y))
    }

    ///
    /// The index of the first rectangle and the rectangles of the band directly below the band of a rectangle
    /// (empty if the next band does not touch it)
    ///
    fn band_below(&self, rect: usize) -> (usize, &'a [ClipRect]) {
        let rects   = self.rects;
        let band    = self.band_of_rect[rect];

        match self.band_ranges.get(band + 1) {
            Some((start, end)) if rects[*start].ymin == rects[rect].ymax    => (*start, &rects[*start..*end]),
            _                                                               => (0, &[]),
        }
    }

    ///
    /// The index of the first rectangle and the rectangles of the band directly above the band of a rectangle
    /// (empty if the previous band does not touch it)
    ///
    fn band_above(&self, rect: usize) -> (usize, &'a [ClipRect]) {
        let rects   = self.rects;
        let band    = self.band_of_rect[rect];

        match band.checked_sub(1).and_then(|above| self.band_ranges.get(above)) {
            Some((start, end)) if rects[*start].ymax == rects[rect].ymin    => (*start, &rects[*start..*end]),
            _                                                               => (0, &[]),
        }
    }

    ///
    /// Works out where the outline goes after travelling down the left edge of a rectangle
    ///
    /// Returns the next state and the corner points on the way there.
    ///
    fn after_left_edge(&self, idx: usize) -> (OutlineState, SmallVec<[FixedPoint; 2]>) {
        let rect        = self.rects[idx];
        let (x, y)      = (rect.xmin, rect.ymax);
        let (below_start, below) = self.band_below(idx);
        let corner      = Self::point(x, y);
        let mut corners = SmallVec::new();

        // The rectangle below that touches this corner, if there is one
        let touching = below.iter().position(|other| other.xmin <= x && x <= other.xmax);

        if let Some(touch_idx) = touching {
            let touch = below[touch_idx];

            if touch.xmin == x {
                // The edge continues straight down
                return (OutlineState::TracingLeft(below_start + touch_idx), corners);
            }

            if touch.xmax > x {
                // The region continues below and to the left: travel left until either band changes
                let (band_start, _) = self.band_ranges[self.band_of_rect[idx]];
                let left_of_rect    = if idx > band_start { Some(idx - 1) } else { None };

                corners.push(corner);
                return match left_of_rect {
                    Some(left) if self.rects[left].xmax > touch.xmin => {
                        corners.push(Self::point(self.rects[left].xmax, y));
                        (OutlineState::TracingRight(left), corners)
                    }

                    _ => {
                        corners.push(Self::point(touch.xmin, y));
                        (OutlineState::TracingLeft(below_start + touch_idx), corners)
                    }
                };
            }
        }

        // Travel right along the bottom of the rectangle
        corners.push(corner);

        let next_below = below.iter().position(|other| other.xmin > x);
        match next_below {
            Some(below_idx) if below[below_idx].xmin < rect.xmax => {
                corners.push(Self::point(below[below_idx].xmin, y));
                (OutlineState::TracingLeft(below_start + below_idx), corners)
            }

            _ => {
                corners.push(Self::point(rect.xmax, y));
                (OutlineState::TracingRight(idx), corners)
            }
        }
    }

    ///
    /// Works out where the outline goes after travelling up the right edge of a rectangle
    ///
    fn after_right_edge(&self, idx: usize) -> (OutlineState, SmallVec<[FixedPoint; 2]>) {
        let rect        = self.rects[idx];
        let (x, y)      = (rect.xmax, rect.ymin);
        let (above_start, above) = self.band_above(idx);
        let corner      = Self::point(x, y);
        let mut corners = SmallVec::new();

        let touching = above.iter().position(|other| other.xmin <= x && x <= other.xmax);

        if let Some(touch_idx) = touching {
            let touch = above[touch_idx];

            if touch.xmax == x {
                // The edge continues straight up
                return (OutlineState::TracingRight(above_start + touch_idx), corners);
            }

            if touch.xmin < x {
                // The region continues above and to the right: travel right until either band changes
                let (_, band_end)   = self.band_ranges[self.band_of_rect[idx]];
                let right_of_rect   = if idx + 1 < band_end { Some(idx + 1) } else { None };

                corners.push(corner);
                return match right_of_rect {
                    Some(right) if self.rects[right].xmin < touch.xmax => {
                        corners.push(Self::point(self.rects[right].xmin, y));
                        (OutlineState::TracingLeft(right), corners)
                    }

                    _ => {
                        corners.push(Self::point(touch.xmax, y));
                        (OutlineState::TracingRight(above_start + touch_idx), corners)
                    }
                };
            }
        }

        // Travel left along the top of the rectangle
        corners.push(corner);

        let next_above = above.iter().rposition(|other| other.xmax < x);
        match next_above {
            Some(above_idx) if above[above_idx].xmax > rect.xmin => {
                corners.push(Self::point(above[above_idx].xmax, y));
                (OutlineState::TracingRight(above_start + above_idx), corners)
            }

            _ => {
                corners.push(Self::point(rect.xmin, y));
                (OutlineState::TracingLeft(idx), corners)
            }
        }
    }

    ///
    /// Moves to the next state, queuing the corners passed on the way and detecting the end of the loop
    ///
    fn follow(&mut self, next: OutlineState, corners: SmallVec<[FixedPoint; 2]>) {
        let start_rect  = self.rects[self.loop_start];
        let start_point = Self::point(start_rect.xmin, start_rect.ymin);

        let already_visited = match next {
            OutlineState::TracingLeft(idx)  => self.visited_left[idx],
            OutlineState::TracingRight(idx) => self.visited_right[idx],
            _                               => true,
        };

        if already_visited {
            // Back at the start: the closepath draws the final edge
            self.pending.extend(corners.into_iter().filter(|corner| *corner != start_point));
            self.state = OutlineState::Closing;
        } else {
            match next {
                OutlineState::TracingLeft(idx)  => self.visited_left[idx] = true,
                OutlineState::TracingRight(idx) => self.visited_right[idx] = true,
                _                               => { }
            }

            self.pending.extend(corners);
            self.state = next;
        }
    }
}

impl<'a> Iterator for ClipOutline<'a> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        loop {
            if !self.pending.is_empty() {
                let point = self.pending.remove(0);
                return Some(PathElement::LineTo(point, SegmentNotes::NONE));
            }

            match self.state {
                OutlineState::Done => return None,

                OutlineState::Scanning(from) => {
                    match (from..self.rects.len()).find(|idx| !self.visited_left[*idx]) {
                        None        => { self.state = OutlineState::Done; }
                        Some(idx)   => {
                            let rect                = self.rects[idx];
                            self.loop_start         = idx;
                            self.visited_left[idx]  = true;
                            self.state              = OutlineState::TracingLeft(idx);

                            return Some(PathElement::MoveTo(Self::point(rect.xmin, rect.ymin)));
                        }
                    }
                }

                OutlineState::TracingLeft(idx) => {
                    let (next, corners) = self.after_left_edge(idx);
                    self.follow(next, corners);
                }

                OutlineState::TracingRight(idx) => {
                    let (next, corners) = self.after_right_edge(idx);
                    self.follow(next, corners);
                }

                OutlineState::Closing => {
                    self.state = OutlineState::Scanning(self.loop_start + 1);
                    return Some(PathElement::ClosePath);
                }
            }
        }
    }
}
