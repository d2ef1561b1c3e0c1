/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::segment::*;
use crate::geo::*;
use crate::error::*;

///
/// How a rectangular subpath returns to its starting point
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RectangleClosure {
    /// Three lines with no closing segment (M, L, L, L): the fill closes it
    Open,

    /// A fourth line back to the start but no closepath (M, L, L, L, L)
    Implicit,

    /// A closepath, possibly after a redundant fourth line (M, L, L, L, [L], C)
    Explicit,
}

///
/// A sequence of connected segments, starting with a `Segment::Start`
///
#[derive(Clone, PartialEq, Debug)]
pub struct Subpath {
    pub(super) segments: Vec<Segment>,
    pub(super) is_closed: bool,
    pub(super) curve_count: usize,
}

impl Subpath {
    ///
    /// Allocates a new subpath starting at the specified point
    ///
    pub(crate) fn try_new(start: FixedPoint, capacity: usize) -> Result<Subpath, GeometryError> {
        let mut segments = vec![];
        segments.try_reserve(capacity.max(1))?;
        segments.push(Segment::Start { at: start });

        Ok(Subpath { segments, is_closed: false, curve_count: 0 })
    }

    #[inline]
    pub fn start_point(&self) -> FixedPoint {
        self.segments[0].end_point()
    }

    ///
    /// The point where the last segment ends (the start point for a closed subpath)
    ///
    #[inline]
    pub fn current_point(&self) -> FixedPoint {
        self.segments[self.segments.len() - 1].end_point()
    }

    ///
    /// The segments of this subpath, starting with the `Start` segment
    ///
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn curve_count(&self) -> usize {
        self.curve_count
    }

    ///
    /// True if this subpath has a start point but no other segments
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.len() <= 1
    }

    ///
    /// Appends a segment (storage must already have been reserved)
    ///
    pub(super) fn push(&mut self, segment: Segment) {
        if segment.is_curve() {
            self.curve_count += 1;
        }
        if let Segment::Close { .. } = segment {
            self.is_closed = true;
        }

        self.segments.push(segment);
    }

    ///
    /// The bounds of every point in this subpath, including curve control points
    ///
    pub fn bounds(&self) -> FixedRect {
        let start = FixedRect::at_point(self.start_point());
        self.segments[1..].iter().fold(start, |bounds, segment| segment.extend_bounds(bounds))
    }

    ///
    /// If this subpath describes an axis-aligned rectangle, returns its bounds and how it is closed
    ///
    /// Recognises M L L L, M L L L L (where the last line returns to the start), and either of those followed
    /// by a closepath.
    ///
    pub fn is_rectangle(&self) -> Option<(FixedRect, RectangleClosure)> {
        if self.curve_count != 0 || self.segments.len() < 4 {
            return None;
        }

        let line_to = |segment: &Segment| match segment {
            Segment::Line { to, .. }    => Some(*to),
            _                           => None,
        };

        let p0 = self.start_point();
        let p1 = line_to(&self.segments[1])?;
        let p2 = line_to(&self.segments[2])?;
        let p3 = line_to(&self.segments[3])?;

        let closure = match &self.segments[4..] {
            []                                                  => RectangleClosure::Open,
            [Segment::Close { .. }]                             => RectangleClosure::Explicit,
            [Segment::Line { to, .. }] if *to == p0             => RectangleClosure::Implicit,
            [Segment::Line { to, .. }, Segment::Close { .. }]   if *to == p0 => RectangleClosure::Explicit,
            _                                                   => return None,
        };

        let vertical_first      = p0.x == p1.x && p1.y == p2.y && p2.x == p3.x && p3.y == p0.y;
        let horizontal_first    = p0.y == p1.y && p1.x == p2.x && p2.y == p3.y && p3.x == p0.x;

        if vertical_first || horizontal_first {
            Some((FixedRect::from_points(p0, p2), closure))
        } else {
            None
        }
    }
}
