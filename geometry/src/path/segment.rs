/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;
use crate::error::*;

use std::ops::*;

///
/// Flags attached to a segment describing where it came from
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct SegmentNotes(pub u8);

impl SegmentNotes {
    pub const NONE: SegmentNotes        = SegmentNotes(0);

    /// The segment continues a curve or arc that was split into pieces: the stroker uses the curve join before it
    pub const NOT_FIRST: SegmentNotes   = SegmentNotes(1);

    #[inline]
    pub fn contains(self, notes: SegmentNotes) -> bool {
        (self.0 & notes.0) == notes.0 && notes.0 != 0
    }
}

impl BitOr for SegmentNotes {
    type Output = SegmentNotes;

    #[inline]
    fn bitor(self, rhs: SegmentNotes) -> SegmentNotes {
        SegmentNotes(self.0 | rhs.0)
    }
}

impl BitOrAssign for SegmentNotes {
    #[inline]
    fn bitor_assign(&mut self, rhs: SegmentNotes) {
        self.0 |= rhs.0;
    }
}

///
/// A single element of a subpath
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Segment {
    /// The point where a subpath starts
    Start { at: FixedPoint },

    /// A straight line from the previous point
    Line { to: FixedPoint, notes: SegmentNotes },

    /// A cubic bezier curve from the previous point
    Curve { cp1: FixedPoint, cp2: FixedPoint, to: FixedPoint, notes: SegmentNotes },

    /// A line back to the start of the subpath, closing it
    Close { to: FixedPoint, notes: SegmentNotes },
}

impl Segment {
    ///
    /// The point where this segment ends
    ///
    #[inline]
    pub fn end_point(&self) -> FixedPoint {
        match self {
            Segment::Start { at }           => *at,
            Segment::Line { to, .. }        => *to,
            Segment::Curve { to, .. }       => *to,
            Segment::Close { to, .. }       => *to,
        }
    }

    #[inline]
    pub fn notes(&self) -> SegmentNotes {
        match self {
            Segment::Start { .. }           => SegmentNotes::NONE,
            Segment::Line { notes, .. }     => *notes,
            Segment::Curve { notes, .. }    => *notes,
            Segment::Close { notes, .. }    => *notes,
        }
    }

    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self, Segment::Curve { .. })
    }

    ///
    /// Applies a function to every point in this segment (including control points)
    ///
    pub fn try_map_points<F>(&self, mut map: F) -> Result<Segment, GeometryError>
    where
        F: FnMut(FixedPoint) -> Result<FixedPoint, GeometryError>,
    {
        Ok(match *self {
            Segment::Start { at }                       => Segment::Start { at: map(at)? },
            Segment::Line { to, notes }                 => Segment::Line { to: map(to)?, notes },
            Segment::Curve { cp1, cp2, to, notes }      => Segment::Curve { cp1: map(cp1)?, cp2: map(cp2)?, to: map(to)?, notes },
            Segment::Close { to, notes }                => Segment::Close { to: map(to)?, notes },
        })
    }

    ///
    /// Grows a bounding box to include every point of this segment
    ///
    #[inline]
    pub(crate) fn extend_bounds(&self, bounds: FixedRect) -> FixedRect {
        match self {
            Segment::Curve { cp1, cp2, to, .. } => bounds.union_point(*cp1).union_point(*cp2).union_point(*to),
            other                               => bounds.union_point(other.end_point()),
        }
    }
}
