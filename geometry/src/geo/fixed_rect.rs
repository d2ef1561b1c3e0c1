/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fixed::*;
use super::fixed_point::*;

///
/// An axis-aligned rectangle in fixed-point device coordinates
///
/// `p` is the minimum corner and `q` is the maximum corner. A rectangle where `p == q` is a valid
/// zero-area rectangle positioned at that point.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FixedRect {
    pub p: FixedPoint,
    pub q: FixedPoint,
}

impl FixedRect {
    #[inline]
    pub const fn new(p: FixedPoint, q: FixedPoint) -> FixedRect {
        FixedRect { p, q }
    }

    ///
    /// Creates a rectangle with the two points as opposite corners
    ///
    #[inline]
    pub fn from_points(a: FixedPoint, b: FixedPoint) -> FixedRect {
        FixedRect {
            p: FixedPoint::new(a.x.min(b.x), a.y.min(b.y)),
            q: FixedPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    ///
    /// A zero-area rectangle located at a point
    ///
    #[inline]
    pub fn at_point(point: FixedPoint) -> FixedRect {
        FixedRect { p: point, q: point }
    }

    ///
    /// The rectangle covering the whole fixed-point range
    ///
    #[inline]
    pub fn everything() -> FixedRect {
        FixedRect {
            p: FixedPoint::new(Fixed::MIN, Fixed::MIN),
            q: FixedPoint::new(Fixed::MAX, Fixed::MAX),
        }
    }

    #[inline]
    pub fn width(&self) -> Fixed {
        self.q.x - self.p.x
    }

    #[inline]
    pub fn height(&self) -> Fixed {
        self.q.y - self.p.y
    }

    /// True if this rectangle covers no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.p.x >= self.q.x || self.p.y >= self.q.y
    }

    ///
    /// Grows this rectangle so it includes a point
    ///
    #[inline]
    pub fn union_point(&self, point: FixedPoint) -> FixedRect {
        FixedRect {
            p: FixedPoint::new(self.p.x.min(point.x), self.p.y.min(point.y)),
            q: FixedPoint::new(self.q.x.max(point.x), self.q.y.max(point.y)),
        }
    }

    #[inline]
    pub fn union(&self, other: &FixedRect) -> FixedRect {
        self.union_point(other.p).union_point(other.q)
    }

    ///
    /// The overlap between two rectangles
    ///
    /// When the rectangles do not overlap, the result is collapsed to a zero-area rectangle so that `p <= q`
    /// always holds.
    ///
    pub fn intersection(&self, other: &FixedRect) -> FixedRect {
        let px = self.p.x.max(other.p.x);
        let py = self.p.y.max(other.p.y);
        let qx = self.q.x.min(other.q.x).max(px);
        let qy = self.q.y.min(other.q.y).max(py);

        FixedRect::new(FixedPoint::new(px, py), FixedPoint::new(qx, qy))
    }

    #[inline]
    pub fn contains_point(&self, point: FixedPoint) -> bool {
        point.x >= self.p.x && point.x <= self.q.x && point.y >= self.p.y && point.y <= self.q.y
    }

    /// True if the other rectangle lies entirely within this one
    #[inline]
    pub fn contains_rect(&self, other: &FixedRect) -> bool {
        other.p.x >= self.p.x && other.q.x <= self.q.x && other.p.y >= self.p.y && other.q.y <= self.q.y
    }

    /// True if the two rectangles share any area
    #[inline]
    pub fn overlaps(&self, other: &FixedRect) -> bool {
        self.p.x < other.q.x && other.p.x < self.q.x && self.p.y < other.q.y && other.p.y < self.q.y
    }

    ///
    /// The smallest whole-pixel rectangle that contains this one
    ///
    #[inline]
    pub fn to_pixel_bounds(&self) -> FixedRect {
        FixedRect {
            p: FixedPoint::new(self.p.x.floor(), self.p.y.floor()),
            q: FixedPoint::new(self.q.x.ceiling(), self.q.y.ceiling()),
        }
    }
}
