/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// A cubic bezier curve in fixed-point device coordinates
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FixedCurve {
    pub start:  FixedPoint,
    pub cp1:    FixedPoint,
    pub cp2:    FixedPoint,
    pub end:    FixedPoint,
}

impl FixedCurve {
    #[inline]
    pub fn new(start: FixedPoint, cp1: FixedPoint, cp2: FixedPoint, end: FixedPoint) -> FixedCurve {
        FixedCurve { start, cp1, cp2, end }
    }

    ///
    /// Splits this curve in half by de Casteljau subdivision
    ///
    pub fn split_midpoint(&self) -> (FixedCurve, FixedCurve) {
        // Averages are computed in 64 bits
        let mid = |a: FixedPoint, b: FixedPoint| {
            let average = |a: Fixed, b: Fixed| Fixed(((a.0 as i64 + b.0 as i64) >> 1) as i32);
            FixedPoint::new(average(a.x, b.x), average(a.y, b.y))
        };

        let p01     = mid(self.start, self.cp1);
        let p12     = mid(self.cp1, self.cp2);
        let p23     = mid(self.cp2, self.end);
        let p012    = mid(p01, p12);
        let p123    = mid(p12, p23);
        let center  = mid(p012, p123);

        (FixedCurve::new(self.start, p01, p012, center), FixedCurve::new(center, p123, p23, self.end))
    }

    ///
    /// The polynomial coefficients `(a, b, c)` of one axis, where `v(t) = a*t^3 + b*t^2 + c*t + v0`
    ///
    #[inline]
    pub(crate) fn coefficients(v0: i64, v1: i64, v2: i64, v3: i64) -> (i64, i64, i64) {
        let c = 3 * (v1 - v0);
        let b = 3 * (v2 - v1) - c;
        let a = v3 - v0 - c - b;

        (a, b, c)
    }

    ///
    /// The x and y coefficients of this curve
    ///
    pub(crate) fn xy_coefficients(&self) -> ((i64, i64, i64), (i64, i64, i64)) {
        let x = Self::coefficients(self.start.x.0 as i64, self.cp1.x.0 as i64, self.cp2.x.0 as i64, self.end.x.0 as i64);
        let y = Self::coefficients(self.start.y.0 as i64, self.cp1.y.0 as i64, self.cp2.y.0 as i64, self.end.y.0 as i64);

        (x, y)
    }

    ///
    /// Evaluates the curve at `t` using floating point
    ///
    pub fn point_at(&self, t: f64) -> Coord2 {
        let axis = |v0: Fixed, v1: Fixed, v2: Fixed, v3: Fixed| {
            let (a, b, c) = Self::coefficients(v0.0 as i64, v1.0 as i64, v2.0 as i64, v3.0 as i64);
            let value = ((a as f64 * t + b as f64) * t + c as f64) * t + v0.0 as f64;

            value / FIXED_SCALE
        };

        Coord2(axis(self.start.x, self.cp1.x, self.cp2.x, self.end.x), axis(self.start.y, self.cp1.y, self.cp2.y, self.end.y))
    }

    ///
    /// The bounds of the control polygon
    ///
    pub fn bounds(&self) -> FixedRect {
        FixedRect::from_points(self.start, self.end).union_point(self.cp1).union_point(self.cp2)
    }
}
