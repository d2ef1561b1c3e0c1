/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fixed_curve::*;
use crate::geo::*;
use crate::path::*;
use crate::error::*;
use crate::consts::*;

use itertools::*;
use roots::find_roots_quadratic;
use smallvec::{smallvec, SmallVec};

///
/// Finds the parameters in (0, 1) where one axis of a curve changes direction
///
/// These are the roots of the derivative `3at^2 + 2bt + c` of the curve polynomial. At most two values are
/// returned, in ascending order.
///
pub fn monotonic_points(v0: f64, v1: f64, v2: f64, v3: f64) -> SmallVec<[f64; 2]> {
    let c = 3.0 * (v1 - v0);
    let b = 3.0 * (v2 - v1) - c;
    let a = v3 - v0 - c - b;

    let mut result: SmallVec<[f64; 2]> = smallvec![];

    if a == 0.0 {
        // Derivative is linear
        if b != 0.0 {
            result.push(-c / (2.0 * b));
        }
    } else if c == 0.0 {
        // One root is at t = 0
        result.push(-2.0 * b / (3.0 * a));
    } else {
        result.extend(find_roots_quadratic(3.0 * a, 2.0 * b, c).as_ref().iter().copied());
    }

    result.retain(|t| *t > SMALL_DISTANCE && *t < 1.0 - SMALL_DISTANCE);
    result.sort_by(|a, b| a.total_cmp(b));
    result.dedup_by(|a, b| (*a - *b).abs() < SMALL_DISTANCE);

    result
}

///
/// The parameters where a curve must be split to leave pieces that are monotonic in both x and y
///
pub fn curve_split_points(curve: &FixedCurve) -> SmallVec<[f64; 4]> {
    let axis = |v0: Fixed, v1: Fixed, v2: Fixed, v3: Fixed| monotonic_points(v0.0 as f64, v1.0 as f64, v2.0 as f64, v3.0 as f64);

    let x_points = axis(curve.start.x, curve.cp1.x, curve.cp2.x, curve.end.x);
    let y_points = axis(curve.start.y, curve.cp1.y, curve.cp2.y, curve.end.y);

    x_points.into_iter()
        .merge_by(y_points, |a, b| a <= b)
        .dedup_by(|a, b| (*a - *b).abs() < SMALL_DISTANCE)
        .collect()
}

///
/// True if a curve never changes direction in x or in y
///
#[inline]
pub fn curve_is_monotonic(curve: &FixedCurve) -> bool {
    curve_split_points(curve).is_empty()
}

///
/// One axis of a curve as polynomial coefficients, in fixed units
///
#[derive(Copy, Clone)]
struct AxisPolynomial {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl AxisPolynomial {
    fn new(v0: Fixed, v1: Fixed, v2: Fixed, v3: Fixed) -> AxisPolynomial {
        let (a, b, c) = FixedCurve::coefficients(v0.0 as i64, v1.0 as i64, v2.0 as i64, v3.0 as i64);
        AxisPolynomial { a: a as f64, b: b as f64, c: c as f64, d: v0.0 as f64 }
    }

    #[inline]
    fn value_at(&self, t: f64) -> Fixed {
        Fixed((((self.a * t + self.b) * t + self.c) * t + self.d).round() as i32)
    }

    ///
    /// The two inner control values of the section between `t0` and `t1`
    ///
    fn section_control_values(&self, t0: f64, t1: f64) -> (Fixed, Fixed) {
        let AxisPolynomial { a, b, c, d } = *self;
        let u = t1 - t0;

        // Substitute t = t0 + u*s and read off the new coefficients
        let cc  = (3.0 * a * t0 * t0 + 2.0 * b * t0 + c) * u;
        let bb  = (3.0 * a * t0 + b) * u * u;
        let dd  = ((a * t0 + b) * t0 + c) * t0 + d;

        let v1  = dd + cc / 3.0;
        let v2  = v1 + (bb + cc) / 3.0;

        (Fixed(v1.round() as i32), Fixed(v2.round() as i32))
    }
}

///
/// Extracts the section of a curve between two parameter values
///
/// The end points of the section are evaluated exactly the same way for any parameter, so neighbouring
/// sections meet at the same fixed-point position. Parameters of 0 and 1 return the original end points.
///
pub fn section_of_curve(curve: &FixedCurve, t0: f64, t1: f64) -> FixedCurve {
    let x = AxisPolynomial::new(curve.start.x, curve.cp1.x, curve.cp2.x, curve.end.x);
    let y = AxisPolynomial::new(curve.start.y, curve.cp1.y, curve.cp2.y, curve.end.y);

    let point_at = |t: f64| {
        if t <= 0.0 {
            curve.start
        } else if t >= 1.0 {
            curve.end
        } else {
            FixedPoint::new(x.value_at(t), y.value_at(t))
        }
    };

    let (x1, x2) = x.section_control_values(t0, t1);
    let (y1, y2) = y.section_control_values(t0, t1);

    FixedCurve::new(point_at(t0), FixedPoint::new(x1, y1), FixedPoint::new(x2, y2), point_at(t1))
}

///
/// Splits a curve in two at `t`
///
#[inline]
pub fn split_curve(curve: &FixedCurve, t: f64) -> (FixedCurve, FixedCurve) {
    (section_of_curve(curve, 0.0, t), section_of_curve(curve, t, 1.0))
}

///
/// Appends the pieces of a curve that are monotonic in both x and y to a list of segments
///
/// The first piece carries `notes`; the rest also carry `NOT_FIRST`.
///
pub fn monotonize_curve(curve: &FixedCurve, notes: SegmentNotes, segments: &mut Vec<Segment>) -> Result<(), GeometryError> {
    let split_points = curve_split_points(curve);

    segments.try_reserve(split_points.len() + 1)?;

    let mut t0 = 0.0;
    for (idx, t1) in split_points.iter().copied().chain(Some(1.0)).enumerate() {
        let section     = section_of_curve(curve, t0, t1);
        let notes       = if idx == 0 { notes } else { notes | SegmentNotes::NOT_FIRST };

        segments.push(Segment::Curve { cp1: section.cp1, cp2: section.cp2, to: section.end, notes });
        t0 = t1;
    }

    Ok(())
}
