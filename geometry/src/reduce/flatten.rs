/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fixed_curve::*;
use super::samples::*;
use crate::geo::*;
use crate::path::*;
use crate::error::*;
use crate::consts::*;

use log::*;

///
/// True if evaluating the curve polynomial at `2^k` steps cannot overflow 64-bit arithmetic
///
fn coefficients_fit(coefficients: &[i64], k: u32) -> bool {
    let largest = coefficients.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0);
    let bits    = 64 - largest.leading_zeros();

    // Four terms of up to (bits + 3k) bits each are summed
    bits + 3 * k + 2 <= 62
}

///
/// Appends the points at `2^k` even steps along a curve (not including the start point)
///
fn sample_points(curve: &FixedCurve, k: u32, points: &mut Vec<FixedPoint>) -> Result<(), GeometryError> {
    let ((ax, bx, cx), (ay, by, cy)) = curve.xy_coefficients();

    if k > 0 && (k > K_SAMPLE_MAX || !coefficients_fit(&[ax, bx, cx, ay, by, cy], k)) {
        let (first, second) = curve.split_midpoint();

        sample_points(&first, k - 1, points)?;
        return sample_points(&second, k - 1, points);
    }

    let steps   = 1i64 << k;
    let shift   = 3 * k;
    let half    = (1i64 << shift) >> 1;

    points.try_reserve(steps as usize)?;

    // v(i) = v0 + (a*i^3 + b*i^2*N + c*i*N^2) / N^3, rounded
    let evaluate = |v0: Fixed, a: i64, b: i64, c: i64, i: i64| {
        let sum = ((a * i + b * steps) * i + c * steps * steps) * i;
        Fixed(v0.0 + ((sum + half) >> shift) as i32)
    };

    for i in 1..steps {
        points.push(FixedPoint::new(evaluate(curve.start.x, ax, bx, cx, i), evaluate(curve.start.y, ay, by, cy, i)));
    }

    points.push(curve.end);
    Ok(())
}

///
/// Finds the point on a tangent line that a neighbouring sample projects onto, returning the point a quarter
/// of the way along to that foot
///
fn tangent_point(origin: FixedPoint, direction: Coord2, sample: FixedPoint) -> Option<FixedPoint> {
    let length_sq = direction.dot(&direction);
    if length_sq <= 0.0 {
        return None;
    }

    let offset  = sample.to_coord2() - origin.to_coord2();
    let t       = offset.dot(&direction) / length_sq;
    if t <= 0.0 {
        return None;
    }

    let point   = origin.to_coord2() + direction * (t * 0.25);
    let point   = FixedPoint::from_f64_clamped(point.0, point.1);

    if point == origin || point == sample {
        None
    } else {
        Some(point)
    }
}

///
/// The tangent direction leaving `from`, using the further control point if the nearer one coincides with it
///
fn tangent_direction(from: FixedPoint, near: FixedPoint, far: FixedPoint) -> Option<Coord2> {
    if near != from {
        Some(near.to_coord2() - from.to_coord2())
    } else if far != from {
        Some(far.to_coord2() - from.to_coord2())
    } else {
        None
    }
}

///
/// Places an extra point on each end tangent so the first and last lines follow the curve's direction
///
fn adjust_to_tangents(curve: &FixedCurve, points: &mut Vec<FixedPoint>) -> Result<(), GeometryError> {
    if points.len() < 2 {
        return Ok(());
    }

    points.try_reserve(2)?;

    let before_end = points[points.len() - 2];
    if let Some(point) = tangent_direction(curve.end, curve.cp2, curve.cp1).and_then(|dir| tangent_point(curve.end, dir, before_end)) {
        points.insert(points.len() - 1, point);
    }

    let after_start = points[0];
    if let Some(point) = tangent_direction(curve.start, curve.cp1, curve.cp2).and_then(|dir| tangent_point(curve.start, dir, after_start)) {
        points.insert(0, point);
    }

    Ok(())
}

///
/// True if `point` continues in the direction from `before` to `previous` (within one fixed unit)
///
fn nearly_collinear(before: FixedPoint, previous: FixedPoint, point: FixedPoint) -> bool {
    let (ax, ay) = ((previous.x.0 - before.x.0) as i64, (previous.y.0 - before.y.0) as i64);
    let (bx, by) = ((point.x.0 - previous.x.0) as i64, (point.y.0 - previous.y.0) as i64);

    let cross   = ax * by - ay * bx;
    let dot     = ax * bx + ay * by;
    let span    = ((point.x.0 - before.x.0) as i64).abs().max(((point.y.0 - before.y.0) as i64).abs());

    dot > 0 && cross.abs() <= span
}

///
/// Appends the lines that replace a curve to a list of segments
///
/// The first line carries `notes`; the rest also carry `NOT_FIRST`. With `accurate` set, the first and last
/// lines are shortened to follow the curve's end tangents. When the flatness is a pixel or more, samples in
/// the same half pixel as the previous point are dropped and nearly collinear lines are merged.
///
pub fn flatten_curve(curve: &FixedCurve, notes: SegmentNotes, flatness: f64, accurate: bool, lines: &mut Vec<Segment>) -> Result<(), GeometryError> {
    let fixed_flatness  = Fixed::from_f64_clamped(flatness.max(0.0));
    let k               = log2_samples(curve, fixed_flatness);
    let simplify        = fixed_flatness >= Fixed::ONE;

    let mut points = vec![];
    sample_points(curve, k, &mut points)?;
    if accurate {
        adjust_to_tangents(curve, &mut points)?;
    }

    trace!("Flattening curve k={} ({} points)", k, points.len());

    lines.try_reserve(points.len())?;

    let first_line      = lines.len();
    let mut before      = None;
    let mut previous    = curve.start;

    for (idx, point) in points.iter().enumerate() {
        let point   = *point;
        let is_last = idx + 1 == points.len();

        if point == previous || (simplify && !is_last && point.same_half_pixel(previous)) {
            continue;
        }

        if let (true, Some(before)) = (simplify, before) {
            if nearly_collinear(before, previous, point) {
                if let Some(Segment::Line { to, .. }) = lines.last_mut() {
                    *to         = point;
                    previous    = point;
                    continue;
                }
            }
        }

        let line_notes = if lines.len() == first_line { notes } else { notes | SegmentNotes::NOT_FIRST };
        lines.push(Segment::Line { to: point, notes: line_notes });

        before      = Some(previous);
        previous    = point;
    }

    // A curve that collapses to a point still produces a line
    if lines.len() == first_line {
        lines.push(Segment::Line { to: curve.end, notes });
    }

    test_assert!(lines.last().map(|line| line.end_point()) == Some(curve.end));

    Ok(())
}
