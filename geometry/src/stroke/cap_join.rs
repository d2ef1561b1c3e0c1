/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line_style::*;
use super::partial_line::*;
use crate::geo::*;
use crate::path::*;
use crate::consts::*;
use crate::error::*;

use log::*;
use smallvec::SmallVec;

/// The corner points of the polygon for a single stroked segment
pub type StrokePoints = SmallVec<[FixedPoint; 8]>;

///
/// Adds the points for a cap at one end of a line
///
/// Round caps are drawn with arcs after these points, so they add the same corners as a butt cap.
///
pub fn cap_points(cap: LineCap, end: &LineEnd, points: &mut StrokePoints) -> Result<(), GeometryError> {
    match cap {
        LineCap::Butt | LineCap::Round => {
            points.push(end.co);
            points.push(end.ce);
        }

        LineCap::Square => {
            points.push(end.co.checked_add(end.cdelta)?);
            points.push(end.ce.checked_add(end.cdelta)?);
        }

        LineCap::Triangle => {
            points.push(end.co);
            points.push(end.p.checked_add(end.cdelta)?);
            points.push(end.ce);
        }
    }

    Ok(())
}

///
/// Finds where two lines cross, each given as a point and a direction
///
/// Returns `None` when the lines are parallel or nearly so (or a direction has zero length). Otherwise returns
/// the crossing point, and whether it lies ahead of both points in their directions.
///
pub fn line_intersect(p1: FixedPoint, d1: FixedPoint, p2: FixedPoint, d2: FixedPoint) -> Option<(FixedPoint, bool)> {
    let (u1, v1)    = (d1.x.0 as f64, d1.y.0 as f64);
    let (u2, v2)    = (d2.x.0 as f64, d2.y.0 as f64);
    let denom       = u1 * v2 - u2 * v1;
    let x_diff      = (p2.x.0 as f64) - (p1.x.0 as f64);
    let y_diff      = (p2.y.0 as f64) - (p1.y.0 as f64);
    let max_result  = denom.abs() * (i32::MAX as f64);

    if x_diff.abs() >= max_result || y_diff.abs() >= max_result {
        trace!("Degenerate line intersection at {:?} and {:?}", p1, p2);
        return None;
    }

    let f1      = (v2 * x_diff - u2 * y_diff) / denom;
    let point   = FixedPoint::new(Fixed((p1.x.0 as f64 + f1 * u1) as i32), Fixed((p1.y.0 as f64 + f1 * v1) as i32));
    let ahead   = f1 >= 0.0 && if v1 * x_diff >= u1 * y_diff { denom >= 0.0 } else { denom < 0.0 };

    Some((point, ahead))
}

///
/// True if the turn from one segment to the next is anticlockwise
///
#[inline]
fn is_ccw(line: &PartialLine, next: &PartialLine) -> bool {
    (line.width.x.0 as f64) * (next.width.y.0 as f64) > (next.width.x.0 as f64) * (line.width.y.0 as f64)
}

///
/// True if the angle between two segments is wide enough for a miter join
///
fn miter_fits(line: &PartialLine, next: &PartialLine, ccw: bool, miter_check: f64) -> bool {
    // tan(a - b) for the directions a and b of the two cap deltas
    let (u1, v1)    = (line.e.cdelta.y.0 as f64, line.e.cdelta.x.0 as f64);
    let (u2, v2)    = (next.o.cdelta.y.0 as f64, next.o.cdelta.x.0 as f64);
    let mut num     = u1 * v2 - u2 * v1;
    let mut denom   = u1 * u2 + v1 * v2;

    if !ccw {
        num = -num;
    }

    if denom < 0.0 {
        num     = -num;
        denom   = -denom;
    }

    // Both angles are between 0 and 180 degrees, so their tangents can be compared once the signs are sorted out
    if miter_check > 0.0 {
        num < 0.0 || num >= denom * miter_check
    } else {
        num < 0.0 && num >= denom * miter_check
    }
}

///
/// Adds the points for a bevel, miter, triangle or missing join between two segments
///
/// Starts with the end corners of `line` and includes the start point of `next`, so that the points form a closed
/// polygon with the cap points of the start of `line`. The end corner on the outside of the turn is replaced with
/// the miter point when a miter fits.
///
pub fn line_join_points(join: LineJoin, miter_check: f64, line: &PartialLine, next: &PartialLine, points: &mut StrokePoints) -> Result<(), GeometryError> {
    if join == LineJoin::None {
        points.push(line.e.co);
        points.push(line.e.ce);
        return Ok(());
    }

    let ccw = is_ccw(line, next);

    // [jp1, np1, np2, jp2]: the outside corner of this line and the outside corner of the next one are `outside` and `next_outside`
    // Stroke adjustment can move the start of the next line, so its start point is used rather than our end point
    let mut join_points = if ccw {
        [line.e.co, next.o.ce, next.o.p, line.e.ce]
    } else {
        [line.e.co, next.o.p, next.o.co, line.e.ce]
    };
    let (outside, next_outside) = if ccw { (0, 1) } else { (3, 2) };

    if join == LineJoin::Triangle {
        let apex = join_points[outside].checked_sub(next.o.p)?.checked_add(join_points[next_outside])?;
        let [jp1, np1, np2, jp2] = join_points;

        if ccw {
            points.extend_from_slice(&[jp1, apex, np1, np2, jp2]);
        } else {
            points.extend_from_slice(&[jp1, np1, np2, apex, jp2]);
        }
        return Ok(());
    }

    // Corners in the same half pixel are left as a bevel without checking the miter
    if join == LineJoin::Miter && !join_points[outside].same_half_pixel(join_points[next_outside]) {
        if miter_fits(line, next, ccw, miter_check) {
            match line_intersect(join_points[outside], line.e.cdelta, join_points[next_outside], next.o.cdelta) {
                Some((miter_point, true))   => { join_points[outside] = miter_point; }
                _                           => { trace!("Miter join falls back to bevel"); }
            }
        }
    }

    points.extend_from_slice(&join_points);
    Ok(())
}

///
/// Adds a round cap to a path whose current point is the `co` corner of an end
///
pub fn add_round_cap(path: &mut Path, end: &LineEnd) -> Result<(), GeometryError> {
    let tip = end.p.checked_add(end.cdelta)?;

    path.add_partial_arc(tip, end.co.checked_add(end.cdelta)?, QUARTER_ARC_FRACTION)?;
    path.add_partial_arc(end.ce, end.ce.checked_add(end.cdelta)?, QUARTER_ARC_FRACTION)
}

///
/// Adds a series of points as lines, optionally starting a new subpath at the first one
///
pub fn add_points(path: &mut Path, points: &[FixedPoint], moveto_first: bool) -> Result<(), GeometryError> {
    match (moveto_first, points.split_first()) {
        (true, Some((first, rest))) => {
            path.add_point(*first)?;
            path.add_lines(rest)
        }

        _ => path.add_lines(points),
    }
}
