/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::user_path::*;
use crate::geo::*;
use crate::matrix::*;
use crate::error::*;

use log::*;

///
/// How an arc section connects to the path before it
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum ArcStart {
    /// Draw a line from the current point to the start of the arc (or move there if there is no current point)
    Connect,

    /// The arc continues from the end of the previous section
    Continue,
}

///
/// The fraction of the distance to the tangent intersection at which to place the control points of a
/// curve approximating a circular arc of radius `radius` (distance_sq is the squared distance from the
/// arc's start point to the tangent intersection)
///
fn arc_fraction(radius: f64, distance_sq: f64) -> f64 {
    let radius_sq = radius * radius;

    if distance_sq >= radius_sq * 1.0e8 {
        // Almost zero radius (this also catches distance == radius == 0)
        0.0
    } else {
        (4.0 / 3.0) / (1.0 + (1.0 + distance_sq / radius_sq).sqrt())
    }
}

impl<'a> UserPath<'a> {
    ///
    /// Adds a section of arc of up to 90 degrees, from `start` to `end` with tangents meeting at `corner`
    ///
    fn add_arc_section(&mut self, how: ArcStart, radius: f64, start: Coord2, end: Coord2, corner: Coord2) -> Result<(), GeometryError> {
        let to_corner   = corner - start;
        let fraction    = arc_fraction(radius, to_corner.dot(&to_corner));

        let start       = self.to_device(start.0, start.1)?;
        let end         = self.to_device(end.0, end.1)?;
        let corner      = self.to_device(corner.0, corner.1)?;

        trace!("Arc section f={} start={:?} end={:?}", fraction, start, end);

        match how {
            ArcStart::Continue                                          => { }
            ArcStart::Connect if self.path.current_point().is_ok()      => self.path.add_line(start)?,
            ArcStart::Connect                                           => self.path.add_point(start)?,
        }

        self.path.add_partial_arc(end, corner, fraction)
    }

    ///
    /// Adds a circular arc, splitting it into sections of at most 90 degrees
    ///
    fn add_arc(&mut self, clockwise: bool, center: Coord2, radius: f64, start_angle: f64, end_angle: f64) -> Result<(), GeometryError> {
        let (mut start_angle, mut end_angle, radius) = if radius < 0.0 {
            (start_angle + 180.0, end_angle + 180.0, -radius)
        } else {
            (start_angle, end_angle, radius)
        };

        let (sin, cos)  = sin_cos_degrees(start_angle % 360.0);
        let mut sin0    = radius * sin;
        let mut cos0    = radius * cos;
        let mut start   = center + Coord2(cos0, sin0);
        let mut how     = ArcStart::Connect;

        // Reduce to quadrants
        if clockwise {
            while start_angle < end_angle { end_angle -= 360.0; }

            while end_angle - start_angle < -90.0 {
                let swap    = sin0;
                sin0        = -cos0;
                cos0        = swap;

                let end     = center + Coord2(cos0, sin0);
                self.add_arc_section(how, radius, start, end, start + Coord2(cos0, sin0))?;

                start       = end;
                start_angle -= 90.0;
                how         = ArcStart::Continue;
            }
        } else {
            while end_angle < start_angle { end_angle += 360.0; }

            while end_angle - start_angle > 90.0 {
                let swap    = cos0;
                cos0        = -sin0;
                sin0        = swap;

                let end     = center + Coord2(cos0, sin0);
                self.add_arc_section(how, radius, start, end, start + Coord2(cos0, sin0))?;

                start       = end;
                start_angle += 90.0;
                how         = ArcStart::Continue;
            }
        }

        // The remaining section is within 90 degrees: the tangents meet at tan(angle/2) from the start
        let half_tan    = ((end_angle - start_angle).to_radians() / 2.0).tan();
        let corner      = Coord2(start.0 - half_tan * sin0, start.1 + half_tan * cos0);
        let (sin, cos)  = sin_cos_degrees(end_angle);
        let end         = center + Coord2(radius * cos, radius * sin);

        self.add_arc_section(how, radius, start, end, corner)
    }

    ///
    /// Adds a counter-clockwise arc around a center point (PostScript `arc`)
    ///
    /// A line is drawn from the current point (if any) to the start of the arc.
    ///
    pub fn arc(&mut self, xc: f64, yc: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<&mut Self, GeometryError> {
        self.add_arc(false, Coord2(xc, yc), radius, start_angle, end_angle)?;
        Ok(self)
    }

    ///
    /// Adds a clockwise arc around a center point (PostScript `arcn`)
    ///
    pub fn arcn(&mut self, xc: f64, yc: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<&mut Self, GeometryError> {
        self.add_arc(true, Coord2(xc, yc), radius, start_angle, end_angle)?;
        Ok(self)
    }

    ///
    /// Adds an arc of the given radius tangent to the line from the current point to `(x1, y1)` and to the
    /// line from `(x1, y1)` to `(x2, y2)` (PostScript `arcto`)
    ///
    /// Returns the two tangent points. When the three points are collinear, a line is drawn to `(x1, y1)`
    /// and both tangent points are that point.
    ///
    pub fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> Result<(Coord2, Coord2), GeometryError> {
        if radius < 0.0 {
            return Err(GeometryError::UndefinedResult);
        }

        let p0      = self.current_point()?;
        let p1      = Coord2(x1, y1);
        let p2      = Coord2(x2, y2);

        let d0      = p0 - p1;
        let d2      = p2 - p1;
        let sql0    = d0.dot(&d0);
        let sql2    = d2.dot(&d2);

        // Distance from p1 to the tangent points, found from tan(half angle) without trig
        let num     = d0.1 * d2.0 - d2.1 * d0.0;
        let denom   = (sql0 * sql2).sqrt() - d0.dot(&d2);

        if num.abs() < 1.0e-6 || denom.abs() < 1.0e-6 {
            self.line_to(x1, y1)?;
            return Ok((p1, p1));
        }

        let dist    = (radius * num / denom).abs();
        let t0      = p1 + d0 * (dist / sql0.sqrt());
        let t2      = p1 + d2 * (dist / sql2.sqrt());

        self.add_arc_section(ArcStart::Connect, radius, t0, t2, p1)?;

        Ok((t0, t2))
    }
}
