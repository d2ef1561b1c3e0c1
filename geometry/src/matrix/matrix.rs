/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;
use crate::error::*;

///
/// An affine transformation in the PostScript convention
///
/// A point `(x, y)` maps to `(x*xx + y*yx + tx, x*xy + y*yy + ty)`.
///
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::identity()
    }
}

///
/// Returns the sine and cosine of an angle in degrees, exactly when the angle is a multiple of 90
///
pub fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let quarter = degrees / 90.0;

    if quarter.floor() == quarter && quarter.is_finite() {
        match (quarter as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        degrees.to_radians().sin_cos()
    }
}

impl Matrix {
    #[inline]
    pub const fn identity() -> Matrix {
        Matrix { xx: 1.0, xy: 0.0, yx: 0.0, yy: 1.0, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn translation(dx: f64, dy: f64) -> Matrix {
        Matrix { xx: 1.0, xy: 0.0, yx: 0.0, yy: 1.0, tx: dx, ty: dy }
    }

    #[inline]
    pub const fn scaling(sx: f64, sy: f64) -> Matrix {
        Matrix { xx: sx, xy: 0.0, yx: 0.0, yy: sy, tx: 0.0, ty: 0.0 }
    }

    ///
    /// A rotation counter-clockwise by an angle in degrees
    ///
    pub fn rotation(degrees: f64) -> Matrix {
        let (sin, cos) = sin_cos_degrees(degrees);

        Matrix { xx: cos, xy: sin, yx: -sin, yy: cos, tx: 0.0, ty: 0.0 }
    }

    /// True if the matrix has no rotation or skew component (`xy` and `yx` are both zero)
    #[inline]
    pub fn is_xxyy(&self) -> bool {
        self.xy == 0.0 && self.yx == 0.0
    }

    /// True if the matrix swaps the axes (`xx` and `yy` are both zero)
    #[inline]
    pub fn is_xyyx(&self) -> bool {
        self.xx == 0.0 && self.yy == 0.0
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    ///
    /// True if this matrix flips the orientation of the plane
    ///
    #[inline]
    pub fn is_reflected(&self) -> bool {
        self.xy * self.yx > self.xx * self.yy
    }

    ///
    /// Returns the matrix that applies this transform followed by `then`
    ///
    pub fn multiply(&self, then: &Matrix) -> Matrix {
        let (m1, m2) = (self, then);

        if m1.is_xxyy() && m2.is_xxyy() {
            Matrix {
                xx: m1.xx * m2.xx,
                xy: 0.0,
                yx: 0.0,
                yy: m1.yy * m2.yy,
                tx: m1.tx * m2.xx + m2.tx,
                ty: m1.ty * m2.yy + m2.ty,
            }
        } else {
            Matrix {
                xx: m1.xx * m2.xx + m1.xy * m2.yx,
                xy: m1.xx * m2.xy + m1.xy * m2.yy,
                yx: m1.yx * m2.xx + m1.yy * m2.yx,
                yy: m1.yx * m2.xy + m1.yy * m2.yy,
                tx: m1.tx * m2.xx + m1.ty * m2.yx + m2.tx,
                ty: m1.tx * m2.xy + m1.ty * m2.yy + m2.ty,
            }
        }
    }

    ///
    /// Returns the inverse of this matrix, or `UndefinedResult` if it is singular
    ///
    pub fn invert(&self) -> Result<Matrix, GeometryError> {
        if self.is_xxyy() {
            if self.xx == 0.0 || self.yy == 0.0 {
                return Err(GeometryError::UndefinedResult);
            }

            Ok(Matrix {
                xx: 1.0 / self.xx,
                xy: 0.0,
                yx: 0.0,
                yy: 1.0 / self.yy,
                tx: -self.tx / self.xx,
                ty: -self.ty / self.yy,
            })
        } else {
            let det = self.determinant();
            if det == 0.0 || !det.is_finite() {
                return Err(GeometryError::UndefinedResult);
            }

            let xx = self.yy / det;
            let xy = -self.xy / det;
            let yx = -self.yx / det;
            let yy = self.xx / det;

            Ok(Matrix {
                xx, xy, yx, yy,
                tx: -(self.tx * xx + self.ty * yx),
                ty: -(self.tx * xy + self.ty * yy),
            })
        }
    }

    ///
    /// Moves the origin of this matrix by a distance in its own (untransformed) coordinates
    ///
    pub fn translate(&self, dx: f64, dy: f64) -> Matrix {
        let delta = self.transform_distance(Coord2(dx, dy));

        Matrix { tx: self.tx + delta.0, ty: self.ty + delta.1, ..*self }
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Matrix {
        Matrix {
            xx: self.xx * sx,
            xy: self.xy * sx,
            yx: self.yx * sy,
            yy: self.yy * sy,
            ..*self
        }
    }

    pub fn rotate(&self, degrees: f64) -> Matrix {
        let (sin, cos) = sin_cos_degrees(degrees);

        Matrix {
            xx: cos * self.xx + sin * self.yx,
            xy: cos * self.xy + sin * self.yy,
            yx: cos * self.yx - sin * self.xx,
            yy: cos * self.yy - sin * self.xy,
            ..*self
        }
    }

    #[inline]
    pub fn transform_point(&self, point: Coord2) -> Coord2 {
        let Coord2(x, y) = point;
        Coord2(x * self.xx + y * self.yx + self.tx, x * self.xy + y * self.yy + self.ty)
    }

    ///
    /// Transforms a distance (ignoring the translation)
    ///
    #[inline]
    pub fn transform_distance(&self, distance: Coord2) -> Coord2 {
        let Coord2(dx, dy) = distance;
        Coord2(dx * self.xx + dy * self.yx, dx * self.xy + dy * self.yy)
    }

    pub fn inverse_transform_point(&self, point: Coord2) -> Result<Coord2, GeometryError> {
        let Coord2(x, y) = point;

        if self.is_xxyy() {
            if self.xx == 0.0 || self.yy == 0.0 {
                return Err(GeometryError::UndefinedResult);
            }
            Ok(Coord2((x - self.tx) / self.xx, (y - self.ty) / self.yy))
        } else if self.is_xyyx() {
            if self.xy == 0.0 || self.yx == 0.0 {
                return Err(GeometryError::UndefinedResult);
            }
            Ok(Coord2((y - self.ty) / self.xy, (x - self.tx) / self.yx))
        } else {
            Ok(self.invert()?.transform_point(point))
        }
    }

    pub fn inverse_transform_distance(&self, distance: Coord2) -> Result<Coord2, GeometryError> {
        let Coord2(dx, dy) = distance;

        if self.is_xxyy() {
            if self.xx == 0.0 || self.yy == 0.0 {
                return Err(GeometryError::UndefinedResult);
            }
            Ok(Coord2(dx / self.xx, dy / self.yy))
        } else if self.is_xyyx() {
            if self.xy == 0.0 || self.yx == 0.0 {
                return Err(GeometryError::UndefinedResult);
            }
            Ok(Coord2(dy / self.xy, dx / self.yx))
        } else {
            let det = self.determinant();
            if det == 0.0 {
                return Err(GeometryError::UndefinedResult);
            }
            Ok(Coord2((dx * self.yy - dy * self.yx) / det, (dy * self.xx - dx * self.xy) / det))
        }
    }

    ///
    /// Transforms a bounding box, returning the box that encloses all four transformed corners
    ///
    pub fn transform_bbox(&self, min: Coord2, max: Coord2) -> (Coord2, Coord2) {
        let corners = [
            self.transform_point(Coord2(min.0, min.1)),
            self.transform_point(Coord2(max.0, min.1)),
            self.transform_point(Coord2(min.0, max.1)),
            self.transform_point(Coord2(max.0, max.1)),
        ];

        corners[1..].iter().fold((corners[0], corners[0]), |(lo, hi), c| {
            (Coord2(lo.0.min(c.0), lo.1.min(c.1)), Coord2(hi.0.max(c.0), hi.1.max(c.1)))
        })
    }
}
