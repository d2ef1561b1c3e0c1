/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::matrix::*;
use super::transform_kind::*;
use crate::geo::*;
use crate::error::*;

///
/// A matrix that maps user space onto fixed-point device space
///
/// The translation is cached in fixed point when it fits, which lets `transform_to_fixed` do most of its
/// work with a couple of multiplies and an integer add. When the translation does not fit, points are
/// transformed in floating point and converted at the end.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FixedMatrix {
    matrix: Matrix,
    kind: TransformKind,
    tx_fixed: Fixed,
    ty_fixed: Fixed,
    translation_fits: bool,
}

impl Default for FixedMatrix {
    fn default() -> FixedMatrix {
        FixedMatrix::new(Matrix::identity())
    }
}

impl From<Matrix> for FixedMatrix {
    #[inline]
    fn from(matrix: Matrix) -> FixedMatrix {
        FixedMatrix::new(matrix)
    }
}

impl FixedMatrix {
    ///
    /// Creates a fixed matrix, working out whether its translation fits in fixed point
    ///
    pub fn new(matrix: Matrix) -> FixedMatrix {
        let tx = Fixed::from_f64(matrix.tx);
        let ty = Fixed::from_f64(matrix.ty);

        let (tx_fixed, ty_fixed, translation_fits) = match (tx, ty) {
            (Ok(tx), Ok(ty))    => (tx, ty, true),
            _                   => (Fixed::ZERO, Fixed::ZERO, false),
        };

        FixedMatrix {
            matrix,
            kind: TransformKind::of(&matrix),
            tx_fixed,
            ty_fixed,
            translation_fits,
        }
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    #[inline]
    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// True if the translation of this matrix is exactly representable in fixed point
    #[inline]
    pub fn translation_fits(&self) -> bool {
        self.translation_fits
    }

    ///
    /// The translation as a fixed-point value (only meaningful when `translation_fits()` is true)
    ///
    #[inline]
    pub fn fixed_translation(&self) -> FixedPoint {
        FixedPoint::new(self.tx_fixed, self.ty_fixed)
    }

    ///
    /// Transforms a user-space point to device space, failing with `Limit` if the result does not fit
    ///
    pub fn transform_to_fixed(&self, x: f64, y: f64) -> Result<FixedPoint, GeometryError> {
        // The linear part alone can be out of range when the translation brings the point back
        let linear = if self.translation_fits { self.distance_to_fixed(x, y).ok() } else { None };

        match linear {
            Some(linear)    => linear.checked_add(self.fixed_translation()),
            None            => {
                let device = self.matrix.transform_point(Coord2(x, y));
                FixedPoint::from_f64(device.0, device.1)
            }
        }
    }

    ///
    /// Transforms a user-space point to device space, clamping coordinates that do not fit
    ///
    pub fn transform_to_fixed_clamped(&self, x: f64, y: f64) -> FixedPoint {
        match self.transform_to_fixed(x, y) {
            Ok(point)   => point,
            Err(_)      => {
                let device = self.matrix.transform_point(Coord2(x, y));
                FixedPoint::from_f64_clamped(device.0, device.1)
            }
        }
    }

    ///
    /// Transforms a user-space distance to device space
    ///
    pub fn distance_to_fixed(&self, dx: f64, dy: f64) -> Result<FixedPoint, GeometryError> {
        let Matrix { xx, xy, yx, yy, .. } = self.matrix;

        match self.kind {
            TransformKind::Identity                     => FixedPoint::from_f64(dx, dy),
            TransformKind::ScaleTranslate { sx, sy }    => FixedPoint::from_f64(dx * sx, dy * sy),
            _                                           => FixedPoint::from_f64(dx * xx + dy * yx, dx * xy + dy * yy),
        }
    }

    ///
    /// Maps a device-space distance back into user space
    ///
    pub fn inverse_distance(&self, dx: f64, dy: f64) -> Result<Coord2, GeometryError> {
        match self.kind {
            TransformKind::Identity => Ok(Coord2(dx, dy)),
            _                       => self.matrix.inverse_transform_distance(Coord2(dx, dy)),
        }
    }
}
