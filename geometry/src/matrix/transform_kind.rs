/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::matrix::*;

///
/// The shape of the linear part of a transform, worked out once so the hot geometry code can pick the
/// cheapest formula with a `match`
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TransformKind {
    /// No scaling, rotation or skew
    Identity,

    /// Scaling along the axes only (`xy == yx == 0`), possibly with different factors
    ScaleTranslate { sx: f64, sy: f64 },

    /// A rotation (optionally reflected) combined with the same scale on both axes. Includes 90 degree rotations.
    UniformRotation { scale: f64, reflected: bool },

    /// Anything else: skews and non-uniform rotated scales
    General,
}

impl TransformKind {
    ///
    /// Classifies the linear part of a matrix
    ///
    pub fn of(matrix: &Matrix) -> TransformKind {
        let Matrix { xx, xy, yx, yy, .. } = *matrix;

        if xy == 0.0 && yx == 0.0 {
            if xx == 1.0 && yy == 1.0 {
                TransformKind::Identity
            } else if xx == yy && xx > 0.0 {
                TransformKind::UniformRotation { scale: xx, reflected: false }
            } else {
                TransformKind::ScaleTranslate { sx: xx, sy: yy }
            }
        } else if xx == yy && xy == -yx {
            TransformKind::UniformRotation { scale: f64::hypot(xx, xy), reflected: false }
        } else if xx == -yy && xy == yx {
            TransformKind::UniformRotation { scale: f64::hypot(xx, xy), reflected: true }
        } else {
            TransformKind::General
        }
    }

    /// True if the transform preserves angles (identity or a uniform rotation)
    #[inline]
    pub fn is_conformal(&self) -> bool {
        matches!(self, TransformKind::Identity | TransformKind::UniformRotation { .. })
    }
}
