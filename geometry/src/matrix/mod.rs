/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Transformation matrices
//!
//! `Matrix` is a plain affine transform in floating point. `FixedMatrix` wraps one with the extra state
//! needed to transform user-space coordinates into fixed-point device space quickly, and classifies it
//! with a `TransformKind` so that the stroker and path builder can pick the cheapest formula.
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let ctm     = Matrix::scaling(2.0, 2.0).rotate(90.0);
//! let point   = ctm.transform_point(Coord2(1.0, 0.0));
//! assert!(point == Coord2(0.0, 2.0));
//!
//! let back    = ctm.inverse_transform_point(point).unwrap();
//! assert!((back.0 - 1.0).abs() < 1e-9 && back.1.abs() < 1e-9);
//! ```
//!

mod fixed_matrix;
mod matrix;
mod transform_kind;

pub use self::fixed_matrix::*;
pub use self::matrix::*;
pub use self::transform_kind::*;
