/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Fixed-point geometry
//!
//! Device-space geometry is stored in fixed point: a `Fixed` is a 32-bit integer with `FIXED_SHIFT`
//! bits of fraction. `FixedPoint` and `FixedRect` build on this. `Coord2` is the floating-point
//! counterpart used for user-space coordinates and for vector arithmetic.
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let half    = Fixed::from_f64(0.5).unwrap();
//! assert!(half == Fixed::HALF);
//! assert!(Fixed::from_f64(1.0e12).is_err());
//! ```
//!

mod coord2;
mod fixed;
mod fixed_point;
mod fixed_rect;

pub use self::coord2::*;
pub use self::fixed::*;
pub use self::fixed_point::*;
pub use self::fixed_rect::*;
