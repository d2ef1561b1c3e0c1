/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Curve reduction
//!
//! Rasterizers and the stroker work on simpler geometry than cubic curves. `Path::flatten` replaces each
//! curve with `2^k` lines, where `k` comes from `log2_samples` and the flatness tolerance, and
//! `Path::monotonize` splits curves where they change direction in x or y:
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let mut path = Path::new();
//! path.add_point(FixedPoint::from_int(0, 0).unwrap()).unwrap();
//! path.add_curve(FixedPoint::from_int(0, 100).unwrap(), FixedPoint::from_int(100, 100).unwrap(), FixedPoint::from_int(100, 0).unwrap()).unwrap();
//!
//! let flat        = path.flatten(0.5, false).unwrap();
//! let monotonic   = path.monotonize().unwrap();
//!
//! assert!(!flat.has_curves());
//! assert!(monotonic.curve_count() == 2);
//! ```
//!

mod fixed_curve;
mod flatten;
mod monotonic;
mod reduce_path;
mod samples;

pub use self::fixed_curve::*;
pub use self::flatten::*;
pub use self::monotonic::*;
pub use self::reduce_path::*;
pub use self::samples::*;
