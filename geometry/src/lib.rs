/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_geometry
//!
//! `flo_geometry` is the device-independent path, clip and stroke engine for a PostScript-style imaging
//! pipeline. Geometry is built in user space, transformed through the current matrix into fixed-point
//! device coordinates, and then reduced to something a rasterizer can fill:
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let state           = ImagerState::default().with_line_width(2.0);
//! let mut path        = Path::new();
//!
//! {
//!     let mut user    = UserPath::new(&mut path, &state);
//!     user.move_to(0.0, 0.0).unwrap();
//!     user.line_to(10.0, 0.0).unwrap();
//!     user.line_to(10.0, 10.0).unwrap();
//!     user.close_path().unwrap();
//! }
//!
//! let outline         = stroke_path(&path, &state).unwrap();
//! let bounds          = outline.bounding_box().unwrap();
//! assert!(bounds.p.x.to_f64() < 0.0);
//! ```
//!
//! The main areas are:
//!
//! * `geo` and `matrix`: the fixed-point kernel (`Fixed`, `FixedPoint`, `FixedRect`, `Matrix`, `FixedMatrix`)
//! * `path`: the shared, copy-on-write path container and user-space path construction
//! * `reduce`: curve flattening and monotonizing
//! * `clip`: clip regions as rectangle lists, with fast rectangular intersection
//! * `dash` and `stroke`: dash expansion and stroke-to-fill conversion
//! * `device`: the primitives the stroker can call directly on a rasterizer
//!

#![allow(clippy::too_many_arguments)]

#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod test_assert;

mod consts;
pub mod clip;
pub mod dash;
pub mod device;
pub mod error;
pub mod geo;
pub mod matrix;
pub mod path;
pub mod reduce;
pub mod state;
pub mod stroke;

pub use self::clip::*;
pub use self::consts::*;
pub use self::dash::*;
pub use self::device::*;
pub use self::error::*;
pub use self::geo::*;
pub use self::matrix::*;
pub use self::path::*;
pub use self::reduce::*;
pub use self::state::*;
pub use self::stroke::*;
