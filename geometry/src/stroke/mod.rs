/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Stroking
//!
//! A stroke is converted into filled polygons one line at a time. Each line of the (flattened and dashed)
//! path becomes a `PartialLine`, which knows the corners of its caps. Neighbouring lines are connected with
//! the join from the `LineParams`, and the ends of open subpaths are finished with the line cap.
//!
//! `stroke_path` collects every polygon into a path that can be filled with the non-zero winding rule:
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let state       = ImagerState::default()
//!     .with_line_width(4.0)
//!     .with_line_cap(LineCap::Square)
//!     .with_fill_adjust(FixedPoint::ORIGIN);
//!
//! let mut path    = Path::new();
//! path.add_point(FixedPoint::from_int(10, 10).unwrap()).unwrap();
//! path.add_line(FixedPoint::from_int(20, 10).unwrap()).unwrap();
//!
//! let stroke      = stroke_path(&path, &state).unwrap();
//! let bounds      = stroke.bounding_box().unwrap();
//!
//! assert!(bounds.p == FixedPoint::from_int(8, 8).unwrap());
//! assert!(bounds.q == FixedPoint::from_int(22, 12).unwrap());
//! ```
//!
//! `stroke_path_to_device` sends the polygons to a `Device` instead, using its simpler primitives where it can.
//!

mod cap_join;
mod line_params;
mod line_style;
mod partial_line;
mod stroker;

pub use self::cap_join::*;
pub use self::line_params::*;
pub use self::line_style::*;
pub use self::partial_line::*;
pub use self::stroker::*;
