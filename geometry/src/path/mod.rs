/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Paths
//!
//! A `Path` is an ordered list of subpaths, each of which is a `Start` segment followed by lines, curves
//! and an optional closepath, all in fixed-point device coordinates. Paths are cheap to copy: the
//! segment storage is shared and only duplicated when a shared path is changed.
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let mut path    = Path::new();
//! path.add_rectangle(FixedPoint::from_int(0, 0).unwrap(), FixedPoint::from_int(10, 5).unwrap()).unwrap();
//!
//! let copy        = path.clone();
//! path.add_point(FixedPoint::from_int(20, 20).unwrap()).unwrap();
//! path.add_line(FixedPoint::from_int(30, 20).unwrap()).unwrap();
//!
//! assert!(copy.subpath_count() == 1);
//! assert!(path.subpath_count() == 2);
//! assert!(copy.is_rectangular().is_some());
//! ```
//!
//! `UserPath` builds paths from user-space coordinates, including PostScript-style arcs.
//!

mod arc;
mod path;
mod path_element;
mod path_transform;
mod segment;
mod subpath;
mod user_path;

pub use self::path::*;
pub use self::path_element::*;
pub use self::segment::*;
pub use self::subpath::*;
pub use self::user_path::*;
