/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Dashing
//!
//! `expand_dashes` turns a path into the dashes described by the `DashPattern` in the current line
//! parameters. The pattern state carries on from one segment to the next, so corners do not restart it:
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let dash        = DashPattern::new(&[3.0, 2.0], 0.0, false).unwrap();
//! let state       = ImagerState::default().with_line_params(LineParams::default().with_dash(Some(dash)));
//!
//! let mut path    = Path::new();
//! path.add_point(FixedPoint::from_int(0, 0).unwrap()).unwrap();
//! path.add_line(FixedPoint::from_int(10, 0).unwrap()).unwrap();
//!
//! let dashed      = expand_dashes(&path, &state).unwrap();
//! assert!(dashed.subpath_count() == 2);
//! ```
//!

mod dash_pattern;
mod expand;

pub use self::dash_pattern::*;
pub use self::expand::*;
