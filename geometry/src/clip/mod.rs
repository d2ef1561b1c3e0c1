/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Clipping
//!
//! A `ClipPath` is the region that drawing is restricted to. It is held as a path, as a normalized list of
//! whole-pixel rectangles (`ClipList`), or both. The common case of clipping one rectangle by another is
//! handled directly:
//!
//! ```
//! # use flo_geometry::*;
//! #
//! let state       = ImagerState::default();
//! let mut clip    = ClipPath::from_rectangle(FixedRect::new(FixedPoint::from_int(0, 0).unwrap(), FixedPoint::from_int(10, 10).unwrap()));
//!
//! let mut path    = Path::new();
//! path.add_rectangle(FixedPoint::from_int(5, 5).unwrap(), FixedPoint::from_int(15, 15).unwrap()).unwrap();
//! clip.intersect(&path, WindingRule::NonZero, &state).unwrap();
//!
//! let expected    = FixedRect::new(FixedPoint::from_int(5, 5).unwrap(), FixedPoint::from_int(10, 10).unwrap());
//! assert!(clip.is_rectangle() == Some(expected));
//! ```
//!
//! Other shapes are scan converted into rectangle lists, which `ClipOutline` can turn back into a path.
//!

mod clip_accumulator;
mod clip_id;
mod clip_list;
mod clip_path;
mod clip_rect;
mod outline;
mod scan_convert;
mod winding_rule;

pub use self::clip_accumulator::*;
pub use self::clip_id::*;
pub use self::clip_list::*;
pub use self::clip_path::*;
pub use self::clip_rect::*;
pub use self::outline::*;
pub use self::scan_convert::*;
pub use self::winding_rule::*;
