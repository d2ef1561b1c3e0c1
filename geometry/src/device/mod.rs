/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Devices
//!
//! The geometry engine does not draw pixels itself. A `Device` receives filled paths and the simple shapes
//! (thin lines, triangles, parallelograms) that the stroker can produce without building a path first.
//! `RecordingDevice` keeps a list of the calls made to it.
//!

mod device_trait;
mod recording_device;

pub use self::device_trait::*;
pub use self::recording_device::*;
