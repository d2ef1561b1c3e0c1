/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::device_trait::*;
use crate::clip::*;
use crate::geo::*;
use crate::path::*;
use crate::error::*;

///
/// A call made to a `RecordingDevice`
///
#[derive(Clone, PartialEq, Debug)]
pub enum DeviceCall {
    FillPath { path: Path, rule: WindingRule, adjust: FixedPoint, clip: Option<ClipId> },
    FillRectangle { x: i32, y: i32, width: i32, height: i32 },
    DrawThinLine { from: FixedPoint, to: FixedPoint },
    FillTriangle { origin: FixedPoint, a: FixedPoint, b: FixedPoint },
    FillParallelogram { origin: FixedPoint, a: FixedPoint, b: FixedPoint },
}

///
/// A device that draws nothing, but keeps a list of every call made to it
///
#[derive(Clone, Debug, Default)]
pub struct RecordingDevice {
    calls: Vec<DeviceCall>,
}

impl RecordingDevice {
    pub fn new() -> RecordingDevice {
        RecordingDevice { calls: vec![] }
    }

    #[inline]
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    ///
    /// Returns the calls recorded so far and starts a new list
    ///
    pub fn take_calls(&mut self) -> Vec<DeviceCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: DeviceCall) -> Result<(), GeometryError> {
        self.calls.try_reserve(1)?;
        self.calls.push(call);

        Ok(())
    }
}

impl Device for RecordingDevice {
    fn fill_path(&mut self, path: &Path, rule: WindingRule, adjust: FixedPoint, clip: Option<&ClipPath>) -> Result<(), GeometryError> {
        self.record(DeviceCall::FillPath { path: path.clone(), rule, adjust, clip: clip.map(|clip| clip.id()) })
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GeometryError> {
        self.record(DeviceCall::FillRectangle { x, y, width, height })
    }

    fn draw_thin_line(&mut self, from: FixedPoint, to: FixedPoint) -> Result<(), GeometryError> {
        self.record(DeviceCall::DrawThinLine { from, to })
    }

    fn fill_triangle(&mut self, origin: FixedPoint, a: FixedPoint, b: FixedPoint) -> Result<(), GeometryError> {
        self.record(DeviceCall::FillTriangle { origin, a, b })
    }

    fn fill_parallelogram(&mut self, origin: FixedPoint, a: FixedPoint, b: FixedPoint) -> Result<(), GeometryError> {
        self.record(DeviceCall::FillParallelogram { origin, a, b })
    }
}
