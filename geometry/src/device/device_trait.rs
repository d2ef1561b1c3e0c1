/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::clip::*;
use crate::geo::*;
use crate::path::*;
use crate::error::*;

///
/// Trait implemented by rasterizers that can draw the output of the geometry engine
///
/// The stroker calls the simple primitives directly when it can, and falls back to `fill_path` otherwise.
///
pub trait Device {
    ///
    /// Fills a path using a winding rule
    ///
    /// Each edge of the path is moved outwards by `adjust` (so any pixel touched by the path can be included), and
    /// the result is restricted to the clip path if there is one.
    ///
    fn fill_path(&mut self, path: &Path, rule: WindingRule, adjust: FixedPoint, clip: Option<&ClipPath>) -> Result<(), GeometryError>;

    ///
    /// Fills a rectangle of whole pixels
    ///
    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GeometryError>;

    ///
    /// Draws a line one pixel wide
    ///
    fn draw_thin_line(&mut self, from: FixedPoint, to: FixedPoint) -> Result<(), GeometryError>;

    ///
    /// Fills the triangle with corners at `origin`, `origin + a` and `origin + b`
    ///
    fn fill_triangle(&mut self, origin: FixedPoint, a: FixedPoint, b: FixedPoint) -> Result<(), GeometryError>;

    ///
    /// Fills the parallelogram with corners at `origin`, `origin + a`, `origin + a + b` and `origin + b`
    ///
    fn fill_parallelogram(&mut self, origin: FixedPoint, a: FixedPoint, b: FixedPoint) -> Result<(), GeometryError>;
}

///
/// Fills the part of a rectangle that lies inside a clip region, one device rectangle at a time
///
pub fn fill_clipped_rectangle(device: &mut dyn Device, rect: &ClipRect, clip: &mut ClipPath) -> Result<(), GeometryError> {
    for part in clip.rectangles_in(rect)? {
        device.fill_rectangle(part.xmin, part.ymin, part.width(), part.height())?;
    }

    Ok(())
}
