/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use crate::geo::*;
use crate::matrix::*;
use crate::state::*;
use crate::error::*;

///
/// Builds a device-space path from user-space coordinates
///
/// Points are transformed by the current matrix as they are added. Coordinates that do not fit in fixed
/// point produce a `Limit` error unless the imager state asks for them to be clamped.
///
pub struct UserPath<'a> {
    pub(super) path:    &'a mut Path,
    pub(super) ctm:     FixedMatrix,
    pub(super) clamp:   bool,
}

impl<'a> UserPath<'a> {
    ///
    /// Starts building on a path using the transform and clamping mode of an imager state
    ///
    pub fn new(path: &'a mut Path, state: &ImagerState) -> UserPath<'a> {
        UserPath {
            path,
            ctm:    *state.ctm(),
            clamp:  state.clamp_coordinates(),
        }
    }

    ///
    /// Starts building on a path using a specific transform
    ///
    pub fn with_matrix(path: &'a mut Path, ctm: FixedMatrix, clamp_coordinates: bool) -> UserPath<'a> {
        UserPath { path, ctm, clamp: clamp_coordinates }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        self.path
    }

    ///
    /// Maps a user-space point to device space, applying the clamping policy
    ///
    pub(super) fn to_device(&self, x: f64, y: f64) -> Result<FixedPoint, GeometryError> {
        if self.clamp {
            Ok(self.ctm.transform_to_fixed_clamped(x, y))
        } else {
            self.ctm.transform_to_fixed(x, y)
        }
    }

    fn distance_to_device(&self, dx: f64, dy: f64) -> Result<FixedPoint, GeometryError> {
        match self.ctm.distance_to_fixed(dx, dy) {
            Err(GeometryError::Limit) if self.clamp => {
                let device = self.ctm.matrix().transform_distance(Coord2(dx, dy));
                Ok(FixedPoint::from_f64_clamped(device.0, device.1))
            }
            other => other,
        }
    }

    ///
    /// Moves a device-space point by a distance, clamping at the edge of the fixed-point range when asked to
    ///
    fn offset_on_device(&self, from: FixedPoint, delta: FixedPoint) -> Result<FixedPoint, GeometryError> {
        if self.clamp {
            Ok(from + delta)
        } else {
            from.checked_add(delta)
        }
    }

    ///
    /// The current point, mapped back into user space
    ///
    pub fn current_point(&self) -> Result<Coord2, GeometryError> {
        let device = self.path.current_point()?.to_coord2();
        self.ctm.matrix().inverse_transform_point(device)
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> Result<&mut Self, GeometryError> {
        let point = self.to_device(x, y)?;
        self.path.add_point(point)?;
        Ok(self)
    }

    pub fn rel_move_to(&mut self, dx: f64, dy: f64) -> Result<&mut Self, GeometryError> {
        let delta = self.distance_to_device(dx, dy)?;
        let point = self.offset_on_device(self.path.current_point()?, delta)?;
        self.path.add_point(point)?;
        Ok(self)
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> Result<&mut Self, GeometryError> {
        let point = self.to_device(x, y)?;
        self.path.add_line(point)?;
        Ok(self)
    }

    pub fn rel_line_to(&mut self, dx: f64, dy: f64) -> Result<&mut Self, GeometryError> {
        let delta   = self.distance_to_device(dx, dy)?;
        let point   = self.offset_on_device(self.path.current_point()?, delta)?;
        self.path.add_line(point)?;
        Ok(self)
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Result<&mut Self, GeometryError> {
        let cp1     = self.to_device(x1, y1)?;
        let cp2     = self.to_device(x2, y2)?;
        let end     = self.to_device(x3, y3)?;
        self.path.add_curve(cp1, cp2, end)?;
        Ok(self)
    }

    pub fn rel_curve_to(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx3: f64, dy3: f64) -> Result<&mut Self, GeometryError> {
        let start   = self.path.current_point()?;
        let cp1     = self.offset_on_device(start, self.distance_to_device(dx1, dy1)?)?;
        let cp2     = self.offset_on_device(start, self.distance_to_device(dx2, dy2)?)?;
        let end     = self.offset_on_device(start, self.distance_to_device(dx3, dy3)?)?;
        self.path.add_curve(cp1, cp2, end)?;
        Ok(self)
    }

    pub fn close_path(&mut self) -> Result<&mut Self, GeometryError> {
        self.path.close_subpath()?;
        Ok(self)
    }

    ///
    /// Adds a closed rectangle with its origin at `(x, y)`
    ///
    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<&mut Self, GeometryError> {
        self.move_to(x, y)?
            .line_to(x + width, y)?
            .line_to(x + width, y + height)?
            .line_to(x, y + height)?
            .close_path()
    }
}
