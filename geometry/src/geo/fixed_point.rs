/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;
use super::fixed::*;
use crate::error::*;

use std::ops::*;

///
/// A point in device space, in fixed-point coordinates
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FixedPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedPoint {
    pub const ORIGIN: FixedPoint = FixedPoint { x: Fixed::ZERO, y: Fixed::ZERO };

    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> FixedPoint {
        FixedPoint { x, y }
    }

    ///
    /// Creates a point from whole-pixel coordinates
    ///
    #[inline]
    pub fn from_int(x: i32, y: i32) -> Result<FixedPoint, GeometryError> {
        Ok(FixedPoint { x: Fixed::from_int(x)?, y: Fixed::from_int(y)? })
    }

    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Result<FixedPoint, GeometryError> {
        Ok(FixedPoint { x: Fixed::from_f64(x)?, y: Fixed::from_f64(y)? })
    }

    #[inline]
    pub fn from_f64_clamped(x: f64, y: f64) -> FixedPoint {
        FixedPoint { x: Fixed::from_f64_clamped(x), y: Fixed::from_f64_clamped(y) }
    }

    #[inline]
    pub fn to_coord2(self) -> Coord2 {
        Coord2(self.x.to_f64(), self.y.to_f64())
    }

    #[inline]
    pub fn checked_add(self, other: FixedPoint) -> Result<FixedPoint, GeometryError> {
        Ok(FixedPoint { x: self.x.checked_add(other.x)?, y: self.y.checked_add(other.y)? })
    }

    #[inline]
    pub fn checked_sub(self, other: FixedPoint) -> Result<FixedPoint, GeometryError> {
        Ok(FixedPoint { x: self.x.checked_sub(other.x)?, y: self.y.checked_sub(other.y)? })
    }

    ///
    /// The vector from `from` to this point, in floating point so that it cannot overflow
    ///
    #[inline]
    pub fn offset_from(self, from: FixedPoint) -> Coord2 {
        Coord2(((self.x.0 as i64) - (from.x.0 as i64)) as f64 / FIXED_SCALE, ((self.y.0 as i64) - (from.y.0 as i64)) as f64 / FIXED_SCALE)
    }

    ///
    /// True if both coordinates of this point lie in the same half-pixel cell as the other point
    ///
    #[inline]
    pub fn same_half_pixel(self, other: FixedPoint) -> bool {
        self.x.same_half_pixel(other.x) && self.y.same_half_pixel(other.y)
    }
}

impl From<(Fixed, Fixed)> for FixedPoint {
    #[inline]
    fn from((x, y): (Fixed, Fixed)) -> FixedPoint {
        FixedPoint { x, y }
    }
}

impl Add<FixedPoint> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn add(self, val: FixedPoint) -> FixedPoint {
        FixedPoint { x: self.x + val.x, y: self.y + val.y }
    }
}

impl Sub<FixedPoint> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn sub(self, val: FixedPoint) -> FixedPoint {
        FixedPoint { x: self.x - val.x, y: self.y - val.y }
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn neg(self) -> FixedPoint {
        FixedPoint { x: -self.x, y: -self.y }
    }
}
