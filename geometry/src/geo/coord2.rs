/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// A floating-point 2D coordinate, used for user-space points and for vector arithmetic that needs more
/// range or precision than fixed point
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    #[inline]
    pub fn dot(&self, other: &Coord2) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    /// The z component of the cross product of the two vectors
    #[inline]
    pub fn cross(&self, other: &Coord2) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::hypot(self.0, self.1)
    }

    #[inline]
    pub fn distance_to(&self, other: &Coord2) -> f64 {
        (*self - *other).magnitude()
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}
