/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;

use std::fmt;
use std::ops::*;

/// Number of fraction bits in a `Fixed` value
pub const FIXED_SHIFT: u32 = 8;

/// Scale factor between a `Fixed` value and the number it represents
pub const FIXED_SCALE: f64 = (1 << FIXED_SHIFT) as f64;

///
/// A device-space coordinate stored as a 32-bit integer with `FIXED_SHIFT` bits of fraction
///
/// The smallest representable step is `Fixed::EPSILON` (1/256 of a pixel), and the representable range
/// is a little over +/- 8 million pixels. Conversions from floating point fail with `GeometryError::Limit`
/// when a value is out of range; callers that want to continue anyway can use `from_f64_clamped`.
///
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed       = Fixed(0);
    pub const EPSILON: Fixed    = Fixed(1);
    pub const HALF: Fixed       = Fixed(1 << (FIXED_SHIFT - 1));
    pub const ONE: Fixed        = Fixed(1 << FIXED_SHIFT);
    pub const MAX: Fixed        = Fixed(i32::MAX);
    pub const MIN: Fixed        = Fixed(i32::MIN);

    /// Mask that clears the fraction bits of a value
    const INT_MASK: i32         = !((1 << FIXED_SHIFT) - 1);

    ///
    /// Creates a fixed value from an integer, failing if it is out of range
    ///
    #[inline]
    pub fn from_int(val: i32) -> Result<Fixed, GeometryError> {
        val.checked_mul(1 << FIXED_SHIFT)
            .map(Fixed)
            .ok_or(GeometryError::Limit)
    }

    ///
    /// Creates a fixed value from a floating point number, failing if the number cannot be represented
    ///
    #[inline]
    pub fn from_f64(val: f64) -> Result<Fixed, GeometryError> {
        let scaled = (val * FIXED_SCALE).round();

        if scaled.is_nan() || scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
            Err(GeometryError::Limit)
        } else {
            Ok(Fixed(scaled as i32))
        }
    }

    ///
    /// Creates a fixed value from a floating point number, clamping to the nearest representable extreme
    ///
    #[inline]
    pub fn from_f64_clamped(val: f64) -> Fixed {
        let scaled = (val * FIXED_SCALE).round();

        if scaled.is_nan() {
            Fixed::ZERO
        } else if scaled <= i32::MIN as f64 {
            Fixed::MIN
        } else if scaled >= i32::MAX as f64 {
            Fixed::MAX
        } else {
            Fixed(scaled as i32)
        }
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        (self.0 as f64) / FIXED_SCALE
    }

    /// The largest whole-pixel value that is less than or equal to this one
    #[inline]
    pub fn floor(self) -> Fixed {
        Fixed(self.0 & Self::INT_MASK)
    }

    /// The smallest whole-pixel value that is greater than or equal to this one (saturating at the top of the range)
    #[inline]
    pub fn ceiling(self) -> Fixed {
        let ceiling = (self.0 as i64 + (Self::ONE.0 as i64 - 1)) & (Self::INT_MASK as i64);
        Fixed(ceiling.min(i32::MAX as i64 & Self::INT_MASK as i64) as i32)
    }

    /// The nearest whole-pixel value (halves round up)
    #[inline]
    pub fn rounded(self) -> Fixed {
        Fixed(self.0.saturating_add(Self::HALF.0)).floor()
    }

    /// The integer pixel containing this value
    #[inline]
    pub fn to_int(self) -> i32 {
        self.0 >> FIXED_SHIFT
    }

    #[inline]
    pub fn ceiling_int(self) -> i32 {
        ((self.0 as i64 + (Self::ONE.0 as i64 - 1)) >> FIXED_SHIFT) as i32
    }

    #[inline]
    pub fn rounded_int(self) -> i32 {
        ((self.0 as i64 + Self::HALF.0 as i64) >> FIXED_SHIFT) as i32
    }

    /// The fraction bits of this value
    #[inline]
    pub fn fraction(self) -> Fixed {
        Fixed(self.0 & !Self::INT_MASK)
    }

    #[inline]
    pub fn abs(self) -> Fixed {
        Fixed(self.0.saturating_abs())
    }

    #[inline]
    pub fn checked_add(self, other: Fixed) -> Result<Fixed, GeometryError> {
        self.0.checked_add(other.0).map(Fixed).ok_or(GeometryError::Limit)
    }

    #[inline]
    pub fn checked_sub(self, other: Fixed) -> Result<Fixed, GeometryError> {
        self.0.checked_sub(other.0).map(Fixed).ok_or(GeometryError::Limit)
    }

    ///
    /// Multiplies this value by 2^log2 (which may be negative), failing if the result overflows
    ///
    pub fn scale_exp2(self, log2: i32) -> Result<Fixed, GeometryError> {
        if log2 >= 0 {
            let shifted = (self.0 as i64) << (log2.min(32) as u32);
            if shifted < i32::MIN as i64 || shifted > i32::MAX as i64 {
                Err(GeometryError::Limit)
            } else {
                Ok(Fixed(shifted as i32))
            }
        } else {
            Ok(Fixed(self.0 >> ((-log2).min(31) as u32)))
        }
    }

    ///
    /// True if the two values are in the same half-pixel cell
    ///
    #[inline]
    pub fn same_half_pixel(self, other: Fixed) -> bool {
        ((self.0 ^ other.0) & !(Self::HALF.0 - 1)) == 0
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

// The operators saturate at the ends of the range: use `checked_add` and `checked_sub` where an overflow has to be reported

impl Add<Fixed> for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, val: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(val.0))
    }
}

impl Sub<Fixed> for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, val: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(val.0))
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(self.0.saturating_neg())
    }
}

impl AddAssign<Fixed> for Fixed {
    #[inline]
    fn add_assign(&mut self, val: Fixed) {
        self.0 = self.0.saturating_add(val.0);
    }
}

impl SubAssign<Fixed> for Fixed {
    #[inline]
    fn sub_assign(&mut self, val: Fixed) {
        self.0 = self.0.saturating_sub(val.0);
    }
}

impl Shr<u32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn shr(self, shift: u32) -> Fixed {
        Fixed(self.0 >> shift)
    }
}

impl From<Fixed> for f64 {
    #[inline]
    fn from(val: Fixed) -> f64 {
        val.to_f64()
    }
}
