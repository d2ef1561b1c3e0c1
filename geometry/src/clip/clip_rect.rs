/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

/// Largest pixel coordinate that still converts to a fixed-point value
pub(crate) const MAX_PIXEL: i32 = i32::MAX >> FIXED_SHIFT;

/// Smallest pixel coordinate that still converts to a fixed-point value
pub(crate) const MIN_PIXEL: i32 = i32::MIN >> FIXED_SHIFT;

///
/// Converts a whole-pixel coordinate to fixed point, clamping to the representable range
///
#[inline]
pub(crate) fn pixel_to_fixed(pixel: i32) -> Fixed {
    Fixed(pixel.clamp(MIN_PIXEL, MAX_PIXEL) << FIXED_SHIFT)
}

///
/// Rounds a fixed-point coordinate to the pixel boundary a scan converter would use
///
/// The result is the first pixel whose centre is at or after the coordinate.
///
#[inline]
pub(crate) fn pixel_round(value: Fixed) -> i32 {
    ((value.0 as i64 + Fixed::HALF.0 as i64 - 1) >> FIXED_SHIFT) as i32
}

///
/// A rectangle of whole device pixels, covering `xmin..xmax` by `ymin..ymax`
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ClipRect {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl ClipRect {
    #[inline]
    pub const fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> ClipRect {
        ClipRect { xmin, ymin, xmax, ymax }
    }

    ///
    /// The pixels whose centres lie inside a fixed-point rectangle
    ///
    pub fn from_fixed_rect(rect: &FixedRect) -> ClipRect {
        ClipRect {
            xmin: pixel_round(rect.p.x),
            ymin: pixel_round(rect.p.y),
            xmax: pixel_round(rect.q.x),
            ymax: pixel_round(rect.q.y),
        }
    }

    ///
    /// This rectangle as a fixed-point rectangle
    ///
    pub fn to_fixed_rect(&self) -> FixedRect {
        FixedRect::new(
            FixedPoint::new(pixel_to_fixed(self.xmin), pixel_to_fixed(self.ymin)),
            FixedPoint::new(pixel_to_fixed(self.xmax), pixel_to_fixed(self.ymax)))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xmin >= self.xmax || self.ymin >= self.ymax
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.ymax - self.ymin
    }

    /// Number of pixels covered by this rectangle
    #[inline]
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width() as i64 * self.height() as i64
        }
    }

    ///
    /// The overlap between two rectangles, or `None` if they do not share any pixels
    ///
    pub fn intersection(&self, other: &ClipRect) -> Option<ClipRect> {
        let result = ClipRect {
            xmin: self.xmin.max(other.xmin),
            ymin: self.ymin.max(other.ymin),
            xmax: self.xmax.min(other.xmax),
            ymax: self.ymax.min(other.ymax),
        };

        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }

    #[inline]
    pub fn union(&self, other: &ClipRect) -> ClipRect {
        ClipRect {
            xmin: self.xmin.min(other.xmin),
            ymin: self.ymin.min(other.ymin),
            xmax: self.xmax.max(other.xmax),
            ymax: self.ymax.max(other.ymax),
        }
    }

    /// True if every pixel of the other rectangle is in this one
    #[inline]
    pub fn contains(&self, other: &ClipRect) -> bool {
        other.xmin >= self.xmin && other.xmax <= self.xmax && other.ymin >= self.ymin && other.ymax <= self.ymax
    }

    #[inline]
    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        x >= self.xmin && x < self.xmax && y >= self.ymin && y < self.ymax
    }

    ///
    /// Moves this rectangle by a whole number of pixels (saturating at the edges of the coordinate range)
    ///
    #[inline]
    pub fn translate(&self, dx: i32, dy: i32) -> ClipRect {
        ClipRect {
            xmin: self.xmin.saturating_add(dx),
            ymin: self.ymin.saturating_add(dy),
            xmax: self.xmax.saturating_add(dx),
            ymax: self.ymax.saturating_add(dy),
        }
    }
}
