/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fixed_curve::*;
use crate::geo::*;
use crate::consts::*;

///
/// Works out how finely a curve must be divided to stay within a flatness tolerance
///
/// The result is `k` such that `2^k` line segments keep the curve within `flatness` of the lines (a flatness
/// of zero requests the finest useful subdivision). The deviation is estimated from the second differences of
/// the control points, which bound the curve's second derivative.
///
pub fn log2_samples(curve: &FixedCurve, flatness: Fixed) -> u32 {
    let FixedCurve { start, cp1, cp2, end } = *curve;

    let x03 = (end.x.0 as i64 - start.x.0 as i64).abs();
    let y03 = (end.y.0 as i64 - start.y.0 as i64).abs();

    // Short curves are easier to see, so are flattened more finely
    let short_limit = (SHORT_CURVE_PIXELS as i64) << FIXED_SHIFT;
    let flatness    = if x03 < short_limit && y03 < short_limit {
        flatness.0.max(0) as i64 >> 1
    } else {
        flatness.0.max(0) as i64
    };

    if flatness == 0 {
        // Halve the longest side until it is no more than a pixel
        let mut longest = x03.max(y03);
        let mut k       = 1;

        while longest > Fixed::ONE.0 as i64 {
            k       += 1;
            longest >>= 1;
        }

        k
    } else {
        let axis = |v0: Fixed, v1: Fixed, v2: Fixed, v3: Fixed| {
            let (v0, v1, v2, v3) = (v0.0 as i64, v1.0 as i64, v2.0 as i64, v3.0 as i64);
            let d0 = (v0 - 2 * v1 + v2).abs();
            let d1 = (v1 - 2 * v2 + v3).abs();

            d0.max(d1)
        };

        let mut distance    = axis(start.x, cp1.x, cp2.x, end.x) + axis(start.y, cp1.y, cp2.y, end.y);
        distance            -= distance >> 2;

        // Each doubling of the sample count quarters the error
        let mut q   = (distance + flatness - 1) / flatness;
        let mut k   = 0;

        while q > 1 {
            k += 1;
            q = (q + 3) >> 2;
        }

        k
    }
}
