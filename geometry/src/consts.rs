/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Floating point values closer than this are considered to be the same (used for matrix determinants and line intersections)
pub const SMALL_DISTANCE: f64 = 1.0e-9;

/// The largest log2 sample count used when flattening a curve directly: longer curves are split at their midpoint first
pub const K_SAMPLE_MAX: u32 = 10;

/// Curves smaller than this many pixels on both axes are flattened at half the requested flatness
pub const SHORT_CURVE_PIXELS: i32 = 16;

/// Fraction of the radius used for the control points of a quarter circle: 4/3 * (sqrt(2) - 1)
pub const QUARTER_ARC_FRACTION: f64 = 0.552_284_749_830_793_4;

/// Segments whose device-space half-width sums (|wx| + |wy|) to less than this many pixels are drawn as thin lines
pub const THIN_LINE_LIMIT: f64 = 0.75;

/// Expansion factor applied to the half width of a stroke when joins cannot produce miters (sqrt(2), rounded up)
pub const MIN_STROKE_EXPANSION: f64 = 1.415;
