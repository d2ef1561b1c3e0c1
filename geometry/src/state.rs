/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Imager state
//!
//! The geometry engine never owns graphics state: every operation reads its settings from an
//! `ImagerState` supplied by the caller. The defaults match a freshly initialised PostScript graphics
//! state on an identity device.
//!

use crate::geo::*;
use crate::matrix::*;
use crate::stroke::*;

///
/// The read-only graphics-state inputs used when building, flattening, clipping and stroking paths
///
#[derive(Clone, PartialEq, Debug)]
pub struct ImagerState {
    ctm:                FixedMatrix,
    line_params:        LineParams,
    flatness:           f64,
    fill_adjust:        FixedPoint,
    accurate_curves:    bool,
    stroke_adjust:      bool,
    clamp_coordinates:  bool,
    idempotent_op:      bool,
}

impl Default for ImagerState {
    fn default() -> ImagerState {
        ImagerState {
            ctm:                FixedMatrix::default(),
            line_params:        LineParams::default(),
            flatness:           1.0,
            fill_adjust:        FixedPoint::new(Fixed::HALF, Fixed::HALF),
            accurate_curves:    false,
            stroke_adjust:      false,
            clamp_coordinates:  false,
            idempotent_op:      true,
        }
    }
}

impl ImagerState {
    /// The transform from user space to device space
    #[inline]
    pub fn ctm(&self) -> &FixedMatrix {
        &self.ctm
    }

    #[inline]
    pub fn line_params(&self) -> &LineParams {
        &self.line_params
    }

    #[inline]
    pub fn line_params_mut(&mut self) -> &mut LineParams {
        &mut self.line_params
    }

    /// Maximum distance in device pixels between a curve and the lines that replace it
    #[inline]
    pub fn flatness(&self) -> f64 {
        self.flatness
    }

    /// Amount each filled region is expanded by in device space
    #[inline]
    pub fn fill_adjust(&self) -> FixedPoint {
        self.fill_adjust
    }

    #[inline]
    pub fn accurate_curves(&self) -> bool {
        self.accurate_curves
    }

    #[inline]
    pub fn stroke_adjust(&self) -> bool {
        self.stroke_adjust
    }

    #[inline]
    pub fn clamp_coordinates(&self) -> bool {
        self.clamp_coordinates
    }

    /// True if painting the same pixel twice has the same result as painting it once
    #[inline]
    pub fn idempotent_op(&self) -> bool {
        self.idempotent_op
    }

    pub fn with_ctm(mut self, ctm: Matrix) -> ImagerState {
        self.ctm = FixedMatrix::new(ctm);
        self
    }

    pub fn with_line_params(mut self, line_params: LineParams) -> ImagerState {
        self.line_params = line_params;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> ImagerState {
        self.line_params = self.line_params.with_width(width);
        self
    }

    pub fn with_line_cap(mut self, cap: LineCap) -> ImagerState {
        self.line_params = self.line_params.with_cap(cap);
        self
    }

    pub fn with_line_join(mut self, join: LineJoin) -> ImagerState {
        self.line_params = self.line_params.with_join(join);
        self
    }

    ///
    /// Sets the flatness tolerance (values below 0 are treated as 0, which requests the finest flattening)
    ///
    pub fn with_flatness(mut self, flatness: f64) -> ImagerState {
        self.flatness = flatness.max(0.0);
        self
    }

    pub fn with_fill_adjust(mut self, fill_adjust: FixedPoint) -> ImagerState {
        self.fill_adjust = fill_adjust;
        self
    }

    pub fn with_accurate_curves(mut self, accurate_curves: bool) -> ImagerState {
        self.accurate_curves = accurate_curves;
        self
    }

    pub fn with_stroke_adjust(mut self, stroke_adjust: bool) -> ImagerState {
        self.stroke_adjust = stroke_adjust;
        self
    }

    pub fn with_clamp_coordinates(mut self, clamp_coordinates: bool) -> ImagerState {
        self.clamp_coordinates = clamp_coordinates;
        self
    }

    pub fn with_idempotent_op(mut self, idempotent_op: bool) -> ImagerState {
        self.idempotent_op = idempotent_op;
        self
    }
}
