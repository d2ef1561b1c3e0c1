/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;
use crate::path::*;
use crate::matrix::*;
use crate::state::*;
use crate::consts::*;
use crate::error::*;

///
/// One end of a stroked segment
///
/// `co` and `ce` are the two corners of the butt cap (`p` offset by minus and plus the width at the end of
/// the line, the other way around at the start). `cdelta` is half the line width along the line, pointing
/// away from the segment.
///
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct LineEnd {
    pub p:      FixedPoint,
    pub co:     FixedPoint,
    pub ce:     FixedPoint,
    pub cdelta: FixedPoint,
}

///
/// A single segment of a stroke, with the vectors needed to work out its caps and joins
///
/// `width` is half the line width at 90 degrees counter-clockwise from the direction of the line (measured
/// in user space, so the angle can differ in device space under a skewed transform).
///
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PartialLine {
    pub o:      LineEnd,
    pub e:      LineEnd,
    pub width:  FixedPoint,

    /// True if this segment is narrow enough to draw as a thin line
    pub thin:   bool,

    /// The notes of the path segment this line was made from
    pub notes:  SegmentNotes,
}

///
/// The fill adjustment to use for a stroke
///
#[inline]
pub(crate) fn stroke_adjustment(thin: bool, state: &ImagerState) -> FixedPoint {
    if thin { FixedPoint::ORIGIN } else { state.fill_adjust() }
}

impl PartialLine {
    ///
    /// Fills in the cap corners from the end points, width and cap delta
    ///
    /// Fails with `Limit` if a corner is outside the fixed-point range.
    ///
    pub fn compute_caps(&mut self) -> Result<(), GeometryError> {
        let width = self.width;

        self.o.co       = self.o.p.checked_add(width)?;
        self.o.ce       = self.o.p.checked_sub(width)?;
        self.o.cdelta   = -self.e.cdelta;
        self.e.co       = self.e.p.checked_sub(width)?;
        self.e.ce       = self.e.p.checked_add(width)?;

        Ok(())
    }

    ///
    /// Sets an approximate width for a thin line: half a pixel along whichever axis is closest to perpendicular
    ///
    pub fn set_thin_widths(&mut self) {
        let delta   = self.e.p.offset_from(self.o.p);
        let half    = |positive: bool| if positive { Fixed::HALF } else { -Fixed::HALF };

        if delta.0.abs() > delta.1.abs() {
            let width       = half(delta.0 >= 0.0);

            self.width      = FixedPoint::new(Fixed::ZERO, width);
            self.e.cdelta   = FixedPoint::new(width, Fixed::ZERO);
        } else {
            let cdelta      = half(delta.1 >= 0.0);

            self.width      = FixedPoint::new(-cdelta, Fixed::ZERO);
            self.e.cdelta   = FixedPoint::new(Fixed::ZERO, cdelta);
        }
    }

    ///
    /// Adjusts the end points and width so the stroke covers a consistent number of pixels
    ///
    /// This applies to every segment when stroke adjustment is on, and otherwise only to axis-aligned segments
    /// (including thin lines, whose widths are always axis-aligned). Axis-aligned end points are moved to the
    /// middle of a pixel for odd widths and to a pixel boundary for even ones.
    ///
    pub fn adjust_stroke(&mut self, state: &ImagerState, thin: bool) {
        if !state.stroke_adjust() && self.width.x != Fixed::ZERO && self.width.y != Fixed::ZERO {
            return;
        }

        let adjust                      = stroke_adjustment(thin, state);
        let PartialLine { o, e, width, .. } = self;

        let (width, origin, end, adjust_2) = if width.x.abs() < width.y.abs() {
            // More horizontal than vertical
            (&mut width.y, &mut o.p.y, &mut e.p.y, adjust.y.0 << 1)
        } else {
            (&mut width.x, &mut o.p.x, &mut e.p.x, adjust.x.0 << 1)
        };

        let w           = *width;
        let mut full    = Fixed(w.0 << 1).rounded();

        if full == Fixed::ZERO && w != Fixed::ZERO {
            // Thin lines must not disappear
            full    = if w.0 < 0 { Fixed(-Fixed::ONE.0 + adjust_2) } else { Fixed(Fixed::ONE.0 - adjust_2) };
            *width  = Fixed(full.0 >> 1);
        }

        if *origin == *end {
            let covered = if w.0 >= 0 { full.0.wrapping_add(adjust_2) } else { adjust_2.wrapping_sub(full.0) };

            let snapped = if covered & Fixed::ONE.0 != 0 {
                origin.floor() + Fixed::HALF
            } else {
                origin.rounded()
            };

            *origin = snapped;
            *end    = snapped;
        }
    }
}

///
/// Works out the width vectors of stroked segments for a particular transform and line width
///
#[derive(Clone, Debug)]
pub struct StrokeWidths {
    matrix:         Matrix,
    kind:           TransformKind,
    half_width:     f64,
    reflected:      bool,
    always_thin:    bool,
}

impl StrokeWidths {
    pub fn new(state: &ImagerState) -> StrokeWidths {
        let matrix      = *state.ctm().matrix();
        let half_width  = state.line_params().half_width();

        let always_thin = if half_width == 0.0 {
            true
        } else {
            let Matrix { xx, xy, yx, yy, .. } = matrix;
            let x_squared   = xx * xx + xy * xy;
            let y_squared   = yx * yx + yy * yy;
            let cross       = (xx * yx + xy * yy).abs();

            (x_squared.max(y_squared) + cross) * half_width * half_width < 0.25
        };

        StrokeWidths {
            matrix,
            kind:       state.ctm().kind(),
            half_width,
            reflected:  matrix.is_reflected(),
            always_thin,
        }
    }

    ///
    /// True if the line is so narrow that every segment is drawn as a thin line
    ///
    #[inline]
    pub fn always_thin(&self) -> bool {
        self.always_thin
    }

    ///
    /// The device-space cap delta and width for a line in a particular device-space direction
    ///
    fn width_vectors(&self, direction: Coord2) -> Result<(Coord2, Coord2), GeometryError> {
        match self.kind {
            TransformKind::Identity | TransformKind::UniformRotation { .. } => {
                let scale   = match self.kind {
                    TransformKind::UniformRotation { scale, .. }    => scale,
                    _                                               => 1.0,
                };

                // Angles are preserved, so the width is just the cap delta turned through 90 degrees
                let cdelta  = direction * (self.half_width * scale / direction.magnitude());
                Ok((cdelta, Coord2(-cdelta.1, cdelta.0)))
            }

            TransformKind::ScaleTranslate { .. } | TransformKind::General => {
                let user    = self.matrix.inverse_transform_distance(direction)?;
                let user    = user * (self.half_width / user.magnitude());

                // Turn through 90 degrees in user space, in whichever direction is counter-clockwise in device space
                let turned  = if self.reflected { Coord2(user.1, -user.0) } else { Coord2(-user.1, user.0) };

                Ok((self.matrix.transform_distance(user), self.matrix.transform_distance(turned)))
            }
        }
    }

    ///
    /// Creates the partial line for a segment (which must not have zero length)
    ///
    /// The caps are only computed for lines that are not thin: thin lines get their widths later, if they are
    /// not drawn directly.
    ///
    pub fn partial_line(&self, from: FixedPoint, to: FixedPoint, notes: SegmentNotes, state: &ImagerState) -> Result<PartialLine, GeometryError> {
        let mut line = PartialLine::default();
        line.o.p    = from;
        line.e.p    = to;
        line.notes  = notes;

        if self.always_thin {
            line.thin = true;
            return Ok(line);
        }

        let (cdelta, width) = self.width_vectors(to.offset_from(from))?;
        line.e.cdelta   = FixedPoint::from_f64(cdelta.0, cdelta.1)?;
        line.width      = FixedPoint::from_f64(width.0, width.1)?;
        line.thin       = line.width.x.abs().to_f64() + line.width.y.abs().to_f64() < THIN_LINE_LIMIT;

        if !line.thin {
            line.adjust_stroke(state, false);
            line.compute_caps()?;
        }

        Ok(line)
    }

    ///
    /// Creates a zero-length partial line at a point, facing along the user-space x axis (used for round dots)
    ///
    pub fn dot(&self, at: FixedPoint) -> Result<PartialLine, GeometryError> {
        let cdelta  = self.matrix.transform_distance(Coord2(self.half_width, 0.0));
        let turned  = if self.reflected { Coord2(0.0, -self.half_width) } else { Coord2(0.0, self.half_width) };
        let width   = self.matrix.transform_distance(turned);

        let mut line = PartialLine::default();
        line.o.p        = at;
        line.e.p        = at;
        line.e.cdelta   = FixedPoint::from_f64(cdelta.0, cdelta.1)?;
        line.width      = FixedPoint::from_f64(width.0, width.1)?;
        line.compute_caps()?;

        Ok(line)
    }
}
