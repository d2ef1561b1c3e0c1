/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::cap_join::*;
use super::line_params::*;
use super::line_style::*;
use super::partial_line::*;
use crate::clip::*;
use crate::dash::*;
use crate::device::*;
use crate::geo::*;
use crate::path::*;
use crate::state::*;
use crate::consts::*;
use crate::error::*;

use log::*;

///
/// The bounding box of a path, grown by the furthest a stroke of that path can reach past it
///
/// Square caps and miter joins can reach `max(sqrt(2), miter_limit)` half-widths from the path (just `sqrt(2)`
/// when the joins are not miters). The fill adjustment is included too.
///
pub fn stroke_expansion_box(path_bounds: &FixedRect, state: &ImagerState) -> FixedRect {
    let params      = state.line_params();
    let limit       = match params.join() {
        LineJoin::Miter => params.miter_limit().max(MIN_STROKE_EXPANSION),
        _               => MIN_STROKE_EXPANSION,
    };
    let expand      = limit * params.half_width();

    let m           = state.ctm().matrix();
    let scale_x     = (m.xx + m.yx).abs().max((m.xx - m.yx).abs());
    let scale_y     = (m.xy + m.yy).abs().max((m.xy - m.yy).abs());

    let adjust      = state.fill_adjust();
    let expand_x    = Fixed(Fixed::from_f64_clamped(expand * scale_x).0.saturating_add(adjust.x.0));
    let expand_y    = Fixed(Fixed::from_f64_clamped(expand * scale_y).0.saturating_add(adjust.y.0));

    FixedRect::new(
        FixedPoint::new(Fixed(path_bounds.p.x.0.saturating_sub(expand_x.0)), Fixed(path_bounds.p.y.0.saturating_sub(expand_y.0))),
        FixedPoint::new(Fixed(path_bounds.q.x.0.saturating_add(expand_x.0)), Fixed(path_bounds.q.y.0.saturating_add(expand_y.0))),
    )
}

///
/// A device being stroked onto
///
struct DeviceTarget<'a> {
    device:     &'a mut dyn Device,
    clip:       Option<&'a ClipPath>,

    /// Everything inside this box is inside the clip region
    inner_box:  FixedRect,

    /// True if the whole stroke is inside the clip region, so the shape primitives can be used
    unclipped:  bool,
}

///
/// Converts the segments of a path into the polygons of its stroke
///
struct Stroker<'a> {
    state:      &'a ImagerState,
    params:     &'a LineParams,
    widths:     StrokeWidths,

    /// Stroke polygons waiting to be filled (or the whole result, when there is no device)
    output:     Path,
    device:     Option<DeviceTarget<'a>>,
}

impl<'a> Stroker<'a> {
    fn new(state: &'a ImagerState, device: Option<DeviceTarget<'a>>) -> Stroker<'a> {
        Stroker {
            state,
            params:     state.line_params(),
            widths:     StrokeWidths::new(state),
            output:     Path::new(),
            device,
        }
    }

    ///
    /// The join to use between a line and the one that follows it
    ///
    #[inline]
    fn join_before(&self, next: &PartialLine) -> LineJoin {
        if next.notes.contains(SegmentNotes::NOT_FIRST) {
            self.params.curve_join()
        } else {
            self.params.join()
        }
    }

    ///
    /// Strokes every subpath of a path
    ///
    fn stroke(&mut self, path: &Path) -> Result<(), GeometryError> {
        if path.is_void() {
            return Ok(());
        }

        let flat    = if path.has_curves() { path.flatten(self.state.flatness(), self.state.accurate_curves())? } else { path.clone() };
        let dashed  = expand_dashes(&flat, self.state)?;

        for subpath in dashed.subpaths() {
            self.stroke_subpath(subpath)?;
        }

        Ok(())
    }

    fn stroke_subpath(&mut self, subpath: &Subpath) -> Result<(), GeometryError> {
        let closed                          = subpath.is_closed();
        let mut from                        = subpath.start_point();
        let mut count                       = 0;
        let mut first: Option<PartialLine>  = None;
        let mut previous: Option<PartialLine> = None;

        for segment in subpath.segments().iter().skip(1) {
            let to = segment.end_point();

            // Zero-length segments have no direction
            if to == from {
                continue;
            }

            let line = self.widths.partial_line(from, to, segment.notes(), self.state)?;
            if first.is_none() {
                first = Some(line);
            }

            if let Some(mut previous) = previous.take() {
                let start_cap = !closed && count == 1;
                self.stroke_line(&mut previous, Some(&line), start_cap)?;
            }

            previous    = Some(line);
            count       += 1;
            from        = to;
        }

        match previous {
            Some(mut last) => {
                // Closed subpaths join back to the start, open ones end with a cap
                let next = if closed { first } else { None };
                self.stroke_line(&mut last, next.as_ref(), !closed && count == 1)
            }

            None if !subpath.is_empty() => self.stroke_dot(subpath.start_point()),
            None                        => Ok(()),
        }
    }

    ///
    /// Draws a subpath with no length, which shows up as a dot with round caps or a dot length
    ///
    fn stroke_dot(&mut self, at: FixedPoint) -> Result<(), GeometryError> {
        if self.params.cap() == LineCap::Round {
            // Two round caps back to back
            let dot = self.widths.dot(at)?;

            self.output.add_point(dot.e.co)?;
            add_round_cap(&mut self.output, &dot.e)?;
            add_round_cap(&mut self.output, &dot.o)?;
            self.output.close_subpath()?;

            self.flush(false)
        } else if self.params.dot_length() > 0.0 {
            let delta = self.state.ctm().distance_to_fixed(self.params.dot_length(), 0.0)?;
            let to    = at.checked_add(delta)?;

            if to == at {
                return Ok(());
            }

            let mut line = self.widths.partial_line(at, to, SegmentNotes::NONE, self.state)?;
            self.stroke_line(&mut line, None, true)
        } else {
            Ok(())
        }
    }

    ///
    /// Strokes one line: a join to `next` if there is one, or an end cap if not
    ///
    /// `start_cap` is true for the first line of an open subpath, which starts with the line cap rather than a butt.
    ///
    fn stroke_line(&mut self, line: &mut PartialLine, next: Option<&PartialLine>, start_cap: bool) -> Result<(), GeometryError> {
        if self.device.is_some() {
            self.fill_line(line, next, start_cap)?;
        } else {
            self.add_line(line, next, start_cap)?;
        }

        self.flush(self.widths.always_thin())
    }

    ///
    /// Fills whatever has been added to the output path on the device (does nothing without a device)
    ///
    fn flush(&mut self, thin: bool) -> Result<(), GeometryError> {
        let adjust = stroke_adjustment(thin, self.state);

        match &mut self.device {
            Some(target) if !self.output.is_void() => {
                target.device.fill_path(&self.output, WindingRule::NonZero, adjust, target.clip)?;
                self.output.clear();

                Ok(())
            }

            _ => Ok(()),
        }
    }

    ///
    /// Adds the polygon for a line to the output path
    ///
    fn add_line(&mut self, line: &mut PartialLine, next: Option<&PartialLine>, start_cap: bool) -> Result<(), GeometryError> {
        let cap = self.params.cap();

        if line.thin {
            // Thin lines only get their widths when they are actually needed
            line.set_thin_widths();
            line.adjust_stroke(self.state, true);
            line.compute_caps()?;
        }

        let mut points          = StrokePoints::new();
        let mut moveto_first    = true;

        if start_cap && cap == LineCap::Round {
            self.output.add_point(line.o.co)?;
            add_round_cap(&mut self.output, &line.o)?;
            moveto_first = false;
        } else {
            cap_points(if start_cap { cap } else { LineCap::Butt }, &line.o, &mut points)?;
        }

        let round_end = match next {
            None        => cap == LineCap::Round,
            Some(next)  => self.join_before(next) == LineJoin::Round,
        };

        if round_end {
            points.push(line.e.co);
            add_points(&mut self.output, &points, moveto_first)?;
            add_round_cap(&mut self.output, &line.e)?;
        } else {
            match next {
                None                        => cap_points(cap, &line.e, &mut points)?,
                Some(next) if next.thin     => cap_points(LineCap::Butt, &line.e, &mut points)?,
                Some(next)                  => line_join_points(self.join_before(next), self.params.miter_check(), line, next, &mut points)?,
            }

            add_points(&mut self.output, &points, moveto_first)?;
        }

        self.output.close_subpath()
    }

    ///
    /// Draws a line on the device, using the shape primitives when possible
    ///
    fn fill_line(&mut self, line: &mut PartialLine, next: Option<&PartialLine>, start_cap: bool) -> Result<(), GeometryError> {
        let (inner_box, unclipped) = match &self.device {
            Some(target)    => (target.inner_box, target.unclipped),
            None            => return self.add_line(line, next, start_cap),
        };

        if line.thin {
            // Thin lines can be drawn directly if they are well inside the clip region
            let slop    = Fixed::ONE.0 * 2;
            let bounds  = FixedRect::from_points(line.o.p, line.e.p);
            let padded  = FixedRect::new(
                FixedPoint::new(Fixed(bounds.p.x.0.saturating_sub(slop)), Fixed(bounds.p.y.0.saturating_sub(slop))),
                FixedPoint::new(Fixed(bounds.q.x.0.saturating_add(slop)), Fixed(bounds.q.y.0.saturating_add(slop))),
            );

            if inner_box.contains_rect(&padded) {
                if let Some(target) = &mut self.device {
                    return target.device.draw_thin_line(line.o.p, line.e.p);
                }
            }

            return self.add_line(line, next, start_cap);
        }

        let cap         = self.params.cap();
        let join        = next.map(|next| self.join_before(next));
        let simple_cap  = (!start_cap && next.is_some()) || cap == LineCap::Butt || cap == LineCap::Square;
        let simple_join = matches!(join, None | Some(LineJoin::Bevel) | Some(LineJoin::Miter) | Some(LineJoin::None));
        let next_thin   = next.map(|next| next.thin).unwrap_or(false);

        let fast_path   = unclipped
            && simple_cap
            && simple_join
            && !next_thin
            && self.state.fill_adjust() == FixedPoint::ORIGIN
            && self.state.idempotent_op();

        if !fast_path {
            return self.add_line(line, next, start_cap);
        }

        let mut points = StrokePoints::new();
        cap_points(if start_cap { cap } else { LineCap::Butt }, &line.o, &mut points)?;

        match (next, join) {
            (Some(next), Some(join))    => line_join_points(join, self.params.miter_check(), line, next, &mut points)?,
            _                           => cap_points(cap, &line.e, &mut points)?,
        }

        // The shape primitives take their edges as fixed-point vectors
        let (body_a, body_b) = match (points[0].checked_sub(points[1]), points[2].checked_sub(points[1])) {
            (Ok(a), Ok(b))  => (a, b),
            _               => {
                add_points(&mut self.output, &points, true)?;
                return self.output.close_subpath();
            }
        };

        let target = match &mut self.device {
            Some(target)    => target,
            None            => return Ok(()),
        };

        if let (Some(next), Some(join)) = (next, join) {
            if join != LineJoin::None {
                if join == LineJoin::Miter && !(points[2] == line.e.co && points[5] == line.e.ce) {
                    // A real miter: fill the polygon as a path
                    trace!("Stroke miter filled as a path");

                    add_points(&mut self.output, &points, true)?;
                    return self.output.close_subpath();
                }

                // Fill the bevel triangle
                let bevel = if points[3] == next.o.p { &points[3..6] } else { &points[2..5] };

                match (bevel[1].checked_sub(bevel[0]), bevel[2].checked_sub(bevel[0])) {
                    (Ok(a), Ok(b))  => target.device.fill_triangle(bevel[0], a, b)?,
                    _               => {
                        add_points(&mut self.output, &points, true)?;
                        return self.output.close_subpath();
                    }
                }
            }
        }

        // The body of the line
        target.device.fill_parallelogram(points[1], body_a, body_b)
    }
}

///
/// Converts the stroke of a path into a path that can be filled with the non-zero winding rule (`strokepath`)
///
/// The result is made of one closed polygon for each line in the stroke (with arcs for round caps and joins).
/// Curves are flattened and dashes expanded first.
///
pub fn stroke_path(path: &Path, state: &ImagerState) -> Result<Path, GeometryError> {
    let mut stroker = Stroker::new(state, None);
    stroker.stroke(path)?;

    Ok(stroker.output)
}

///
/// Draws the stroke of a path on a device, restricted to a clip region
///
/// Nothing is drawn if the stroke cannot reach the clip region. If the stroke is entirely inside the clip region,
/// lines with simple caps and joins are drawn with the device's triangle and parallelogram primitives (when there
/// is no fill adjustment and the drawing operation is idempotent), and thin lines with `draw_thin_line`. Everything
/// else is filled as a path, one line at a time.
///
pub fn stroke_path_to_device(path: &Path, device: &mut dyn Device, state: &ImagerState, clip: Option<&ClipPath>) -> Result<(), GeometryError> {
    if path.is_void() {
        return Ok(());
    }

    let expanded = stroke_expansion_box(&path.bounding_box()?, state);

    let (inner_box, unclipped) = match clip {
        None        => (FixedRect::everything(), true),
        Some(clip)  => {
            if !expanded.overlaps(&clip.outer_box()) {
                trace!("Stroke is outside the clip region");
                return Ok(());
            }

            let inner_box = clip.inner_box();
            (inner_box, !inner_box.is_empty() && inner_box.contains_rect(&expanded))
        }
    };

    debug!("Stroking {} subpaths to device (unclipped: {})", path.subpath_count(), unclipped);

    let target      = DeviceTarget { device, clip, inner_box, unclipped };
    let mut stroker = Stroker::new(state, Some(target));

    stroker.stroke(path)
}
