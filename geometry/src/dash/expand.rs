/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::dash_pattern::*;
use crate::geo::*;
use crate::path::*;
use crate::state::*;
use crate::stroke::*;
use crate::error::*;

use log::*;

///
/// Where the dash pattern is along a subpath
///
#[derive(Copy, Clone, Debug)]
struct DashPhase {
    ink_on: bool,
    index:  usize,
    left:   f64,
    scale:  f64,
}

impl DashPhase {
    ///
    /// The phase at the start of a subpath, with every pattern length multiplied by `scale`
    ///
    fn start(dash: &DashPattern, scale: f64) -> DashPhase {
        DashPhase {
            ink_on: dash.init_ink_on(),
            index:  dash.init_index(),
            left:   dash.init_dist_left() * scale,
            scale,
        }
    }

    ///
    /// Moves on to the next entry in the pattern
    ///
    fn advance(&mut self, dash: &DashPattern) {
        let pattern = dash.pattern();

        self.ink_on = !self.ink_on;
        self.index  = (self.index + 1) % pattern.len();
        self.left   = pattern[self.index] * self.scale;
    }
}

///
/// The scale factor that fits a whole number of pattern repetitions onto a segment
///
fn adapt_scale(length: f64, pattern_length: f64) -> f64 {
    let repetitions = (length / pattern_length).round().max(1.0);
    length / (pattern_length * repetitions)
}

///
/// Finds the point a fraction `t` of the way along a line
///
#[inline]
fn interpolate(from: FixedPoint, to: FixedPoint, t: f64) -> Result<FixedPoint, GeometryError> {
    let (from, to) = (from.to_coord2(), to.to_coord2());
    let point      = from + (to - from) * t;

    FixedPoint::from_f64(point.0, point.1)
}

///
/// Writes dashes to a path, holding back the first dash of a closed subpath so it can be joined to the last one
///
struct DashWriter<'a> {
    output:     &'a mut Path,
    deferring:  bool,
    deferred:   Vec<(FixedPoint, SegmentNotes)>,
}

impl<'a> DashWriter<'a> {
    fn move_to(&mut self, point: FixedPoint) -> Result<(), GeometryError> {
        self.output.add_point(point)
    }

    fn line_to(&mut self, point: FixedPoint, notes: SegmentNotes) -> Result<(), GeometryError> {
        if self.deferring {
            self.deferred.try_reserve(1)?;
            self.deferred.push((point, notes));

            Ok(())
        } else if !self.output.last_op_was_moveto() && self.output.current_point().ok() == Some(point) {
            // A dash that carries on over a segment boundary
            Ok(())
        } else {
            self.output.add_line_notes(point, notes)
        }
    }

    ///
    /// Writes the held back first dash of a closed subpath
    ///
    /// If ink is on at the end of the subpath, the last dash runs on into the first one. If the ink never went
    /// off, the subpath is written out whole and closed.
    ///
    fn finish_wrap(&mut self, start: FixedPoint, ink_on: bool) -> Result<(), GeometryError> {
        let deferred = std::mem::take(&mut self.deferred);

        if self.deferring {
            self.deferring = false;

            let body = match deferred.split_last() {
                Some(((last, _), body)) if *last == start   => body,
                _                                           => &deferred[..],
            };

            self.output.add_point(start)?;
            for (point, notes) in body.iter() {
                self.output.add_line_notes(*point, *notes)?;
            }
            self.output.close_subpath()
        } else if deferred.is_empty() {
            Ok(())
        } else {
            if !ink_on {
                self.output.add_point(start)?;
            }

            for (point, notes) in deferred.into_iter() {
                self.line_to(point, notes)?;
            }

            Ok(())
        }
    }
}

///
/// Dashes a single line-only subpath
///
fn dash_subpath(subpath: &Subpath, dash: &DashPattern, state: &ImagerState, output: &mut Path) -> Result<(), GeometryError> {
    let ctm         = state.ctm();
    let start       = subpath.start_point();
    let segments    = &subpath.segments()[1..];

    // The pattern is measured in user space
    let mut lengths = vec![];
    lengths.try_reserve(segments.len())?;

    let mut from = start;
    for segment in segments.iter() {
        let to      = segment.end_point();
        let delta   = to.offset_from(from);

        lengths.push(ctm.inverse_distance(delta.0, delta.1)?.magnitude());
        from = to;
    }

    if subpath.is_closed() && lengths.iter().all(|length| *length == 0.0) {
        // A closed subpath with no length still shows up as a dot when the caps can draw one
        let params = state.line_params();

        if params.cap() == LineCap::Round || params.dot_length() > 0.0 {
            output.add_point(start)?;
            output.add_line(start)?;
        }

        return Ok(());
    }

    let mut phase   = DashPhase::start(dash, 1.0);
    let wrap        = subpath.is_closed() && phase.ink_on;
    let mut writer  = DashWriter { output, deferring: wrap, deferred: vec![] };

    if phase.ink_on && !wrap {
        writer.move_to(start)?;
    }

    let mut from = start;
    for (segment, length) in segments.iter().zip(lengths.into_iter()) {
        let to = segment.end_point();

        if dash.adapt() && length > 0.0 {
            // Every segment starts the pattern afresh, stretched to fit
            let restarted = DashPhase::start(dash, adapt_scale(length, dash.pattern_length()));

            if restarted.ink_on && !phase.ink_on {
                writer.move_to(from)?;
            } else if !restarted.ink_on && phase.ink_on {
                writer.deferring = false;
            }

            phase = restarted;
        }

        // Lines that continue a dash from the previous segment keep the segment's notes
        let mut continuing  = phase.ink_on;
        let mut pos         = 0.0;

        loop {
            let remaining = length - pos;

            if phase.left >= remaining {
                phase.left -= remaining;

                if phase.ink_on {
                    writer.line_to(to, if continuing { segment.notes() } else { SegmentNotes::NONE })?;
                }
                break;
            }

            pos         += phase.left;
            let point   = interpolate(from, to, pos / length)?;

            if phase.ink_on {
                writer.line_to(point, if continuing { segment.notes() } else { SegmentNotes::NONE })?;
                writer.deferring = false;
            } else {
                writer.move_to(point)?;
            }

            continuing = false;
            phase.advance(dash);
        }

        from = to;
    }

    if wrap {
        writer.finish_wrap(start, phase.ink_on)?;
    }

    Ok(())
}

///
/// Breaks a path into dashes using the dash pattern of the line parameters
///
/// Curves are flattened first. Each dash becomes an open subpath, except that a closed subpath where the ink
/// never goes off stays closed, and a closed subpath that starts with ink on joins its first and last dashes.
/// Paths are returned unchanged when there is no dash pattern.
///
pub fn expand_dashes(path: &Path, state: &ImagerState) -> Result<Path, GeometryError> {
    let dash = match state.line_params().dash() {
        Some(dash) if !dash.is_solid()  => dash,
        _                               => return Ok(path.clone()),
    };

    if path.has_curves() {
        let flat = path.flatten(state.flatness(), state.accurate_curves())?;
        return expand_dashes(&flat, state);
    }

    let mut dashed = Path::new();
    for subpath in path.subpaths() {
        dash_subpath(subpath, dash, state, &mut dashed)?;
    }

    debug!("Dashed {} subpaths into {}", path.subpath_count(), dashed.subpath_count());

    Ok(dashed)
}
