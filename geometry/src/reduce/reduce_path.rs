/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fixed_curve::*;
use super::flatten::*;
use super::monotonic::*;
use crate::path::*;
use crate::error::*;

use log::*;

///
/// What to do with the curves of a path when copying it
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ReduceMode {
    /// Replace every curve with lines that stay within `flatness` device pixels of it
    Flatten { flatness: f64, accurate: bool },

    /// Split every curve into pieces that are monotonic in x and in y
    Monotonize,

    /// Copy curves unchanged
    Keep,
}

impl Path {
    ///
    /// Creates a copy of this path with its curves reduced
    ///
    /// Lines and closepaths are copied as they are, and a trailing moveto is preserved. A path with no curves
    /// is returned as a shared copy of itself.
    ///
    pub fn copy_reducing(&self, mode: ReduceMode) -> Result<Path, GeometryError> {
        if !self.has_curves() {
            return Ok(self.clone());
        }

        let mut result      = Path::new();
        let mut segments    = vec![];

        for subpath in self.subpaths() {
            result.add_point(subpath.start_point())?;

            let mut last_point = subpath.start_point();
            for segment in subpath.segments()[1..].iter() {
                match (*segment, mode) {
                    (Segment::Curve { cp1, cp2, to, notes }, ReduceMode::Flatten { flatness, accurate }) => {
                        segments.clear();
                        flatten_curve(&FixedCurve::new(last_point, cp1, cp2, to), notes, flatness, accurate, &mut segments)?;
                        result.append_segments(&segments)?;
                    }

                    (Segment::Curve { cp1, cp2, to, notes }, ReduceMode::Monotonize) => {
                        segments.clear();
                        monotonize_curve(&FixedCurve::new(last_point, cp1, cp2, to), notes, &mut segments)?;
                        result.append_segments(&segments)?;
                    }

                    (Segment::Close { notes, .. }, _)   => result.close_subpath_notes(notes)?,
                    (Segment::Start { .. }, _)          => { }
                    (other, _)                          => result.append_segments(&[other])?,
                }

                last_point = segment.end_point();
            }
        }

        if self.last_op_was_moveto() || self.is_void() {
            if let Ok(point) = self.current_point() {
                result.add_point(point)?;
            }
        }

        trace!("Reduced path with {} curves ({:?}): {} curves remain", self.curve_count(), mode, result.curve_count());

        Ok(result)
    }

    ///
    /// Creates a copy of this path with every curve replaced by lines
    ///
    #[inline]
    pub fn flatten(&self, flatness: f64, accurate: bool) -> Result<Path, GeometryError> {
        self.copy_reducing(ReduceMode::Flatten { flatness, accurate })
    }

    ///
    /// Creates a copy of this path where every curve is monotonic in both x and y
    ///
    #[inline]
    pub fn monotonize(&self) -> Result<Path, GeometryError> {
        self.copy_reducing(ReduceMode::Monotonize)
    }
}
