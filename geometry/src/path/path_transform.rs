/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use super::segment::*;
use super::subpath::*;
use crate::geo::*;
use crate::error::*;

use std::cell::Cell;
use std::sync::Arc;

impl Path {
    ///
    /// Applies a function to every point in the path, producing a new path or failing without changing this one
    ///
    fn try_map_points<F>(&self, mut map: F) -> Result<Path, GeometryError>
    where
        F: FnMut(FixedPoint) -> Result<FixedPoint, GeometryError>,
    {
        let mut subpaths = vec![];
        subpaths.try_reserve(self.storage.subpaths.len())?;

        for subpath in self.storage.subpaths.iter() {
            let mut segments = vec![];
            segments.try_reserve(subpath.segments.len())?;

            for segment in subpath.segments.iter() {
                segments.push(segment.try_map_points(&mut map)?);
            }

            subpaths.push(Subpath { segments, is_closed: subpath.is_closed, curve_count: subpath.curve_count });
        }

        let position = match self.position {
            Some(position)  => Some(map(position)?),
            None            => None,
        };

        Ok(Path {
            storage:    Arc::new(PathStorage { subpaths, curve_count: self.storage.curve_count }),
            position,
            state:      self.state,
            bounds:     Cell::new(None),
            bbox_limit: None,
        })
    }

    ///
    /// Moves every point in this path by the specified offset
    ///
    pub fn translate(&mut self, offset: FixedPoint) -> Result<(), GeometryError> {
        let translated = self.try_map_points(|point| point.checked_add(offset))?;
        *self = translated;

        Ok(())
    }

    ///
    /// Scales this path by a power of 2 along each axis (negative values shrink the path)
    ///
    pub fn scale_exp2(&mut self, log2_x: i32, log2_y: i32) -> Result<(), GeometryError> {
        let scaled = self.try_map_points(|point| Ok(FixedPoint::new(point.x.scale_exp2(log2_x)?, point.y.scale_exp2(log2_y)?)))?;
        *self = scaled;

        Ok(())
    }

    ///
    /// Returns a copy of this path with the direction of every subpath reversed
    ///
    /// Closed subpaths stay closed and start from the same point. A trailing moveto is kept.
    ///
    pub fn copy_reversed(&self) -> Result<Path, GeometryError> {
        let mut reversed = Path::new();

        for subpath in self.subpaths() {
            let segments    = subpath.segments();
            let closed      = subpath.is_closed();

            // Drop the closepath: a closed subpath is reversed starting from its start point
            let body = match segments.last() {
                Some(Segment::Close { .. }) => &segments[..segments.len() - 1],
                _                           => segments,
            };

            let end_point = body[body.len() - 1].end_point();
            if closed {
                reversed.add_point(subpath.start_point())?;
                if end_point != subpath.start_point() {
                    reversed.add_line(end_point)?;
                }
            } else {
                reversed.add_point(end_point)?;
            }

            // Walk back over the segments: segment i runs from body[i-1] to body[i]
            for idx in (1..body.len()).rev() {
                let previous    = body[idx - 1].end_point();

                // The note describing the join at the start of a reversed segment belongs to the segment after it
                let notes       = body.get(idx + 1).map(|segment| segment.notes()).unwrap_or(SegmentNotes::NONE);

                match body[idx] {
                    Segment::Curve { cp1, cp2, .. } => reversed.add_curve_notes(cp2, cp1, previous, notes)?,

                    Segment::Line { .. } if closed && idx == 1 => {
                        // The closepath draws this line
                    }

                    _ => reversed.add_line_notes(previous, notes)?,
                }
            }

            if closed {
                reversed.close_subpath()?;
            }
        }

        if self.last_op_was_moveto() {
            reversed.add_point(self.current_point()?)?;
        }

        Ok(reversed)
    }
}
