/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::segment::*;
use super::subpath::*;
use crate::geo::*;
use crate::error::*;

use log::*;

use std::cell::Cell;
use std::mem;
use std::sync::Arc;

///
/// Where the path is in the process of building a subpath
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(super) enum SubpathState {
    /// No subpath is open (the path is new, or the last subpath was closed)
    Closed,

    /// The last operation was a moveto: the next line or curve starts a new subpath
    MovePending,

    /// The last subpath is open and accepts new segments
    Open,
}

///
/// The segment storage of a path, which may be shared between several `Path` handles
///
#[derive(Clone, PartialEq, Debug, Default)]
pub(super) struct PathStorage {
    pub(super) subpaths:    Vec<Subpath>,
    pub(super) curve_count: usize,
}

///
/// A device-space path made up of subpaths of fixed-point line and curve segments
///
/// Cloning a path is cheap: the segment storage is reference counted and is only copied when one of the
/// handles that shares it is about to be changed.
///
#[derive(Clone, Debug)]
pub struct Path {
    pub(super) storage:     Arc<PathStorage>,
    pub(super) position:    Option<FixedPoint>,
    pub(super) state:       SubpathState,

    /// Cached bounds of every segment, `None` when they need to be recalculated
    pub(super) bounds:      Cell<Option<FixedRect>>,

    /// Points outside this box are rejected with a `Limit` error
    pub(super) bbox_limit:  Option<FixedRect>,
}

impl Default for Path {
    fn default() -> Path {
        Path::new()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Path) -> bool {
        self.position == other.position
            && self.state == other.state
            && (Arc::ptr_eq(&self.storage, &other.storage) || self.storage == other.storage)
    }
}

impl Path {
    ///
    /// Creates a new empty path
    ///
    pub fn new() -> Path {
        Path {
            storage:    Arc::new(PathStorage::default()),
            position:   None,
            state:      SubpathState::Closed,
            bounds:     Cell::new(None),
            bbox_limit: None,
        }
    }

    ///
    /// Resets this path to the empty path
    ///
    pub fn clear(&mut self) {
        *self = Path::new();
    }

    ///
    /// Replaces this path with a copy of another, sharing its storage (the source remains valid)
    ///
    pub fn assign_preserve(&mut self, source: &Path) {
        *self = source.clone();
    }

    ///
    /// Moves another path into this one, leaving the source empty
    ///
    pub fn assign_free(&mut self, source: &mut Path) {
        *self = mem::take(source);
    }

    /// True if the segment storage of this path is shared with another path
    #[inline]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.storage) > 1
    }

    #[inline]
    pub fn subpaths(&self) -> &[Subpath] {
        &self.storage.subpaths
    }

    #[inline]
    pub fn subpath_count(&self) -> usize {
        self.storage.subpaths.len()
    }

    #[inline]
    pub fn curve_count(&self) -> usize {
        self.storage.curve_count
    }

    #[inline]
    pub fn has_curves(&self) -> bool {
        self.storage.curve_count != 0
    }

    /// True if this path has no segments (it may still have a current point)
    #[inline]
    pub fn is_void(&self) -> bool {
        self.storage.subpaths.is_empty()
    }

    /// True if this path has no segments and no current point
    #[inline]
    pub fn is_null(&self) -> bool {
        self.is_void() && self.position.is_none()
    }

    #[inline]
    pub fn last_op_was_moveto(&self) -> bool {
        self.state == SubpathState::MovePending
    }

    ///
    /// The current point, or `NoCurrentPoint` if none has been set
    ///
    #[inline]
    pub fn current_point(&self) -> Result<FixedPoint, GeometryError> {
        self.position.ok_or(GeometryError::NoCurrentPoint)
    }

    ///
    /// Restricts the points that can be added to this path to a rectangle
    ///
    pub fn set_bbox_limit(&mut self, limit: Option<FixedRect>) {
        self.bbox_limit = limit;
    }

    #[inline]
    pub fn bbox_limit(&self) -> Option<FixedRect> {
        self.bbox_limit
    }

    ///
    /// The bounds of every segment in this path, including curve control points
    ///
    /// A trailing moveto is not included unless it is the only thing in the path. Fails with
    /// `NoCurrentPoint` if the path is completely empty.
    ///
    pub fn bounding_box(&self) -> Result<FixedRect, GeometryError> {
        if let Some(bounds) = self.bounds.get() {
            return Ok(bounds);
        }

        let bounds = match self.storage.subpaths.split_first() {
            None                => FixedRect::at_point(self.current_point()?),
            Some((first, rest)) => rest.iter().fold(first.bounds(), |bounds, subpath| bounds.union(&subpath.bounds())),
        };

        self.bounds.set(Some(bounds));
        Ok(bounds)
    }

    ///
    /// If this path is a single axis-aligned rectangle, returns its bounds and how it is closed
    ///
    pub fn is_rectangular(&self) -> Option<(FixedRect, RectangleClosure)> {
        match self.storage.subpaths.as_slice() {
            [only]  => only.is_rectangle(),
            _       => None,
        }
    }

    ///
    /// Fails with `Limit` if any of the points lie outside the bounding box limit
    ///
    fn check_limit(&self, points: &[FixedPoint]) -> Result<(), GeometryError> {
        match self.bbox_limit {
            Some(limit) if points.iter().any(|point| !limit.contains_point(*point)) => Err(GeometryError::Limit),
            _                                                                       => Ok(()),
        }
    }

    ///
    /// Appends segments to the current subpath, starting a new subpath at the current point if needed
    ///
    /// All storage is reserved before anything is changed, so on failure the path is left as it was.
    ///
    pub(crate) fn append_segments(&mut self, segments: &[Segment]) -> Result<(), GeometryError> {
        let last = match segments.last() {
            Some(last)  => *last,
            None        => return Ok(()),
        };

        let position        = self.current_point()?;
        let was_empty       = self.storage.subpaths.is_empty();
        let open            = self.state == SubpathState::Open;
        let storage         = Arc::make_mut(&mut self.storage);

        // Make space for everything before changing the path
        let mut new_subpath = None;
        if open {
            match storage.subpaths.last_mut() {
                Some(subpath)   => subpath.segments.try_reserve(segments.len())?,
                None            => return Err(GeometryError::NoCurrentPoint),
            }
        } else {
            storage.subpaths.try_reserve(1)?;
            new_subpath = Some(Subpath::try_new(position, segments.len() + 1)?);
        }

        if let Some(subpath) = new_subpath {
            storage.subpaths.push(subpath);
        }

        let mut bounds = self.bounds.get().filter(|_| !was_empty).map(|bounds| bounds.union_point(position));
        if let Some(subpath) = storage.subpaths.last_mut() {
            for segment in segments {
                subpath.push(*segment);
                bounds = bounds.map(|bounds| segment.extend_bounds(bounds));

                if segment.is_curve() {
                    storage.curve_count += 1;
                }
            }
        }

        self.bounds.set(bounds);
        self.position   = Some(last.end_point());
        self.state      = match last {
            Segment::Close { .. }   => SubpathState::Closed,
            _                       => SubpathState::Open,
        };

        Ok(())
    }

    ///
    /// Sets the current point, starting a new subpath (moveto)
    ///
    pub fn add_point(&mut self, point: FixedPoint) -> Result<(), GeometryError> {
        self.check_limit(&[point])?;

        if self.storage.subpaths.is_empty() {
            self.bounds.set(None);
        }

        self.position   = Some(point);
        self.state      = SubpathState::MovePending;

        Ok(())
    }

    ///
    /// Moves the current point by a distance (rmoveto)
    ///
    pub fn add_relative_point(&mut self, delta: FixedPoint) -> Result<(), GeometryError> {
        let point = self.current_point()?.checked_add(delta)?;
        self.add_point(point)
    }

    #[inline]
    pub fn add_line(&mut self, to: FixedPoint) -> Result<(), GeometryError> {
        self.add_line_notes(to, SegmentNotes::NONE)
    }

    pub fn add_line_notes(&mut self, to: FixedPoint, notes: SegmentNotes) -> Result<(), GeometryError> {
        self.check_limit(&[to])?;
        self.append_segments(&[Segment::Line { to, notes }])
    }

    ///
    /// Adds a series of lines, failing without changing the path if any of them cannot be added
    ///
    pub fn add_lines(&mut self, points: &[FixedPoint]) -> Result<(), GeometryError> {
        self.check_limit(points)?;

        let mut lines = vec![];
        lines.try_reserve(points.len())?;
        lines.extend(points.iter().map(|to| Segment::Line { to: *to, notes: SegmentNotes::NONE }));

        self.append_segments(&lines)
    }

    #[inline]
    pub fn add_curve(&mut self, cp1: FixedPoint, cp2: FixedPoint, to: FixedPoint) -> Result<(), GeometryError> {
        self.add_curve_notes(cp1, cp2, to, SegmentNotes::NONE)
    }

    pub fn add_curve_notes(&mut self, cp1: FixedPoint, cp2: FixedPoint, to: FixedPoint, notes: SegmentNotes) -> Result<(), GeometryError> {
        self.check_limit(&[cp1, cp2, to])?;
        self.append_segments(&[Segment::Curve { cp1, cp2, to, notes }])
    }

    ///
    /// Adds a curve approximating a circular arc of up to 90 degrees
    ///
    /// The arc runs from the current point to `to`; `corner` is where the tangents at the two ends meet. The
    /// control points lie `fraction` of the way from each end towards the corner.
    ///
    pub fn add_partial_arc(&mut self, to: FixedPoint, corner: FixedPoint, fraction: f64) -> Result<(), GeometryError> {
        let from = self.current_point()?;

        let towards = |start: Fixed, target: Fixed| {
            Fixed(start.0 + ((target.0 as f64 - start.0 as f64) * fraction) as i32)
        };

        let cp1 = FixedPoint::new(towards(from.x, corner.x), towards(from.y, corner.y));
        let cp2 = FixedPoint::new(towards(to.x, corner.x), towards(to.y, corner.y));

        self.add_curve_notes(cp1, cp2, to, SegmentNotes::NONE)
    }

    #[inline]
    pub fn close_subpath(&mut self) -> Result<(), GeometryError> {
        self.close_subpath_notes(SegmentNotes::NONE)
    }

    ///
    /// Closes the current subpath with a line back to its start point (does nothing if no subpath is open)
    ///
    pub fn close_subpath_notes(&mut self, notes: SegmentNotes) -> Result<(), GeometryError> {
        if self.state != SubpathState::Open {
            return Ok(());
        }

        let start = match self.storage.subpaths.last() {
            Some(subpath)   => subpath.start_point(),
            None            => return Ok(()),
        };

        self.append_segments(&[Segment::Close { to: start, notes }])
    }

    ///
    /// Removes the closepath that ends the last subpath, reopening it
    ///
    pub fn pop_close_subpath(&mut self) -> Result<(), GeometryError> {
        let closed = match self.storage.subpaths.last() {
            Some(subpath)   => subpath.is_closed && self.state == SubpathState::Closed,
            None            => false,
        };

        if !closed {
            return Ok(());
        }

        let storage = Arc::make_mut(&mut self.storage);
        if let Some(subpath) = storage.subpaths.last_mut() {
            if let Some(Segment::Close { .. }) = subpath.segments.last() {
                subpath.segments.pop();
                subpath.is_closed = false;

                self.position   = Some(subpath.current_point());
                self.state      = SubpathState::Open;
            }
        }

        Ok(())
    }

    ///
    /// Adds a closed rectangular subpath with corners at `p` and `q`
    ///
    /// The subpath runs from `p` to `(p.x, q.y)`, `q`, `(q.x, p.y)` and back to `p`.
    ///
    pub fn add_rectangle(&mut self, p: FixedPoint, q: FixedPoint) -> Result<(), GeometryError> {
        self.check_limit(&[p, q])?;

        let mut subpath = Subpath::try_new(p, 5)?;
        subpath.push(Segment::Line { to: FixedPoint::new(p.x, q.y), notes: SegmentNotes::NONE });
        subpath.push(Segment::Line { to: q, notes: SegmentNotes::NONE });
        subpath.push(Segment::Line { to: FixedPoint::new(q.x, p.y), notes: SegmentNotes::NONE });
        subpath.push(Segment::Close { to: p, notes: SegmentNotes::NONE });

        let was_empty   = self.storage.subpaths.is_empty();
        let storage     = Arc::make_mut(&mut self.storage);
        storage.subpaths.try_reserve(1)?;
        storage.subpaths.push(subpath);

        let bounds = self.bounds.get().filter(|_| !was_empty).map(|bounds| bounds.union_point(p).union_point(q));
        self.bounds.set(bounds);
        self.position   = Some(p);
        self.state      = SubpathState::Closed;

        Ok(())
    }

    ///
    /// Appends all of the subpaths of another path to this one, then resets the other path
    ///
    /// The current point and moveto state of this path become those of the appended path.
    ///
    pub fn add_path(&mut self, from: &mut Path) -> Result<(), GeometryError> {
        if !from.storage.subpaths.is_empty() {
            Arc::make_mut(&mut self.storage).subpaths.try_reserve(from.storage.subpaths.len())?;
        }

        let Path { storage: from_storage, position, state, .. } = mem::take(from);
        let from_storage = Arc::try_unwrap(from_storage).unwrap_or_else(|shared| (*shared).clone());

        if !from_storage.subpaths.is_empty() {
            let storage = Arc::make_mut(&mut self.storage);
            storage.curve_count += from_storage.curve_count;
            storage.subpaths.extend(from_storage.subpaths);

            self.bounds.set(None);
        }

        if position.is_some() {
            self.position   = position;
            self.state      = state;
        }

        trace!("Appended path: {} subpaths", self.storage.subpaths.len());
        Ok(())
    }
}
