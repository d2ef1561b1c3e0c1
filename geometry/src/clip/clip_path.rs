/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::clip_id::*;
use super::clip_rect::*;
use super::clip_list::*;
use super::clip_accumulator::*;
use super::outline::*;
use super::scan_convert::*;
use super::winding_rule::*;
use crate::geo::*;
use crate::path::*;
use crate::state::*;
use crate::error::*;

use log::*;

use std::sync::Arc;

///
/// A clipping region
///
/// The region can be held as a path, as a list of rectangles, or both: whichever is missing is generated
/// when it is first needed. Rectangular regions are handled without building a general rectangle list.
///
/// A clip path can be marked as 'outside', in which case the region is everything that is not in the stored
/// path or list.
///
#[derive(Clone, Debug)]
pub struct ClipPath {
    id:         ClipId,
    rule:       WindingRule,
    flatness:   f64,

    /// A rectangle that is entirely inside the stored region
    inner:      FixedRect,

    /// A rectangle that the stored region is entirely inside
    outer:      FixedRect,

    outside:    bool,
    path:       Option<Path>,
    list:       Option<Arc<ClipList>>,
}

impl Default for ClipPath {
    fn default() -> ClipPath {
        ClipPath::new()
    }
}

impl ClipPath {
    ///
    /// Creates a clip path that contains nothing
    ///
    pub fn new() -> ClipPath {
        ClipPath {
            id:         ClipId::new(),
            rule:       WindingRule::NonZero,
            flatness:   1.0,
            inner:      FixedRect::default(),
            outer:      FixedRect::default(),
            outside:    false,
            path:       None,
            list:       Some(Arc::new(ClipList::new())),
        }
    }

    ///
    /// Creates a clip path covering a rectangle
    ///
    pub fn from_rectangle(rect: FixedRect) -> ClipPath {
        let mut clip = ClipPath::new();
        clip.set_rectangle(rect);
        clip
    }

    ///
    /// Creates a clip path covering the inside of a path
    ///
    /// The rectangle list for a general path is built when it is first needed.
    ///
    pub fn from_path(path: &Path, rule: WindingRule, state: &ImagerState) -> Result<ClipPath, GeometryError> {
        if let Some((rect, _)) = path.is_rectangular() {
            let mut clip    = ClipPath::from_rectangle(rect);
            clip.rule       = rule;
            return Ok(clip);
        }

        if path.is_void() {
            return Ok(ClipPath::from_rectangle(Self::void_box(path, state)));
        }

        let outer = path.bounding_box()?;

        Ok(ClipPath {
            id:         ClipId::new(),
            rule,
            flatness:   state.flatness(),
            inner:      FixedRect::at_point(outer.p),
            outer,
            outside:    false,
            path:       Some(path.clone()),
            list:       None,
        })
    }

    ///
    /// The zero-area rectangle used when clipping to a path with no segments
    ///
    /// This is at the path's current point, or at the user-space origin if it has none.
    ///
    fn void_box(path: &Path, state: &ImagerState) -> FixedRect {
        let point = path.current_point().unwrap_or_else(|_| state.ctm().transform_to_fixed_clamped(0.0, 0.0));
        FixedRect::at_point(point)
    }

    ///
    /// Replaces the region with a single rectangle
    ///
    fn set_rectangle(&mut self, rect: FixedRect) {
        self.id         = ClipId::new();
        self.inner      = rect;
        self.outer      = rect;
        self.outside    = false;
        self.path       = None;
        self.list       = Some(Arc::new(ClipList::from_rect(ClipRect::from_fixed_rect(&rect))));
    }

    ///
    /// Replaces the region with a rectangle list
    ///
    fn set_list(&mut self, list: ClipList, outside: bool) {
        self.id         = ClipId::new();
        self.inner      = list.largest_rect().map(|rect| rect.to_fixed_rect()).unwrap_or_default();
        self.outer      = list.bounds().map(|rect| rect.to_fixed_rect()).unwrap_or_default();
        self.outside    = outside;
        self.path       = None;
        self.list       = Some(Arc::new(list));
    }

    /// Changes whenever the region covered by this clip path changes
    #[inline]
    pub fn id(&self) -> ClipId {
        self.id
    }

    #[inline]
    pub fn rule(&self) -> WindingRule {
        self.rule
    }

    #[inline]
    pub fn is_outside(&self) -> bool {
        self.outside
    }

    ///
    /// Marks the region as the inside (false) or outside (true) of the stored shape
    ///
    pub fn set_outside(&mut self, outside: bool) {
        if self.outside != outside {
            self.outside    = outside;
            self.id         = ClipId::new();
        }
    }

    ///
    /// A rectangle entirely inside the region (zero-area if no such rectangle is known)
    ///
    pub fn inner_box(&self) -> FixedRect {
        if self.outside {
            FixedRect::default()
        } else {
            self.inner
        }
    }

    ///
    /// A rectangle containing the whole region
    ///
    pub fn outer_box(&self) -> FixedRect {
        if self.outside {
            FixedRect::everything()
        } else {
            self.outer
        }
    }

    ///
    /// If the region is a single rectangle, returns it
    ///
    pub fn is_rectangle(&self) -> Option<FixedRect> {
        let single = self.list.as_ref().map(|list| list.len() <= 1).unwrap_or(false);

        if !self.outside && single && self.inner == self.outer {
            Some(self.inner)
        } else {
            None
        }
    }

    ///
    /// True if a rectangle is known to be entirely inside the region
    ///
    pub fn includes_rectangle(&self, rect: &FixedRect) -> bool {
        // A zero-area inner box is only a placeholder and covers nothing
        !self.outside && !self.inner.is_empty() && self.inner.contains_rect(rect)
    }

    ///
    /// Makes sure the rectangle list is available
    ///
    fn ensure_list(&mut self) -> Result<(), GeometryError> {
        if self.list.is_none() {
            let list = match &self.path {
                Some(path)  => scan_convert_path(path, self.rule, self.flatness, None)?,
                None        => ClipList::new(),
            };

            trace!("Converted clip path to {} rectangles", list.len());
            self.list = Some(Arc::new(list));
        }

        Ok(())
    }

    ///
    /// The rectangle list for the stored region (this ignores the outside flag)
    ///
    pub fn list(&mut self) -> Result<&ClipList, GeometryError> {
        self.ensure_list()?;
        self.list.as_deref().ok_or(GeometryError::UndefinedResult)
    }

    ///
    /// A path describing the stored region (this ignores the outside flag)
    ///
    /// If the region is only known as a rectangle list, the path is traced from the list. This does not change
    /// the region, so the ID stays the same.
    ///
    pub fn path(&mut self) -> Result<&Path, GeometryError> {
        if self.path.is_none() {
            let path = if let (Some(rect), false) = (self.is_rectangle(), self.inner.is_empty()) {
                let mut path = Path::new();
                path.add_rectangle(rect.p, rect.q)?;
                path
            } else {
                Path::from_elements(ClipOutline::new(self.list()?))?
            };

            self.path = Some(path);
        }

        self.path.as_ref().ok_or(GeometryError::UndefinedResult)
    }

    ///
    /// The parts of a rectangle of pixels that are inside the region, honouring the outside flag
    ///
    pub fn rectangles_in(&mut self, query: &ClipRect) -> Result<Vec<ClipRect>, GeometryError> {
        let outside = self.outside;
        self.list()?.rectangles_in(query, outside)
    }

    ///
    /// Reduces the region to the parts that are also inside a path
    ///
    /// When the current region is a rectangle and the path is a rectangle or has no segments, the new region
    /// is calculated directly. A path with no segments produces a zero-area region at its current point.
    ///
    pub fn intersect(&mut self, path: &Path, rule: WindingRule, state: &ImagerState) -> Result<(), GeometryError> {
        if let Some(current) = self.is_rectangle() {
            let new_box = if path.is_void() {
                Some(Self::void_box(path, state))
            } else {
                path.is_rectangular().map(|(rect, _)| current.intersection(&rect))
            };

            if let Some(new_box) = new_box {
                trace!("Rectangular clip intersection: {:?}", new_box);

                self.set_rectangle(new_box);
                self.rule = rule;
                return Ok(());
            }
        }

        self.ensure_list()?;
        let existing    = self.list.clone().unwrap_or_default();
        let outside     = self.outside;

        let limit       = if outside { None } else { Some(existing.bounds().unwrap_or_default()) };
        let converted   = scan_convert_path(path, rule, state.flatness(), limit.as_ref())?;

        let result = if outside {
            let mut remaining = ClipAccumulator::new();
            for rect in converted.rects() {
                for piece in existing.rectangles_in(rect, true)? {
                    remaining.add(piece)?;
                }
            }
            remaining.finish()?
        } else {
            converted.intersect(&existing)?
        };

        debug!("Clip intersection: {} rectangles", result.len());

        self.set_list(result, false);
        self.rule       = rule;
        self.flatness   = state.flatness();

        Ok(())
    }

    ///
    /// Reduces the region to the parts that are also inside another clip region
    ///
    pub fn intersect_clip(&mut self, other: &mut ClipPath) -> Result<(), GeometryError> {
        if let (Some(ours), Some(theirs)) = (self.is_rectangle(), other.is_rectangle()) {
            self.set_rectangle(ours.intersection(&theirs));
            return Ok(());
        }

        self.ensure_list()?;
        other.ensure_list()?;

        let ours    = self.list.clone().unwrap_or_default();
        let theirs  = other.list.clone().unwrap_or_default();

        // Pieces of `inside` that are outside `excluded`
        let subtract = |inside: &ClipList, excluded: &ClipList| -> Result<ClipList, GeometryError> {
            let mut result = ClipAccumulator::new();
            for rect in inside.rects() {
                for piece in excluded.rectangles_in(rect, true)? {
                    result.add(piece)?;
                }
            }
            result.finish()
        };

        match (self.outside, other.outside) {
            (false, false)  => self.set_list(ours.intersect(&theirs)?, false),
            (false, true)   => self.set_list(subtract(ours.as_ref(), theirs.as_ref())?, false),
            (true, false)   => self.set_list(subtract(theirs.as_ref(), ours.as_ref())?, false),

            (true, true)    => {
                // Outside both is outside their union
                let mut union = ClipAccumulator::new();
                for rect in ours.rects().iter().chain(theirs.rects().iter()) {
                    union.add(*rect)?;
                }
                self.set_list(union.finish()?, true);
            }
        }

        Ok(())
    }

    ///
    /// Moves the region by an offset
    ///
    /// Whole-pixel offsets move the rectangle list; other offsets keep only the path.
    ///
    pub fn translate(&mut self, offset: FixedPoint) -> Result<(), GeometryError> {
        let inner = FixedRect::new(self.inner.p.checked_add(offset)?, self.inner.q.checked_add(offset)?);
        let outer = FixedRect::new(self.outer.p.checked_add(offset)?, self.outer.q.checked_add(offset)?);

        let whole_pixels = offset.x.fraction() == Fixed::ZERO && offset.y.fraction() == Fixed::ZERO;

        let list = match (&self.list, whole_pixels) {
            (Some(list), true)  => Some(Arc::new(list.translate(offset.x.to_int(), offset.y.to_int())?)),
            _                   => None,
        };

        let path = if list.is_none() || self.path.is_some() {
            let mut path = self.path()?.clone();
            path.translate(offset)?;
            Some(path)
        } else {
            None
        };

        self.inner  = inner;
        self.outer  = outer;
        self.list   = list;
        self.path   = path;
        self.id     = ClipId::new();

        Ok(())
    }

    ///
    /// Scales the region by powers of two
    ///
    /// Only the path survives shrinking, as a rectangle list cannot be scaled down exactly.
    ///
    pub fn scale_exp2(&mut self, log2_x: i32, log2_y: i32) -> Result<(), GeometryError> {
        let scale_point = |point: FixedPoint| -> Result<FixedPoint, GeometryError> {
            Ok(FixedPoint::new(point.x.scale_exp2(log2_x)?, point.y.scale_exp2(log2_y)?))
        };

        let inner = FixedRect::new(scale_point(self.inner.p)?, scale_point(self.inner.q)?);
        let outer = FixedRect::new(scale_point(self.outer.p)?, scale_point(self.outer.q)?);

        let list = match (&self.list, log2_x >= 0 && log2_y >= 0) {
            (Some(list), true)  => Some(Arc::new(list.scale_exp2(log2_x, log2_y)?)),
            _                   => None,
        };

        let path = if list.is_none() || self.path.is_some() {
            let mut path = self.path()?.clone();
            path.scale_exp2(log2_x, log2_y)?;
            Some(path)
        } else {
            None
        };

        self.inner  = inner;
        self.outer  = outer;
        self.list   = list;
        self.path   = path;
        self.id     = ClipId::new();

        Ok(())
    }
}
