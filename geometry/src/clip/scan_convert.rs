/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::clip_rect::*;
use super::clip_list::*;
use super::clip_accumulator::*;
use super::winding_rule::*;
use crate::geo::*;
use crate::path::*;
use crate::error::*;

use log::*;

///
/// A non-horizontal polygon edge, ordered so that `y0 < y1`
///
#[derive(Copy, Clone, Debug)]
struct ScanEdge {
    x0:         f64,
    y0:         f64,
    x1:         f64,
    y1:         f64,

    /// +1 if the path runs down this edge, -1 if it runs up it
    direction:  i32,
}

impl ScanEdge {
    fn new(from: FixedPoint, to: FixedPoint) -> Option<ScanEdge> {
        let (from, to) = (from.to_coord2(), to.to_coord2());

        if from.1 < to.1 {
            Some(ScanEdge { x0: from.0, y0: from.1, x1: to.0, y1: to.1, direction: 1 })
        } else if from.1 > to.1 {
            Some(ScanEdge { x0: to.0, y0: to.1, x1: from.0, y1: from.1, direction: -1 })
        } else {
            None
        }
    }

    #[inline]
    fn x_at(&self, y: f64) -> f64 {
        self.x0 + (y - self.y0) * (self.x1 - self.x0) / (self.y1 - self.y0)
    }
}

///
/// Collects the edges of every subpath of a line-only path, closing each subpath
///
fn path_edges(path: &Path) -> Result<Vec<ScanEdge>, GeometryError> {
    let mut edges = vec![];

    for subpath in path.subpaths() {
        edges.try_reserve(subpath.segments().len())?;

        let start           = subpath.start_point();
        let mut last_point  = start;

        for segment in subpath.segments()[1..].iter() {
            let to = segment.end_point();
            edges.extend(ScanEdge::new(last_point, to));
            last_point = to;
        }

        edges.extend(ScanEdge::new(last_point, start));
    }

    Ok(edges)
}

///
/// The first pixel whose centre is at or after a position
///
#[inline]
fn first_pixel_after(x: f64) -> i32 {
    (x - 0.5).ceil().clamp(MIN_PIXEL as f64, MAX_PIXEL as f64) as i32
}

///
/// Finds the pixels whose centres are inside a path, using a winding rule
///
/// Curves are flattened first. When `limit` is set, only pixels inside that rectangle are considered.
///
pub fn scan_convert_path(path: &Path, rule: WindingRule, flatness: f64, limit: Option<&ClipRect>) -> Result<ClipList, GeometryError> {
    if path.has_curves() {
        let flat = path.flatten(flatness, false)?;
        return scan_convert_path(&flat, rule, flatness, limit);
    }

    let mut edges = path_edges(path)?;
    if edges.is_empty() {
        return Ok(ClipList::new());
    }

    edges.sort_unstable_by(|a, b| a.y0.total_cmp(&b.y0));

    let bounds          = path.bounding_box()?;
    let mut row_start   = pixel_round(bounds.p.y);
    let mut row_end     = pixel_round(bounds.q.y);
    let mut col_start   = MIN_PIXEL;
    let mut col_end     = MAX_PIXEL;

    if let Some(limit) = limit {
        row_start   = row_start.max(limit.ymin);
        row_end     = row_end.min(limit.ymax);
        col_start   = limit.xmin;
        col_end     = limit.xmax;
    }

    trace!("Scan converting {} edges over rows {}..{}", edges.len(), row_start, row_end);

    let mut result      = ClipAccumulator::new();
    let mut active      = vec![];
    let mut crossings   = vec![];
    let mut next_edge   = 0;

    active.try_reserve(edges.len())?;
    crossings.try_reserve(edges.len())?;

    for row in row_start..row_end {
        let y = row as f64 + 0.5;

        while next_edge < edges.len() && edges[next_edge].y0 <= y {
            active.push(edges[next_edge]);
            next_edge += 1;
        }
        active.retain(|edge: &ScanEdge| edge.y1 > y);

        crossings.clear();
        crossings.extend(active.iter().filter(|edge| edge.y0 <= y).map(|edge| (edge.x_at(y), edge.direction)));
        crossings.sort_unstable_by(|a: &(f64, i32), b: &(f64, i32)| a.0.total_cmp(&b.0));

        // Walk the crossings from left to right, tracking the winding number
        let mut winding     = 0;
        let mut span_start  = None;

        for (x, direction) in crossings.iter() {
            let was_inside  = rule.is_inside(winding);
            winding         += direction;
            let is_inside   = rule.is_inside(winding);

            match (was_inside, is_inside, span_start) {
                (false, true, _)            => { span_start = Some(*x); }
                (true, false, Some(start))  => {
                    let xmin = first_pixel_after(start).max(col_start);
                    let xmax = first_pixel_after(*x).min(col_end);

                    result.add(ClipRect::new(xmin, row, xmax, row + 1))?;
                    span_start = None;
                }
                _                           => { }
            }
        }
    }

    result.finish()
}
