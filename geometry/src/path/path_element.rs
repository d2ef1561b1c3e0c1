/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use super::segment::*;
use crate::geo::*;
use crate::error::*;

///
/// An element produced by enumerating a path
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PathElement {
    MoveTo(FixedPoint),
    LineTo(FixedPoint, SegmentNotes),
    CurveTo(FixedPoint, FixedPoint, FixedPoint, SegmentNotes),
    ClosePath,
}

impl From<&Segment> for PathElement {
    fn from(segment: &Segment) -> PathElement {
        match *segment {
            Segment::Start { at }                   => PathElement::MoveTo(at),
            Segment::Line { to, notes }             => PathElement::LineTo(to, notes),
            Segment::Curve { cp1, cp2, to, notes }  => PathElement::CurveTo(cp1, cp2, to, notes),
            Segment::Close { .. }                   => PathElement::ClosePath,
        }
    }
}

impl Path {
    ///
    /// Enumerates the elements of this path in order, including a trailing moveto
    ///
    pub fn elements(&self) -> impl '_ + Iterator<Item = PathElement> {
        let trailing_move = if self.state == SubpathState::MovePending {
            self.position.map(PathElement::MoveTo)
        } else {
            None
        };

        self.storage.subpaths.iter()
            .flat_map(|subpath| subpath.segments().iter().map(PathElement::from))
            .chain(trailing_move)
    }

    ///
    /// Builds a path from a sequence of elements
    ///
    pub fn from_elements<Elements: IntoIterator<Item = PathElement>>(elements: Elements) -> Result<Path, GeometryError> {
        let mut path = Path::new();

        for element in elements {
            match element {
                PathElement::MoveTo(point)                      => path.add_point(point)?,
                PathElement::LineTo(point, notes)               => path.add_line_notes(point, notes)?,
                PathElement::CurveTo(cp1, cp2, point, notes)    => path.add_curve_notes(cp1, cp2, point, notes)?,
                PathElement::ClosePath                          => path.close_subpath()?,
            }
        }

        Ok(path)
    }
}
