/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;

use std::convert::TryFrom;

///
/// How the ends of an open subpath are drawn
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum LineCap {
    /// The stroke stops at the end point
    #[default]
    Butt,

    /// A semicircle centred on the end point
    Round,

    /// The stroke continues for half the line width past the end point
    Square,

    /// A triangle with its apex half the line width past the end point (not available from PostScript)
    Triangle,
}

///
/// How two segments of a stroke are connected
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum LineJoin {
    /// The outer edges are extended until they meet, falling back to a bevel past the miter limit
    #[default]
    Miter,

    /// A circular arc around the shared point
    Round,

    /// The outer corners are connected with a straight line
    Bevel,

    /// No join: each segment just has butt ends
    None,

    /// A triangle with its apex past the outer corners
    Triangle,
}

impl TryFrom<i32> for LineCap {
    type Error = GeometryError;

    ///
    /// Converts a PostScript `setlinecap` value (Triangle is 3)
    ///
    fn try_from(code: i32) -> Result<LineCap, GeometryError> {
        match code {
            0 => Ok(LineCap::Butt),
            1 => Ok(LineCap::Round),
            2 => Ok(LineCap::Square),
            3 => Ok(LineCap::Triangle),
            _ => Err(GeometryError::InvalidArgument),
        }
    }
}

impl From<LineCap> for i32 {
    fn from(cap: LineCap) -> i32 {
        match cap {
            LineCap::Butt       => 0,
            LineCap::Round      => 1,
            LineCap::Square     => 2,
            LineCap::Triangle   => 3,
        }
    }
}

impl TryFrom<i32> for LineJoin {
    type Error = GeometryError;

    ///
    /// Converts a PostScript `setlinejoin` value (None is 3 and Triangle is 4)
    ///
    fn try_from(code: i32) -> Result<LineJoin, GeometryError> {
        match code {
            0 => Ok(LineJoin::Miter),
            1 => Ok(LineJoin::Round),
            2 => Ok(LineJoin::Bevel),
            3 => Ok(LineJoin::None),
            4 => Ok(LineJoin::Triangle),
            _ => Err(GeometryError::InvalidArgument),
        }
    }
}

impl From<LineJoin> for i32 {
    fn from(join: LineJoin) -> i32 {
        match join {
            LineJoin::Miter     => 0,
            LineJoin::Round     => 1,
            LineJoin::Bevel     => 2,
            LineJoin::None      => 3,
            LineJoin::Triangle  => 4,
        }
    }
}
