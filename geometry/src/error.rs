/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

///
/// Errors that can occur while building, reducing, clipping or stroking geometry
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum GeometryError {
    /// A coordinate, sum or product does not fit in the fixed-point representation
    Limit,

    /// A matrix could not be inverted (or some other result is mathematically undefined)
    UndefinedResult,

    /// A parameter was out of range: a malformed dash pattern, an unknown cap or join, a negative radius
    InvalidArgument,

    /// The operation needs a current point but the path has none
    NoCurrentPoint,

    /// Storage for a new segment or rectangle could not be allocated
    OutOfMemory,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::GeometryError::*;

        match self {
            Limit               => write!(f, "coordinate out of fixed-point range"),
            UndefinedResult     => write!(f, "undefined result"),
            InvalidArgument     => write!(f, "invalid argument"),
            NoCurrentPoint      => write!(f, "no current point"),
            OutOfMemory         => write!(f, "out of memory"),
        }
    }
}

impl Error for GeometryError {}

impl From<TryReserveError> for GeometryError {
    #[inline]
    fn from(_: TryReserveError) -> GeometryError {
        GeometryError::OutOfMemory
    }
}
