/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line_style::*;
use crate::dash::*;
use crate::error::*;

///
/// Works out the value that the join code compares against to decide if a miter is short enough
///
/// A miter is allowed when the angle `phi` between two segments has `1/sin(phi/2) <= limit`. The check value is
/// `tan(phi)` at that boundary, so that it can be compared directly against the segment directions.
///
fn miter_check(limit: f64) -> f64 {
    let limit_squared = limit * limit;

    if limit_squared > 1.9999 && limit_squared < 2.0001 {
        // The boundary angle is 90 degrees
        1.0e6
    } else {
        (limit_squared - 1.0).sqrt() * 2.0 / (limit_squared - 2.0)
    }
}

///
/// The line settings used when stroking a path
///
/// Widths and lengths are in user space.
///
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LineParams {
    half_width:     f64,
    cap:            LineCap,
    join:           LineJoin,
    curve_join:     Option<LineJoin>,
    miter_limit:    f64,
    miter_check:    f64,
    dot_length:     f64,
    dash:           Option<DashPattern>,
}

impl Default for LineParams {
    fn default() -> LineParams {
        LineParams {
            half_width:     0.5,
            cap:            LineCap::Butt,
            join:           LineJoin::Miter,
            curve_join:     None,
            miter_limit:    10.0,
            miter_check:    miter_check(10.0),
            dot_length:     0.0,
            dash:           None,
        }
    }
}

impl LineParams {
    /// The full width of the line
    #[inline]
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[inline]
    pub fn cap(&self) -> LineCap {
        self.cap
    }

    #[inline]
    pub fn join(&self) -> LineJoin {
        self.join
    }

    ///
    /// The join used between the pieces of a curve once it has been flattened
    ///
    /// Unless one has been set explicitly, round and no joins are kept and everything else becomes a bevel.
    ///
    pub fn curve_join(&self) -> LineJoin {
        match (self.curve_join, self.join) {
            (Some(join), _)         => join,
            (None, LineJoin::Round) => LineJoin::Round,
            (None, LineJoin::None)  => LineJoin::None,
            (None, _)               => LineJoin::Bevel,
        }
    }

    #[inline]
    pub fn miter_limit(&self) -> f64 {
        self.miter_limit
    }

    ///
    /// `tan` of the smallest angle between two segments that still gets a miter join
    ///
    #[inline]
    pub fn miter_check(&self) -> f64 {
        self.miter_check
    }

    ///
    /// The length of the line drawn for a zero-length subpath when the caps would not show it otherwise
    ///
    #[inline]
    pub fn dot_length(&self) -> f64 {
        self.dot_length
    }

    #[inline]
    pub fn dash(&self) -> Option<&DashPattern> {
        self.dash.as_ref()
    }

    ///
    /// Sets the line width (a negative width has the same effect as a positive one)
    ///
    pub fn with_width(mut self, width: f64) -> LineParams {
        self.half_width = width.abs() / 2.0;
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> LineParams {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> LineParams {
        self.join = join;
        self
    }

    ///
    /// Sets the join used between the pieces of a flattened curve (`None` to work it out from the line join)
    ///
    pub fn with_curve_join(mut self, curve_join: Option<LineJoin>) -> LineParams {
        self.curve_join = curve_join;
        self
    }

    ///
    /// Sets the miter limit, failing with `InvalidArgument` if it is less than 1
    ///
    pub fn set_miter_limit(&mut self, limit: f64) -> Result<(), GeometryError> {
        if !(limit >= 1.0) || !limit.is_finite() {
            return Err(GeometryError::InvalidArgument);
        }

        self.miter_limit = limit;
        self.miter_check = miter_check(limit);

        Ok(())
    }

    pub fn with_miter_limit(mut self, limit: f64) -> Result<LineParams, GeometryError> {
        self.set_miter_limit(limit)?;
        Ok(self)
    }

    pub fn with_dot_length(mut self, dot_length: f64) -> LineParams {
        self.dot_length = dot_length.abs();
        self
    }

    pub fn with_dash(mut self, dash: Option<DashPattern>) -> LineParams {
        self.dash = dash;
        self
    }
}
