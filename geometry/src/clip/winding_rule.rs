/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Decides which regions of a self-intersecting path are inside it
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum WindingRule {
    /// Inside where the path winds around a point a non-zero number of times
    NonZero,

    /// Inside where a ray from the point crosses the path an odd number of times
    EvenOdd,
}

impl Default for WindingRule {
    fn default() -> WindingRule {
        WindingRule::NonZero
    }
}

impl WindingRule {
    ///
    /// True if a point with the specified winding count is inside a shape using this rule
    ///
    #[inline]
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            WindingRule::NonZero    => winding != 0,
            WindingRule::EvenOdd    => (winding & 1) != 0,
        }
    }
}
