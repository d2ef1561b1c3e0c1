/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;

///
/// A dash pattern: alternating lengths of ink and gap, measured in user space, with a starting offset
///
/// The phase at the start of each subpath is worked out once, when the pattern is created. A pattern with
/// an odd number of entries repeats twice per period, with ink and gap swapped the second time around.
///
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DashPattern {
    pattern:        Vec<f64>,
    offset:         f64,
    adapt:          bool,

    pattern_length: f64,
    init_ink_on:    bool,
    init_index:     usize,
    init_dist_left: f64,
}

impl DashPattern {
    ///
    /// Creates a dash pattern
    ///
    /// Fails with `InvalidArgument` if any entry is negative (or not a finite number), or if the entries are
    /// all zero. An empty pattern is valid and describes a solid line. When `adapt` is set, the pattern is
    /// stretched or squashed along each segment so that a whole number of repetitions fits it exactly.
    ///
    pub fn new(pattern: &[f64], offset: f64, adapt: bool) -> Result<DashPattern, GeometryError> {
        if !offset.is_finite() || pattern.iter().any(|length| !length.is_finite() || *length < 0.0) {
            return Err(GeometryError::InvalidArgument);
        }

        let sum: f64 = pattern.iter().sum();
        if !pattern.is_empty() && sum <= 0.0 {
            return Err(GeometryError::InvalidArgument);
        }

        let pattern_length = if pattern.len() % 2 == 1 { sum * 2.0 } else { sum };

        let mut stored = vec![];
        stored.try_reserve(pattern.len())?;
        stored.extend_from_slice(pattern);

        let mut dash = DashPattern {
            pattern:        stored,
            offset,
            adapt,
            pattern_length,
            init_ink_on:    true,
            init_index:     0,
            init_dist_left: 0.0,
        };

        dash.find_initial_phase();
        Ok(dash)
    }

    ///
    /// Works out where in the pattern the offset lands
    ///
    fn find_initial_phase(&mut self) {
        if self.pattern.is_empty() {
            return;
        }

        let mut distance    = self.offset.rem_euclid(self.pattern_length);
        let mut ink_on      = true;
        let mut index       = 0;

        // The distance is less than one period, so this passes over each entry at most twice
        for _ in 0..(self.pattern.len() * 2) {
            if distance < self.pattern[index] {
                break;
            }

            distance    -= self.pattern[index];
            ink_on      = !ink_on;
            index       = (index + 1) % self.pattern.len();
        }

        self.init_ink_on    = ink_on;
        self.init_index     = index;
        self.init_dist_left = (self.pattern[index] - distance).max(0.0);
    }

    #[inline]
    pub fn pattern(&self) -> &[f64] {
        &self.pattern
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn adapt(&self) -> bool {
        self.adapt
    }

    /// True if this pattern has no entries (lines are drawn solid)
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.pattern.is_empty()
    }

    ///
    /// The distance covered by one full period of the pattern
    ///
    #[inline]
    pub fn pattern_length(&self) -> f64 {
        self.pattern_length
    }

    /// Whether ink is on at the start of a subpath
    #[inline]
    pub fn init_ink_on(&self) -> bool {
        self.init_ink_on
    }

    /// The pattern entry in effect at the start of a subpath
    #[inline]
    pub fn init_index(&self) -> usize {
        self.init_index
    }

    /// The distance left in the starting pattern entry
    #[inline]
    pub fn init_dist_left(&self) -> f64 {
        self.init_dist_left
    }
}
