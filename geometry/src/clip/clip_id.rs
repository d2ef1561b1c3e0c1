/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::atomic::{AtomicUsize, Ordering};

///
/// Identifies the region covered by a clip path
///
/// Every change to a clip region allocates a new ID, so two clip paths with the same ID are known to cover
/// the same area. Changes to how the region is represented keep the ID.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClipId(pub(crate) usize);

impl ClipId {
    ///
    /// Creates a new clip ID (unique within this process)
    ///
    pub fn new() -> ClipId {
        static NEXT_VALUE: AtomicUsize = AtomicUsize::new(1);

        ClipId(NEXT_VALUE.fetch_add(1, Ordering::Relaxed))
    }
}
