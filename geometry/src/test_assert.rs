/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//
// `test_assert!` checks internal invariants (valid bounding boxes, normalized clip lists, monotonic
// curve pieces) when running tests or when the `extra_checks` feature is on, and costs nothing otherwise.
//

#[cfg(not(any(test, feature = "extra_checks")))]
macro_rules! test_assert {
    ($($arg:tt)*) => {{}};
}

#[cfg(any(test, feature = "extra_checks"))]
macro_rules! test_assert {
    ($cond:expr $(,)?) => {{
        assert!($cond, "geometry invariant failed: {}", stringify!($cond));
    }};
    ($cond:expr, $($arg:tt)+) => {{
        assert!($cond, $($arg)+);
    }};
}
