// Timestamp abstraction used to derive tick intervals for the actuator drivers
// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::fmt::Debug;

/// A monotonic point in time.
///
/// The controller itself never looks at the clock: it assumes a fixed sample interval owned by the
/// caller. Timestamps are only needed by helpers that must measure the actual interval between
/// calls, such as [`crate::relay::ClockedDutyCycleDriver`].
pub trait Timestamp: Copy + Debug + PartialOrd {
    /// Seconds elapsed from `earlier` to `self`. Saturates at zero if `earlier` is in the future.
    #[must_use]
    fn seconds_since(&self, earlier: Self) -> f64;
}

/// Milliseconds since an arbitrary epoch, e.g. a firmware tick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(pub u64);

impl Timestamp for Millis {
    fn seconds_since(&self, earlier: Self) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / 1e3
    }
}

/// Microseconds since an arbitrary epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Micros(pub u64);

impl Timestamp for Micros {
    fn seconds_since(&self, earlier: Self) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / 1e6
    }
}

/// Seconds since an arbitrary epoch, as a float
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Seconds(pub f64);

impl Timestamp for Seconds {
    fn seconds_since(&self, earlier: Self) -> f64 {
        let secs = self.0 - earlier.0;
        if secs > 0.0 {
            secs
        } else {
            0.0
        }
    }
}

#[cfg(feature = "std")]
mod std_instant {
    use super::Timestamp;

    /// Wraps `std::time::Instant` so it can drive the clocked helpers on hosted targets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct StdInstant(pub std::time::Instant);

    impl StdInstant {
        /// The current instant
        pub fn now() -> Self {
            StdInstant(std::time::Instant::now())
        }
    }

    impl Timestamp for StdInstant {
        fn seconds_since(&self, earlier: Self) -> f64 {
            self.0.saturating_duration_since(earlier.0).as_secs_f64()
        }
    }
}

#[cfg(feature = "std")]
pub use std_instant::StdInstant;
