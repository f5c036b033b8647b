// SPDX-License-Identifier: MPL-2.0
//! Monotonic tick counter used for all screen timing.
//!
//! Everything time-dependent in the notification screen is polled: a start
//! tick is captured once and every later decision is computed from the
//! difference to the current tick. Missed or late polls therefore never fire
//! anything early.

use std::time::Duration;

/// Milliseconds since an arbitrary, fixed epoch (usually boot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, saturating at zero if the clock is
    /// sampled out of order.
    #[must_use]
    pub fn since(self, earlier: Tick) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}
