// SPDX-License-Identifier: MPL-2.0
//! Countdown bar shown at the top of a preview popup.
//!
//! The bar starts at the full screen width and shrinks by one pixel every
//! `timeout / width` milliseconds. When nothing is left the popup expires.

use crate::domain::ui::PreviewTimeout;
use crate::domain::Tick;

/// State of the countdown at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Bar length still visible, in pixels.
    Remaining(u16),
    Expired,
}

/// Polled preview timeout tracker.
#[derive(Debug, Clone)]
pub struct TimeoutBar {
    started_at: Tick,
    timeout: PreviewTimeout,
    width: u16,
}

impl TimeoutBar {
    #[must_use]
    pub fn new(started_at: Tick, timeout: PreviewTimeout, width: u16) -> Self {
        Self {
            started_at,
            timeout,
            width: width.max(1),
        }
    }

    /// Milliseconds represented by one pixel of bar.
    fn ms_per_pixel(&self) -> u64 {
        (u64::from(self.timeout.value()) / u64::from(self.width)).max(1)
    }

    /// Computes the bar length at `now`.
    #[must_use]
    pub fn poll(&self, now: Tick) -> Countdown {
        let elapsed_ms = u64::try_from(now.since(self.started_at).as_millis()).unwrap_or(u64::MAX);
        let consumed = elapsed_ms / self.ms_per_pixel();
        match u64::from(self.width).checked_sub(consumed) {
            Some(remaining) if remaining > 0 => {
                Countdown::Remaining(u16::try_from(remaining).unwrap_or(self.width))
            }
            _ => Countdown::Expired,
        }
    }
}
