// SPDX-License-Identifier: MPL-2.0
//! Timing and geometry a notification screen runs with.

use super::newtypes::{DismissDuration, PreviewTimeout};
use std::time::Duration;

/// Built-in screen values used when nothing else is configured.
pub mod screen_defaults {
    /// Vibration length for non-call previews, in milliseconds.
    pub const BRIEF_PULSE_MS: u32 = 35;
    /// Horizontal resolution of the watch screen, in pixels.
    pub const SCREEN_WIDTH: u16 = 240;
}

/// Resolved settings handed to a screen when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSettings {
    pub preview_timeout: PreviewTimeout,
    pub dismiss: DismissDuration,
    pub brief_pulse: Duration,
    /// Horizontal resolution; the countdown bar spans it.
    pub screen_width: u16,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            preview_timeout: PreviewTimeout::default(),
            dismiss: DismissDuration::default(),
            brief_pulse: Duration::from_millis(u64::from(screen_defaults::BRIEF_PULSE_MS)),
            screen_width: screen_defaults::SCREEN_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_newtype_defaults() {
        let settings = ScreenSettings::default();
        assert_eq!(settings.preview_timeout, PreviewTimeout::default());
        assert_eq!(settings.dismiss.value(), 200);
        assert_eq!(settings.brief_pulse, Duration::from_millis(35));
        assert_eq!(settings.screen_width, 240);
    }
}
