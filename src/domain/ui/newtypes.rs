// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for screen timing values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Preview Timeout Bounds
// =============================================================================

/// Preview popup timeout bounds, in milliseconds.
pub mod preview_bounds {
    /// Minimum preview timeout.
    pub const MIN_MS: u32 = 1_000;
    /// Maximum preview timeout.
    pub const MAX_MS: u32 = 60_000;
    /// Default preview timeout.
    pub const DEFAULT_MS: u32 = 7_000;
}

/// Dismiss slide-out bounds, in milliseconds.
pub mod dismiss_bounds {
    /// Minimum slide-out length.
    pub const MIN_MS: u32 = 50;
    /// Maximum slide-out length.
    pub const MAX_MS: u32 = 2_000;
    /// Default slide-out length.
    pub const DEFAULT_MS: u32 = 200;
}

// =============================================================================
// PreviewTimeout
// =============================================================================

/// How long a preview popup stays on screen without interaction.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use wrist_notify::domain::ui::PreviewTimeout;
///
/// let timeout = PreviewTimeout::new(5_000);
/// assert_eq!(timeout.value(), 5_000);
///
/// // Values outside range are clamped
/// let too_high = PreviewTimeout::new(600_000);
/// assert_eq!(too_high.value(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTimeout(u32);

impl PreviewTimeout {
    /// Creates a new preview timeout, clamping to the valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(preview_bounds::MIN_MS, preview_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PreviewTimeout {
    fn default() -> Self {
        Self(preview_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// DismissDuration
// =============================================================================

/// Length of the slide-out played when a notification is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDuration(u32);

impl DismissDuration {
    /// Creates a new slide-out length, clamping to the valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(dismiss_bounds::MIN_MS, dismiss_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the slide-out length as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for DismissDuration {
    fn default() -> Self {
        Self(dismiss_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // PreviewTimeout tests
    // -------------------------------------------------------------------------

    #[test]
    fn preview_timeout_clamps_to_valid_range() {
        assert_eq!(PreviewTimeout::new(0).value(), preview_bounds::MIN_MS);
        assert_eq!(PreviewTimeout::new(u32::MAX).value(), preview_bounds::MAX_MS);
        assert_eq!(PreviewTimeout::new(12_000).value(), 12_000);
    }

    #[test]
    fn preview_timeout_default() {
        assert_eq!(PreviewTimeout::default().value(), preview_bounds::DEFAULT_MS);
    }

    // -------------------------------------------------------------------------
    // DismissDuration tests
    // -------------------------------------------------------------------------

    #[test]
    fn dismiss_duration_clamps() {
        assert_eq!(DismissDuration::new(0).value(), dismiss_bounds::MIN_MS);
        assert_eq!(DismissDuration::new(10_000).value(), dismiss_bounds::MAX_MS);
        assert_eq!(
            DismissDuration::default().as_duration(),
            Duration::from_millis(200)
        );
    }
}
