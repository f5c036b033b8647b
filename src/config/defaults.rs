// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Preview timeout, dismiss slide-out, vibration, refresh tick
//! - **Display**: Simulated screen geometry
//! - **Store**: Notification buffer size

use crate::domain::ui::newtypes::{dismiss_bounds, preview_bounds};
use crate::domain::ui::settings::screen_defaults;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default lifetime of a preview popup without interaction (in milliseconds).
pub const DEFAULT_PREVIEW_TIMEOUT_MS: u32 = preview_bounds::DEFAULT_MS;

/// Default length of the dismiss slide-out (in milliseconds).
pub const DEFAULT_DISMISS_ANIMATION_MS: u32 = dismiss_bounds::DEFAULT_MS;

/// Vibration length for non-call previews (in milliseconds).
pub const DEFAULT_BRIEF_PULSE_MS: u32 = screen_defaults::BRIEF_PULSE_MS;

/// Longest brief pulse accepted from a config file (in milliseconds).
pub const MAX_BRIEF_PULSE_MS: u32 = 1_000;

/// Period of the display refresh tick (in milliseconds).
pub const DEFAULT_REFRESH_PERIOD_MS: u32 = 20;

/// Refresh period bounds (in milliseconds).
pub const MIN_REFRESH_PERIOD_MS: u32 = 5;
pub const MAX_REFRESH_PERIOD_MS: u32 = 500;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Horizontal resolution of the watch screen (in pixels).
pub const DEFAULT_SCREEN_WIDTH: u16 = screen_defaults::SCREEN_WIDTH;

/// Vertical resolution of the watch screen (in pixels).
pub const DEFAULT_SCREEN_HEIGHT: u16 = 240;

/// Smallest screen edge accepted from a config file (in pixels).
pub const MIN_SCREEN_EDGE: u16 = 120;

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Number of notifications kept by the in-memory store.
pub const DEFAULT_STORE_CAPACITY: usize = 5;

/// Largest store accepted from a config file.
pub const MAX_STORE_CAPACITY: usize = 64;
