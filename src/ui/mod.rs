// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - Notification browsing screen and its state machine
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
