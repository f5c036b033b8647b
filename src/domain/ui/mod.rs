// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod newtypes;
pub mod settings;

// Re-export commonly used types
pub use newtypes::{DismissDuration, PreviewTimeout};
pub use settings::ScreenSettings;
