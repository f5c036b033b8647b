// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`input`]: Classified touch gestures ([`Gesture`](input::Gesture))
//! - [`notification`]: Store records ([`Notification`](notification::Notification),
//!   [`Category`](notification::Category))
//! - [`tick`]: Monotonic timing ([`Tick`](tick::Tick))
//! - [`ui`]: UI value objects ([`PreviewTimeout`](ui::newtypes::PreviewTimeout),
//!   [`DismissDuration`](ui::newtypes::DismissDuration),
//!   [`ScreenSettings`](ui::settings::ScreenSettings))

pub mod input;
pub mod notification;
pub mod tick;
pub mod ui;

pub use input::Gesture;
pub use notification::{Category, Notification, NotificationId};
pub use tick::Tick;
