// SPDX-License-Identifier: MPL-2.0
//! Notification browsing screen.
//!
//! Shows one notification at a time from a [`NotificationStore`], most recent
//! first. Swiping down walks to older notifications, swiping up back to newer
//! ones (and closes the screen past the newest), swiping right dismisses the
//! shown one with a short slide-out. Incoming calls get accept, reject and
//! mute buttons.
//!
//! # Components
//!
//! - [`controller`] - `Controller` state machine, driven by ticks and gestures
//! - [`item`] - `ViewItem`, the notification currently on screen
//! - [`dismiss`] - One-shot slide-out timer
//! - [`timeout`] - Preview countdown bar
//! - [`call`] - Call button actions
//! - [`view`] - Rendering
//!
//! # Usage
//!
//! ```
//! use wrist_notify::application::port::Peripherals;
//! use wrist_notify::domain::ui::ScreenSettings;
//! use wrist_notify::domain::{Category, Gesture, Tick};
//! use wrist_notify::infrastructure::{MemoryStore, SimulatedDevice};
//! use wrist_notify::ui::notifications::{Controller, Mode};
//!
//! let mut store = MemoryStore::default();
//! store.push(Category::Sms, "Alice", "Lunch?");
//!
//! let device = SimulatedDevice::new();
//! let peripherals = Peripherals::new(device.clone(), device.clone(), device);
//! let mut screen = Controller::new(
//!     store,
//!     peripherals,
//!     Mode::Normal,
//!     ScreenSettings::default(),
//!     Tick::ZERO,
//! );
//!
//! assert_eq!(screen.item().model().title(), "Alice");
//! assert!(!screen.handle_gesture(Gesture::SwipeUp, Tick::from_millis(20)));
//! assert!(!screen.is_running());
//! ```
//!
//! [`NotificationStore`]: crate::application::port::NotificationStore

pub mod call;
pub mod controller;
pub mod dismiss;
pub mod item;
pub mod timeout;
pub mod view;

pub use call::{CallAction, CallDispatcher};
pub use controller::{Controller, Mode, Transition};
pub use dismiss::DismissAnimation;
pub use item::{Affordances, ViewItem, ViewModel};
pub use timeout::{Countdown, TimeoutBar};
pub use view::{view, Message as ScreenMessage};
