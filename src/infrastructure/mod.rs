// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, used by the desktop simulator and the test suite.
//!
//! # Available Adapters
//!
//! - [`memory_store`]: Bounded notification buffer (implements [`NotificationStore`])
//! - [`simulator`]: Logged motor, power and call service (implements [`Haptics`],
//!   [`Power`] and [`CallControl`])
//!
//! [`NotificationStore`]: crate::application::port::NotificationStore
//! [`Haptics`]: crate::application::port::Haptics
//! [`Power`]: crate::application::port::Power
//! [`CallControl`]: crate::application::port::CallControl

pub mod memory_store;
pub mod simulator;

// Re-export main types for convenience
pub use memory_store::MemoryStore;
pub use simulator::{DeviceEvent, SimulatedDevice};
