// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that device adapters implement.
//! These traits use only domain types, ensuring the notification screen
//! remains independent of concrete drivers.
//!
//! # Available Ports
//!
//! - [`store`]: Ordered notification storage with boundary-safe lookups
//! - [`haptics`]: Vibration motor (ringing pattern, brief pulse)
//! - [`power`]: System sleep inhibit requests
//! - [`call`]: Phone call control over the companion link
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no BLE types)
//! - Everything is called from the single UI thread, so no `Send` bounds
//! - Service requests are fire-and-forget; none of them can fail from the
//!   screen's point of view

pub mod call;
pub mod haptics;
pub mod power;
pub mod store;

// Re-export main types for convenience
pub use call::CallControl;
pub use haptics::Haptics;
pub use power::Power;
pub use store::NotificationStore;

/// The device services a notification screen talks to besides the store.
pub struct Peripherals {
    pub haptics: Box<dyn Haptics>,
    pub power: Box<dyn Power>,
    pub calls: Box<dyn CallControl>,
}

impl Peripherals {
    pub fn new(
        haptics: impl Haptics + 'static,
        power: impl Power + 'static,
        calls: impl CallControl + 'static,
    ) -> Self {
        Self {
            haptics: Box::new(haptics),
            power: Box::new(power),
            calls: Box::new(calls),
        }
    }
}

impl std::fmt::Debug for Peripherals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Peripherals").finish_non_exhaustive()
    }
}
