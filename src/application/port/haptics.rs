// SPDX-License-Identifier: MPL-2.0
//! Vibration motor port definition.

use std::time::Duration;

/// Port for the vibration motor.
pub trait Haptics {
    /// Starts the repeating ring pattern used for incoming calls.
    fn start_ringing(&mut self);

    /// Stops the ring pattern. Must be harmless when nothing is ringing.
    fn stop_ringing(&mut self);

    /// Runs a single short vibration.
    fn run_brief_pulse(&mut self, duration: Duration);
}
