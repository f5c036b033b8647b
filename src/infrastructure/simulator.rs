// SPDX-License-Identifier: MPL-2.0
//! Simulated watch peripherals for the desktop simulator and tests.
//!
//! [`SimulatedDevice`] implements every device port at once. Clones share the
//! same log, so a host can hand one clone to a screen and keep another to
//! inspect what was requested, even after the screen is gone.

use crate::application::port::{CallControl, Haptics, Power};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A request received by the simulated hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    StartRinging,
    StopRinging,
    BriefPulse(Duration),
    SleepDisabled,
    SleepEnabled,
    AcceptCall,
    RejectCall,
    MuteCall,
}

#[derive(Debug, Default)]
struct DeviceLog {
    events: Vec<DeviceEvent>,
    ringing: bool,
    sleep_inhibits: u32,
}

/// Shared-log stand-in for motor, system task and call service.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDevice {
    log: Rc<RefCell<DeviceLog>>,
}

impl SimulatedDevice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DeviceEvent> {
        self.log.borrow().events.clone()
    }

    /// Number of times `event` was requested.
    #[must_use]
    pub fn count(&self, event: DeviceEvent) -> usize {
        self.log.borrow().events.iter().filter(|e| **e == event).count()
    }

    #[must_use]
    pub fn is_ringing(&self) -> bool {
        self.log.borrow().ringing
    }

    /// Whether at least one sleep inhibit is outstanding.
    #[must_use]
    pub fn sleep_inhibited(&self) -> bool {
        self.log.borrow().sleep_inhibits > 0
    }

    fn record(&self, event: DeviceEvent) {
        tracing::trace!(?event, "simulated device request");
        self.log.borrow_mut().events.push(event);
    }
}

impl Haptics for SimulatedDevice {
    fn start_ringing(&mut self) {
        self.record(DeviceEvent::StartRinging);
        self.log.borrow_mut().ringing = true;
    }

    fn stop_ringing(&mut self) {
        self.record(DeviceEvent::StopRinging);
        self.log.borrow_mut().ringing = false;
    }

    fn run_brief_pulse(&mut self, duration: Duration) {
        self.record(DeviceEvent::BriefPulse(duration));
    }
}

impl Power for SimulatedDevice {
    fn request_sleep_disabled(&mut self) {
        self.record(DeviceEvent::SleepDisabled);
        self.log.borrow_mut().sleep_inhibits += 1;
    }

    fn request_sleep_enabled(&mut self) {
        self.record(DeviceEvent::SleepEnabled);
        let mut log = self.log.borrow_mut();
        if log.sleep_inhibits == 0 {
            tracing::warn!("sleep enabled without a matching inhibit");
        }
        log.sleep_inhibits = log.sleep_inhibits.saturating_sub(1);
    }
}

impl CallControl for SimulatedDevice {
    fn accept_call(&mut self) {
        self.record(DeviceEvent::AcceptCall);
    }

    fn reject_call(&mut self) {
        self.record(DeviceEvent::RejectCall);
    }

    fn mute_call(&mut self) {
        self.record(DeviceEvent::MuteCall);
    }
}
