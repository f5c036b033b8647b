// SPDX-License-Identifier: MPL-2.0
//! Incoming call buttons and their dispatch to the phone.

use crate::application::port::{CallControl, Haptics};

/// The three buttons shown for an incoming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallAction {
    Accept,
    Reject,
    Mute,
}

impl CallAction {
    /// Buttons in on-screen order, left to right.
    pub const ALL: [CallAction; 3] = [CallAction::Accept, CallAction::Reject, CallAction::Mute];
}

/// Routes call button presses to the call-control service.
///
/// Only incoming-call items carry one, so plain messages cannot trigger
/// call control at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallDispatcher;

impl CallDispatcher {
    /// Stops the ring pattern, then forwards exactly one call request.
    pub fn dispatch(self, action: CallAction, haptics: &mut dyn Haptics, calls: &mut dyn CallControl) {
        haptics.stop_ringing();
        match action {
            CallAction::Accept => calls.accept_call(),
            CallAction::Reject => calls.reject_call(),
            CallAction::Mute => calls.mute_call(),
        }
        tracing::info!(?action, "call action dispatched");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::simulator::{DeviceEvent, SimulatedDevice};

    #[test]
    fn each_action_maps_to_its_request() {
        let expected = [
            (CallAction::Accept, DeviceEvent::AcceptCall),
            (CallAction::Reject, DeviceEvent::RejectCall),
            (CallAction::Mute, DeviceEvent::MuteCall),
        ];
        for (action, event) in expected {
            let mut haptics = SimulatedDevice::new();
            let mut calls = haptics.clone();
            CallDispatcher.dispatch(action, &mut haptics, &mut calls);
            assert_eq!(
                haptics.events(),
                vec![DeviceEvent::StopRinging, event],
                "{action:?}"
            );
        }
    }
}
