// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the simulator.

use crate::domain::Gesture;
use crate::ui::notifications::ScreenMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Display refresh tick, only subscribed while the screen is open.
    Tick(Instant),
    /// Touch gesture, simulated from the keyboard.
    Gesture(Gesture),
    /// Forwarded from the notification screen widgets.
    Screen(ScreenMessage),
    /// Phone-side or system event injected from the keyboard.
    Simulate(Simulated),
}

/// Events the simulator can inject on behalf of the phone and the watch OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Simulated {
    /// A text notification arrives and raises the preview popup.
    NewMessage,
    /// An incoming call arrives and raises the preview popup.
    IncomingCall,
    /// The user opens the notification screen from the app menu.
    OpenFromMenu,
    /// The watch OS closes the screen (button press, screen switch).
    Close,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `WRIST_NOTIFY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
