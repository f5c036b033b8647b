// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the simulator.
//!
//! The desktop keyboard stands in for the touch panel and for the phone:
//!
//! | Key            | Event                      |
//! |----------------|----------------------------|
//! | Arrow keys     | Swipe in that direction    |
//! | Space          | Tap                        |
//! | `N`            | New text notification      |
//! | `C`            | Incoming call              |
//! | `O`            | Open screen from the menu  |
//! | Escape         | Close the screen           |

use super::message::Simulated;
use super::Message;
use crate::domain::Gesture;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes keyboard presses nobody else captured.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => message_for_key(&key),
            _ => None,
        }
    })
}

/// Display refresh tick, running only while the screen is open.
pub fn create_tick_subscription(screen_open: bool, period: Duration) -> Subscription<Message> {
    if screen_open {
        time::every(period).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a key to the gesture or injected event it simulates.
pub fn message_for_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowUp) => Some(Message::Gesture(Gesture::SwipeUp)),
        Key::Named(Named::ArrowDown) => Some(Message::Gesture(Gesture::SwipeDown)),
        Key::Named(Named::ArrowLeft) => Some(Message::Gesture(Gesture::SwipeLeft)),
        Key::Named(Named::ArrowRight) => Some(Message::Gesture(Gesture::SwipeRight)),
        Key::Named(Named::Space) => Some(Message::Gesture(Gesture::Tap)),
        Key::Named(Named::Escape) => Some(Message::Simulate(Simulated::Close)),
        Key::Character(c) => match c.as_str() {
            "n" | "N" => Some(Message::Simulate(Simulated::NewMessage)),
            "c" | "C" => Some(Message::Simulate(Simulated::IncomingCall)),
            "o" | "O" => Some(Message::Simulate(Simulated::OpenFromMenu)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(key: Key) -> Option<Gesture> {
        match message_for_key(&key) {
            Some(Message::Gesture(gesture)) => Some(gesture),
            _ => None,
        }
    }

    fn simulated(key: Key) -> Option<Simulated> {
        match message_for_key(&key) {
            Some(Message::Simulate(event)) => Some(event),
            _ => None,
        }
    }

    #[test]
    fn arrows_map_to_swipes() {
        assert_eq!(gesture(Key::Named(Named::ArrowUp)), Some(Gesture::SwipeUp));
        assert_eq!(gesture(Key::Named(Named::ArrowDown)), Some(Gesture::SwipeDown));
        assert_eq!(gesture(Key::Named(Named::ArrowLeft)), Some(Gesture::SwipeLeft));
        assert_eq!(gesture(Key::Named(Named::ArrowRight)), Some(Gesture::SwipeRight));
        assert_eq!(gesture(Key::Named(Named::Space)), Some(Gesture::Tap));
    }

    #[test]
    fn letters_inject_events() {
        assert_eq!(simulated(Key::Character("n".into())), Some(Simulated::NewMessage));
        assert_eq!(simulated(Key::Character("C".into())), Some(Simulated::IncomingCall));
        assert_eq!(simulated(Key::Character("o".into())), Some(Simulated::OpenFromMenu));
        assert_eq!(simulated(Key::Named(Named::Escape)), Some(Simulated::Close));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(message_for_key(&Key::Character("x".into())).is_none());
        assert!(message_for_key(&Key::Named(Named::Enter)).is_none());
    }
}
