// SPDX-License-Identifier: MPL-2.0
//! Classified touch gestures delivered by the input layer.

/// Gesture recognised by the touch controller.
///
/// Decoding raw touch samples happens upstream; the notification screen only
/// ever sees one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Tap,
    DoubleTap,
    LongTap,
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,
}

impl Gesture {
    /// All gestures, in declaration order.
    pub const ALL: [Gesture; 7] = [
        Gesture::Tap,
        Gesture::DoubleTap,
        Gesture::LongTap,
        Gesture::SwipeUp,
        Gesture::SwipeDown,
        Gesture::SwipeLeft,
        Gesture::SwipeRight,
    ];
}
