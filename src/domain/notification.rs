// SPDX-License-Identifier: MPL-2.0
//! Notification records as handed out by a notification store.
//!
//! The core never owns the store's entries; it clones a [`Notification`]
//! whenever it needs to build a new view.

/// Identifier assigned by the store when a notification is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u32);

impl NotificationId {
    /// Wraps a raw store identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Notification category as announced by the phone.
///
/// Only [`Category::IncomingCall`] changes how a notification is presented;
/// every other category is shown as a plain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Unknown,
    SimpleAlert,
    Email,
    News,
    IncomingCall,
    MissedCall,
    Sms,
    VoiceMail,
    Schedule,
    HighPriorityAlert,
    InstantMessage,
}

impl Category {
    /// Returns true for the category that exposes call controls.
    #[must_use]
    pub const fn is_incoming_call(self) -> bool {
        matches!(self, Self::IncomingCall)
    }
}

/// A single stored notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    title: String,
    message: String,
    category: Category,
}

impl Notification {
    /// Creates a notification record.
    pub fn new(
        id: NotificationId,
        category: Category,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            category,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Raw title, possibly empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text. For incoming calls this carries the caller.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}
