// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory notification store.
//!
//! Mirrors the watch firmware's notification buffer: a fixed number of
//! slots, newest first, the oldest entry silently dropped when a new one
//! arrives on a full buffer.

use crate::application::port::NotificationStore;
use crate::config::DEFAULT_STORE_CAPACITY;
use crate::domain::{Category, Notification, NotificationId};
use std::collections::VecDeque;

/// Ring of the most recent notifications.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Stored notifications, most recent first.
    entries: VecDeque<Notification>,
    capacity: usize,
    next_id: u32,
    has_new: bool,
}

impl MemoryStore {
    /// Creates an empty store holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
            has_new: false,
        }
    }

    /// Inserts a notification as the most recent one.
    ///
    /// Returns the assigned identifier. Evicts the oldest entry when full.
    pub fn push(
        &mut self,
        category: Category,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        let id = NotificationId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::debug!(id = evicted.id().value(), "store full, dropping oldest");
            }
        }
        self.entries
            .push_front(Notification::new(id, category, title, message));
        self.has_new = true;
        id
    }

    /// Whether a notification arrived since the flag was last cleared.
    #[must_use]
    pub fn has_new(&self) -> bool {
        self.has_new
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_STORE_CAPACITY)
    }
}

impl NotificationStore for MemoryStore {
    fn clear_new_flag(&mut self) {
        self.has_new = false;
    }

    fn most_recent(&self) -> Option<Notification> {
        self.entries.front().cloned()
    }

    fn at(&self, index: usize) -> Option<Notification> {
        self.entries.get(index).cloned()
    }

    fn next(&self, index: usize) -> Option<Notification> {
        index.checked_sub(1).and_then(|newer| self.at(newer))
    }

    fn previous(&self, index: usize) -> Option<Notification> {
        index.checked_add(1).and_then(|older| self.at(older))
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn dismiss(&mut self, index: usize) {
        if let Some(removed) = self.entries.remove(index) {
            tracing::debug!(index, id = removed.id().value(), "notification dismissed");
        }
    }
}
