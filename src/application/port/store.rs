// SPDX-License-Identifier: MPL-2.0
//! Notification store port definition.
//!
//! The store keeps notifications ordered newest first: index `0` is the most
//! recent entry, index `count() - 1` the oldest. "Next" means newer and
//! "previous" means older, matching the swipe directions on the watch.

use crate::domain::Notification;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// NotificationStore Trait
// =============================================================================

/// Port for the ordered, bounded notification collection.
///
/// Lookups never fail: an out-of-range index or an empty store yields `None`.
pub trait NotificationStore {
    /// Clears the "new notification" marker shown on the watch face.
    fn clear_new_flag(&mut self);

    /// Returns the most recent notification.
    fn most_recent(&self) -> Option<Notification>;

    /// Returns the notification at `index` (0 = most recent).
    fn at(&self, index: usize) -> Option<Notification>;

    /// Returns the notification newer than the one at `index`.
    fn next(&self, index: usize) -> Option<Notification>;

    /// Returns the notification older than the one at `index`.
    fn previous(&self, index: usize) -> Option<Notification>;

    /// Number of notifications currently stored.
    fn count(&self) -> usize;

    /// Removes the notification at `index`. Out-of-range indices are ignored.
    fn dismiss(&mut self, index: usize);
}

/// Lets the host keep a handle on a store it lends to a screen.
impl<S: NotificationStore> NotificationStore for Rc<RefCell<S>> {
    fn clear_new_flag(&mut self) {
        self.borrow_mut().clear_new_flag();
    }

    fn most_recent(&self) -> Option<Notification> {
        self.borrow().most_recent()
    }

    fn at(&self, index: usize) -> Option<Notification> {
        self.borrow().at(index)
    }

    fn next(&self, index: usize) -> Option<Notification> {
        self.borrow().next(index)
    }

    fn previous(&self, index: usize) -> Option<Notification> {
        self.borrow().previous(index)
    }

    fn count(&self) -> usize {
        self.borrow().count()
    }

    fn dismiss(&mut self, index: usize) {
        self.borrow_mut().dismiss(index);
    }
}
