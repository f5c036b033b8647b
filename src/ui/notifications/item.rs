// SPDX-License-Identifier: MPL-2.0
//! The notification currently on screen.
//!
//! A [`ViewItem`] is built whenever the displayed notification changes and
//! dropped when the next one replaces it. Its content never changes after
//! construction; only its dismiss animation and running flag evolve.

use super::call::{CallAction, CallDispatcher};
use super::dismiss::DismissAnimation;
use crate::application::port::{CallControl, Haptics};
use crate::domain::ui::DismissDuration;
use crate::domain::{Category, Notification, Tick};

/// Title shown when a notification has none, and on the empty state.
pub const FALLBACK_TITLE: &str = "Notification";

/// Body of the empty-state placeholder.
pub const EMPTY_MESSAGE: &str = "No notification to display";

/// Heading printed above the caller on incoming calls.
pub const CALL_HEADING: &str = "Incoming call from";

/// Render-ready snapshot of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    title: String,
    body: String,
    category: Category,
    /// 1-based position, 0 for the empty state.
    position: usize,
    total: usize,
}

impl ViewModel {
    /// Builds the snapshot for `notification` shown at `position` of `total`.
    ///
    /// Titles are single-line on the watch, so line breaks become spaces.
    #[must_use]
    pub fn from_notification(notification: &Notification, position: usize, total: usize) -> Self {
        let title = if notification.title().is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            notification.title().replace('\n', " ")
        };
        Self {
            title,
            body: notification.message().to_string(),
            category: notification.category(),
            position,
            total,
        }
    }

    /// The "nothing to show" placeholder.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            body: EMPTY_MESSAGE.to_string(),
            category: Category::default(),
            position: 0,
            total: 0,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Message text, or the caller for incoming calls.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.position == 0
    }

    /// Position counter as printed in the top-right corner, e.g. `2/5`.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{}/{}", self.position, self.total)
    }
}

/// What the user can do with the item besides swiping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordances {
    PlainMessage,
    IncomingCall(CallDispatcher),
}

impl Affordances {
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        if category.is_incoming_call() {
            Self::IncomingCall(CallDispatcher)
        } else {
            Self::PlainMessage
        }
    }

    #[must_use]
    pub fn has_call_buttons(self) -> bool {
        matches!(self, Self::IncomingCall(_))
    }
}

/// The live on-screen item.
#[derive(Debug, Clone)]
pub struct ViewItem {
    model: ViewModel,
    affordances: Affordances,
    dismiss: DismissAnimation,
    running: bool,
}

impl ViewItem {
    #[must_use]
    pub fn new(model: ViewModel, dismiss: DismissDuration) -> Self {
        let affordances = if model.is_empty_state() {
            Affordances::PlainMessage
        } else {
            Affordances::for_category(model.category())
        };
        Self {
            model,
            affordances,
            dismiss: DismissAnimation::new(dismiss),
            running: true,
        }
    }

    #[must_use]
    pub fn empty(dismiss: DismissDuration) -> Self {
        Self::new(ViewModel::empty(), dismiss)
    }

    #[must_use]
    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    #[must_use]
    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    /// False once a call button has been used.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.dismiss.is_running()
    }

    /// Slide-out progress in `[0, 1]`.
    #[must_use]
    pub fn dismiss_progress(&self, now: Tick) -> f32 {
        self.dismiss.progress(now)
    }

    pub(crate) fn start_dismiss(&mut self, now: Tick) {
        self.dismiss.start(now);
    }

    pub(crate) fn dismiss_elapsed(&mut self, now: Tick) -> bool {
        self.dismiss.elapsed(now)
    }

    /// Handles a call button press.
    ///
    /// Returns false, and does nothing, for items without call buttons.
    pub(crate) fn activate(
        &mut self,
        action: CallAction,
        haptics: &mut dyn Haptics,
        calls: &mut dyn CallControl,
    ) -> bool {
        match self.affordances {
            Affordances::IncomingCall(dispatcher) => {
                dispatcher.dispatch(action, haptics, calls);
                self.running = false;
                true
            }
            Affordances::PlainMessage => false,
        }
    }
}
