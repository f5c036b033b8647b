// SPDX-License-Identifier: MPL-2.0
//! Notification screen state machine.
//!
//! The [`Controller`] owns the cursor into the store, the live [`ViewItem`]
//! and, in preview mode, the countdown bar. It is driven from one thread by
//! two entry points: [`Controller::refresh`] on every display tick and
//! [`Controller::handle_gesture`] for touch input. Call buttons come in
//! through [`Controller::activate`].
//!
//! The cursor counts from the most recent notification (`0`) towards older
//! ones. When the store shrinks under it, the cursor follows the same
//! notification rather than the same screen position.

use super::call::CallAction;
use super::item::{ViewItem, ViewModel};
use super::timeout::{Countdown, TimeoutBar};
use crate::application::port::{NotificationStore, Peripherals};
use crate::domain::ui::ScreenSettings;
use crate::domain::{Gesture, Notification, NotificationId, Tick};

/// How the screen was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing from the app menu.
    #[default]
    Normal,
    /// Popup raised by an arriving notification. Vibrates, keeps the
    /// display awake and closes itself after a timeout.
    Preview,
}

/// Direction of the full-screen refresh requested when the item changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Up,
    Down,
}

/// The notification browsing screen.
pub struct Controller<S: NotificationStore> {
    store: S,
    peripherals: Peripherals,
    settings: ScreenSettings,
    mode: Mode,
    item: ViewItem,
    /// Store identifier of the record on screen.
    shown: Option<NotificationId>,
    current_id: usize,
    valid_display: bool,
    running: bool,
    interacted: bool,
    /// Countdown bar, only while a preview has not been touched or expired.
    timeout: Option<TimeoutBar>,
    /// Whether this screen holds a sleep inhibit.
    sleep_inhibited: bool,
    transition: Option<Transition>,
}

impl<S: NotificationStore> Controller<S> {
    /// Opens the screen on the most recent notification.
    pub fn new(
        mut store: S,
        mut peripherals: Peripherals,
        mode: Mode,
        settings: ScreenSettings,
        now: Tick,
    ) -> Self {
        store.clear_new_flag();
        let latest = store.most_recent();

        let (item, valid_display) = match &latest {
            Some(notification) => (
                ViewItem::new(
                    ViewModel::from_notification(notification, 1, store.count()),
                    settings.dismiss,
                ),
                true,
            ),
            None => (ViewItem::empty(settings.dismiss), false),
        };

        let mut timeout = None;
        let mut sleep_inhibited = false;
        if mode == Mode::Preview {
            peripherals.power.request_sleep_disabled();
            sleep_inhibited = true;
            let is_call = latest
                .as_ref()
                .is_some_and(|n| n.category().is_incoming_call());
            if is_call {
                peripherals.haptics.start_ringing();
            } else {
                peripherals.haptics.run_brief_pulse(settings.brief_pulse);
            }
            timeout = Some(TimeoutBar::new(
                now,
                settings.preview_timeout,
                settings.screen_width,
            ));
        }

        tracing::debug!(
            ?mode,
            count = store.count(),
            valid_display,
            "notification screen opened"
        );

        Self {
            store,
            peripherals,
            settings,
            mode,
            item,
            shown: latest.as_ref().map(Notification::id),
            current_id: 0,
            valid_display,
            running: true,
            interacted: false,
            timeout,
            sleep_inhibited,
            transition: None,
        }
    }

    /// Periodic tick: advances the countdown, settles a finished dismissal
    /// and picks up a call button having closed the item.
    pub fn refresh(&mut self, now: Tick) {
        if let Some(bar) = &self.timeout {
            if bar.poll(now) == Countdown::Expired {
                tracing::debug!("preview timed out");
                self.running = false;
                self.release_alert();
            }
        }

        if self.item.dismiss_elapsed(now) {
            self.requery_current();
        }

        self.running = self.item.is_running() && self.running;
    }

    /// Feeds a touch gesture to the screen.
    ///
    /// Returns whether the gesture was consumed. An unhandled swipe up past
    /// the newest notification also stops the screen.
    pub fn handle_gesture(&mut self, gesture: Gesture, now: Tick) -> bool {
        if self.mode != Mode::Normal {
            if !self.interacted && gesture == Gesture::Tap {
                self.interacted = true;
                self.release_alert();
                tracing::debug!("preview interaction, countdown cancelled");
                return true;
            }
            return false;
        }

        // The current item is sliding out and the store already changed
        // under it; navigation resumes once refresh has replaced it.
        if self.item.is_dismissing()
            && matches!(
                gesture,
                Gesture::SwipeRight | Gesture::SwipeDown | Gesture::SwipeUp
            )
        {
            return true;
        }

        match gesture {
            Gesture::SwipeRight => self.dismiss_current(now),
            Gesture::SwipeDown => self.show_older(),
            Gesture::SwipeUp => self.show_newer(),
            _ => false,
        }
    }

    /// Handles a press on one of the item's call buttons.
    ///
    /// Returns false when the current item has no call buttons.
    pub fn activate(&mut self, action: CallAction) -> bool {
        let Peripherals { haptics, calls, .. } = &mut self.peripherals;
        self.item.activate(action, haptics.as_mut(), calls.as_mut())
    }

    fn dismiss_current(&mut self, now: Tick) -> bool {
        if !self.valid_display {
            return false;
        }
        if !self.resync_cursor() {
            tracing::debug!("shown notification was removed elsewhere, dismiss refused");
            self.requery_current();
            return false;
        }
        self.store.dismiss(self.current_id);
        if self.current_id > 0 && self.current_id == self.store.count() {
            // Dismissed the oldest one (5/5), step to the new oldest (4/4)
            self.current_id -= 1;
        }
        self.item.start_dismiss(now);
        tracing::debug!(
            current_id = self.current_id,
            remaining = self.store.count(),
            "dismiss started"
        );
        true
    }

    /// Moves the cursor back onto the record on screen after the store
    /// changed under it. Returns false when that record is gone.
    fn resync_cursor(&mut self) -> bool {
        let Some(shown) = self.shown else {
            return false;
        };
        let holds_shown = |index: usize| self.store.at(index).is_some_and(|n| n.id() == shown);
        if holds_shown(self.current_id) {
            return true;
        }
        let Some(index) = (0..self.store.count()).find(|&index| holds_shown(index)) else {
            return false;
        };
        tracing::debug!(from = self.current_id, to = index, "cursor resynced");
        self.current_id = index;
        true
    }

    /// Re-reads the record under the cursor, falling back to the most
    /// recent one, and shows it.
    fn requery_current(&mut self) {
        let mut shown = self.store.at(self.current_id);
        if shown.is_none() {
            shown = self.store.most_recent();
            self.current_id = 0;
        }
        self.valid_display = shown.is_some();
        if !self.valid_display {
            self.current_id = 0;
        }
        tracing::debug!(
            current_id = self.current_id,
            valid_display = self.valid_display,
            "cursor re-queried"
        );
        self.show(shown.as_ref(), Transition::Up);
    }

    fn show_older(&mut self) -> bool {
        let older = if self.valid_display {
            let older = self.store.previous(self.current_id);
            if older.is_some() {
                let last = self.store.count().saturating_sub(1);
                self.current_id = (self.current_id + 1).min(last);
            }
            older
        } else {
            self.current_id = 0;
            self.store.most_recent()
        };

        let Some(older) = older else {
            return true;
        };
        self.valid_display = true;
        self.show(Some(&older), Transition::Down);
        true
    }

    fn show_newer(&mut self) -> bool {
        let newer = if self.valid_display {
            self.store.next(self.current_id)
        } else {
            self.store.most_recent()
        };

        let Some(newer) = newer else {
            tracing::debug!("swiped past the newest notification, closing");
            self.running = false;
            return false;
        };
        self.valid_display = true;
        self.current_id = self.current_id.saturating_sub(1);
        self.show(Some(&newer), Transition::Up);
        true
    }

    /// Replaces the live item. The previous one is dropped here.
    fn show(&mut self, notification: Option<&Notification>, transition: Transition) {
        self.item = match notification {
            Some(notification) => ViewItem::new(
                ViewModel::from_notification(
                    notification,
                    self.current_id + 1,
                    self.store.count(),
                ),
                self.settings.dismiss,
            ),
            None => ViewItem::empty(self.settings.dismiss),
        };
        self.shown = notification.map(Notification::id);
        self.transition = Some(transition);
    }

    /// Stops the preview alert: ring pattern, sleep inhibit and countdown.
    /// Safe to call repeatedly; the inhibit is released once.
    fn release_alert(&mut self) {
        self.peripherals.haptics.stop_ringing();
        if std::mem::take(&mut self.sleep_inhibited) {
            self.peripherals.power.request_sleep_enabled();
        }
        self.timeout = None;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// False once the screen should be closed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Zero-based cursor, 0 being the most recent notification.
    #[must_use]
    pub fn current_id(&self) -> usize {
        self.current_id
    }

    /// Whether a real notification (not the placeholder) is shown.
    #[must_use]
    pub fn valid_display(&self) -> bool {
        self.valid_display
    }

    #[must_use]
    pub fn interacted(&self) -> bool {
        self.interacted
    }

    #[must_use]
    pub fn item(&self) -> &ViewItem {
        &self.item
    }

    #[must_use]
    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Countdown bar length at `now`, or `None` once it is detached.
    #[must_use]
    pub fn timeout_remaining(&self, now: Tick) -> Option<u16> {
        self.timeout.as_ref().map(|bar| match bar.poll(now) {
            Countdown::Remaining(px) => px,
            Countdown::Expired => 0,
        })
    }

    /// Takes the pending full-refresh direction, if the item changed.
    pub fn take_transition(&mut self) -> Option<Transition> {
        self.transition.take()
    }
}

impl<S: NotificationStore> Drop for Controller<S> {
    fn drop(&mut self) {
        self.peripherals.haptics.stop_ringing();
        if std::mem::take(&mut self.sleep_inhibited) {
            self.peripherals.power.request_sleep_enabled();
        }
        tracing::debug!(mode = ?self.mode, "notification screen closed");
    }
}

impl<S: NotificationStore> std::fmt::Debug for Controller<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("mode", &self.mode)
            .field("current_id", &self.current_id)
            .field("valid_display", &self.valid_display)
            .field("running", &self.running)
            .field("interacted", &self.interacted)
            .finish_non_exhaustive()
    }
}
