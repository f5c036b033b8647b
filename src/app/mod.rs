// SPDX-License-Identifier: MPL-2.0
//! Desktop simulator of the watch's notification screen.
//!
//! The `App` struct owns what the watch OS would own: the notification store,
//! the device services and at most one open notification screen. It feeds the
//! screen display ticks and simulated gestures, and closes it once it stops
//! running.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, Simulated};
pub use subscription::message_for_key;

use crate::application::port::{NotificationStore, Peripherals};
use crate::config::{self, Config};
use crate::domain::{Category, Gesture, Tick};
use crate::infrastructure::{MemoryStore, SimulatedDevice};
use crate::ui::notifications::{Controller, Mode, ScreenMessage};
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

type SharedStore = Rc<RefCell<MemoryStore>>;

/// Root Iced application state.
pub struct App {
    config: Config,
    store: SharedStore,
    device: SimulatedDevice,
    screen: Option<Controller<SharedStore>>,
    /// Origin of the millisecond clock handed to the screen.
    epoch: Instant,
    /// Time of the last processed event.
    now: Tick,
    /// Number of simulated arrivals, used to vary their content.
    arrivals: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("stored", &self.store.borrow().count())
            .field("now", &self.now)
            .finish()
    }
}

const SAMPLE_SENDERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];
const SAMPLE_MESSAGES: [&str; 4] = [
    "Lunch at noon?",
    "The build is green again.",
    "Running ten minutes late,\nsorry!",
    "Don't forget the groceries",
];

/// Builds the window settings from the simulated screen geometry.
pub fn window_settings(config: &Config) -> window::Settings {
    let size = iced::Size::new(
        f32::from(config.screen_width()),
        f32::from(config.screen_height()),
    );
    window::Settings {
        size,
        min_size: Some(size),
        resizable: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let config = config::load_with_override(flags.config_dir.map(PathBuf::from));
    let window = window_settings(&config);

    // iced 0.14 requires Fn for boot; the config is consumed only once
    let boot_state = RefCell::new(Some(config));
    let boot = move || {
        let config = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(config), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the simulator with an empty store and no screen open.
    pub fn new(config: Config) -> Self {
        let store = Rc::new(RefCell::new(MemoryStore::with_capacity(
            config.store_capacity(),
        )));
        tracing::info!(
            capacity = config.store_capacity(),
            refresh = ?config.refresh_period(),
            "simulator started"
        );
        Self {
            config,
            store,
            device: SimulatedDevice::new(),
            screen: None,
            epoch: Instant::now(),
            now: Tick::ZERO,
            arrivals: 0,
        }
    }

    fn title(&self) -> String {
        match self.screen.as_ref().map(Controller::mode) {
            Some(Mode::Preview) => "WristNotify - preview".to_string(),
            Some(Mode::Normal) => "WristNotify - notifications".to_string(),
            None => "WristNotify".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_tick_subscription(
                self.screen.is_some(),
                self.config.refresh_period(),
            ),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        let store = self.store.borrow();
        view::view(view::ViewContext {
            screen: self.screen.as_ref(),
            unread: store.has_new(),
            stored: store.count(),
            now: self.now,
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(instant) => {
                self.now = self.tick_at(instant);
                self.refresh();
            }
            Message::Gesture(gesture) => {
                self.now = self.tick_at(Instant::now());
                self.handle_gesture(gesture);
            }
            Message::Screen(ScreenMessage::Call(action)) => {
                if let Some(screen) = self.screen.as_mut() {
                    if !screen.activate(action) {
                        tracing::debug!(?action, "call button on a non-call item ignored");
                    }
                }
            }
            Message::Simulate(event) => {
                self.now = self.tick_at(Instant::now());
                self.simulate(event);
            }
        }
        Task::none()
    }

    fn refresh(&mut self) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        screen.refresh(self.now);
        if let Some(transition) = screen.take_transition() {
            tracing::trace!(?transition, "full refresh");
        }
        if !screen.is_running() {
            self.close_screen();
        }
    }

    fn handle_gesture(&mut self, gesture: Gesture) {
        let Some(screen) = self.screen.as_mut() else {
            tracing::trace!(?gesture, "gesture with no screen open");
            return;
        };
        let handled = screen.handle_gesture(gesture, self.now);
        tracing::trace!(?gesture, handled, "gesture");
        if let Some(transition) = screen.take_transition() {
            tracing::trace!(?transition, "full refresh");
        }
        if !screen.is_running() {
            self.close_screen();
        }
    }

    fn simulate(&mut self, event: Simulated) {
        match event {
            Simulated::NewMessage => {
                let slot = (self.arrivals as usize) % SAMPLE_SENDERS.len();
                self.arrive(Category::Sms, SAMPLE_SENDERS[slot], SAMPLE_MESSAGES[slot]);
            }
            Simulated::IncomingCall => {
                let slot = (self.arrivals as usize) % SAMPLE_SENDERS.len();
                self.arrive(Category::IncomingCall, "", SAMPLE_SENDERS[slot]);
            }
            Simulated::OpenFromMenu => {
                if self.screen.is_none() {
                    self.open_screen(Mode::Normal);
                }
            }
            Simulated::Close => self.close_screen(),
        }
    }

    fn arrive(&mut self, category: Category, title: &str, message: &str) {
        self.arrivals = self.arrivals.wrapping_add(1);
        let id = self.store.borrow_mut().push(category, title, message);
        tracing::info!(id = id.value(), ?category, "notification arrived");
        // A preview replaces whatever screen was up
        self.close_screen();
        self.open_screen(Mode::Preview);
    }

    fn open_screen(&mut self, mode: Mode) {
        let peripherals = Peripherals::new(
            self.device.clone(),
            self.device.clone(),
            self.device.clone(),
        );
        self.screen = Some(Controller::new(
            Rc::clone(&self.store),
            peripherals,
            mode,
            self.config.screen_settings(),
            self.now,
        ));
    }

    fn close_screen(&mut self) {
        if self.screen.take().is_some() {
            tracing::debug!("screen closed");
        }
    }

    fn tick_at(&self, instant: Instant) -> Tick {
        let elapsed = instant.saturating_duration_since(self.epoch);
        Tick::from_millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The open screen, if any.
    #[must_use]
    pub fn screen(&self) -> Option<&Controller<SharedStore>> {
        self.screen.as_ref()
    }

    /// The simulated motor, power and call services.
    #[must_use]
    pub fn device(&self) -> &SimulatedDevice {
        &self.device
    }

    /// Number of stored notifications.
    #[must_use]
    pub fn stored(&self) -> usize {
        self.store.borrow().count()
    }

    /// Instant matching `tick` on the simulator clock.
    #[must_use]
    pub fn instant_at(&self, tick: Tick) -> Instant {
        self.epoch + std::time::Duration::from_millis(tick.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::DeviceEvent;
    use crate::ui::notifications::CallAction;

    fn app() -> App {
        App::new(Config::default())
    }

    fn tick(app: &mut App, ms: u64) {
        let instant = app.instant_at(Tick::from_millis(ms));
        let _ = app.update(Message::Tick(instant));
    }

    fn send(app: &mut App, message: Message) {
        let _ = app.update(message);
    }

    #[test]
    fn starts_idle() {
        let app = app();
        assert!(app.screen().is_none());
        assert_eq!(app.stored(), 0);
        assert_eq!(app.title(), "WristNotify");
    }

    #[test]
    fn starts_with_out_of_range_refresh_period() {
        let mut settings = Config::default();
        settings.timing.refresh_period_ms = Some(u32::MAX);
        let app = App::new(settings);
        assert_eq!(
            app.config.refresh_period(),
            std::time::Duration::from_millis(u64::from(config::MAX_REFRESH_PERIOD_MS))
        );
        assert!(app.screen().is_none());
    }

    #[test]
    fn new_message_opens_preview() {
        let mut app = app();
        send(&mut app, Message::Simulate(Simulated::NewMessage));

        let screen = app.screen().expect("preview open");
        assert_eq!(screen.mode(), Mode::Preview);
        assert_eq!(screen.item().model().title(), "Alice");
        assert!(app.device().sleep_inhibited());
        assert_eq!(app.title(), "WristNotify - preview");
    }

    #[test]
    fn preview_closes_on_timeout_and_releases_sleep() {
        let mut app = app();
        send(&mut app, Message::Simulate(Simulated::NewMessage));
        tick(&mut app, 60_000);
        assert!(app.screen().is_none());
        assert!(!app.device().sleep_inhibited());
        assert_eq!(app.stored(), 1);
    }

    #[test]
    fn escape_closes_and_releases_sleep() {
        let mut app = app();
        send(&mut app, Message::Simulate(Simulated::IncomingCall));
        assert!(app.device().is_ringing());
        send(&mut app, Message::Simulate(Simulated::Close));
        assert!(app.screen().is_none());
        assert!(!app.device().is_ringing());
        assert!(!app.device().sleep_inhibited());
    }

    #[test]
    fn arrival_while_open_replaces_the_preview() {
        let mut app = app();
        send(&mut app, Message::Simulate(Simulated::NewMessage));
        send(&mut app, Message::Simulate(Simulated::NewMessage));

        let screen = app.screen().expect("preview open");
        assert_eq!(screen.item().model().title(), "Bob");
        assert_eq!(screen.item().model().counter(), "1/2");
        assert_eq!(
            app.device().count(DeviceEvent::SleepDisabled),
            app.device().count(DeviceEvent::SleepEnabled) + 1
        );
    }

    #[test]
    fn call_button_closes_screen_on_next_tick() {
        let mut app = app();
        send(&mut app, Message::Simulate(Simulated::IncomingCall));
        send(&mut app, Message::Screen(ScreenMessage::Call(CallAction::Accept)));
        assert_eq!(app.device().count(DeviceEvent::AcceptCall), 1);
        assert!(app.screen().is_some());

        tick(&mut app, 20);
        assert!(app.screen().is_none());
    }

    #[test]
    fn menu_browsing_closes_past_newest() {
        let mut app = app();
        send(&mut app, Message::Simulate(Simulated::NewMessage));
        send(&mut app, Message::Simulate(Simulated::Close));
        send(&mut app, Message::Simulate(Simulated::OpenFromMenu));
        assert_eq!(app.screen().map(Controller::mode), Some(Mode::Normal));

        send(&mut app, Message::Gesture(Gesture::SwipeUp));
        assert!(app.screen().is_none());
    }

    #[test]
    fn gestures_without_screen_are_ignored() {
        let mut app = app();
        send(&mut app, Message::Gesture(Gesture::SwipeRight));
        tick(&mut app, 20);
        assert!(app.screen().is_none());
        assert!(app.device().events().is_empty());
    }

    #[test]
    fn window_matches_screen_geometry() {
        let settings = window_settings(&Config::default());
        assert_eq!(settings.size, iced::Size::new(240.0, 240.0));
        assert!(!settings.resizable);
    }
}
