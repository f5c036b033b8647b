// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows of the notification screen over a shared store.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wrist_notify::application::port::{NotificationStore, Peripherals};
use wrist_notify::domain::ui::ScreenSettings;
use wrist_notify::domain::{Category, Gesture, Tick};
use wrist_notify::infrastructure::{DeviceEvent, MemoryStore, SimulatedDevice};
use wrist_notify::ui::notifications::{CallAction, Controller, Mode, Transition};

type Shared = Rc<RefCell<MemoryStore>>;

fn shared_store(titles: &[&str]) -> Shared {
    let mut store = MemoryStore::default();
    for title in titles {
        store.push(Category::SimpleAlert, *title, format!("{title} body"));
    }
    Rc::new(RefCell::new(store))
}

fn open(store: &Shared, mode: Mode, now: u64) -> (Controller<Shared>, SimulatedDevice) {
    let device = SimulatedDevice::new();
    let controller = Controller::new(
        Rc::clone(store),
        Peripherals::new(device.clone(), device.clone(), device.clone()),
        mode,
        ScreenSettings::default(),
        Tick::from_millis(now),
    );
    (controller, device)
}

fn at(ms: u64) -> Tick {
    Tick::from_millis(ms)
}

#[test]
fn browse_dismiss_and_close() {
    let store = shared_store(&["oldest", "middle", "newest"]);
    let (mut screen, _) = open(&store, Mode::Normal, 0);
    assert_eq!(screen.item().model().title(), "newest");

    assert!(screen.handle_gesture(Gesture::SwipeDown, at(100)));
    assert_eq!(screen.item().model().title(), "middle");
    assert_eq!(screen.take_transition(), Some(Transition::Down));

    // Dismiss "middle": the cursor stays on index 1, which is now "oldest"
    assert!(screen.handle_gesture(Gesture::SwipeRight, at(200)));
    assert_eq!(store.borrow().count(), 2);
    screen.refresh(at(300));
    assert_eq!(screen.item().model().title(), "middle");
    screen.refresh(at(401));
    assert_eq!(screen.item().model().title(), "oldest");
    assert_eq!(screen.item().model().counter(), "2/2");
    assert_eq!(screen.take_transition(), Some(Transition::Up));

    assert!(screen.handle_gesture(Gesture::SwipeUp, at(500)));
    assert_eq!(screen.item().model().title(), "newest");
    assert_eq!(screen.current_id(), 0);

    assert!(!screen.handle_gesture(Gesture::SwipeUp, at(600)));
    assert!(!screen.is_running());
}

#[test]
fn dismissing_everything_ends_on_empty_state() {
    let store = shared_store(&["a", "b"]);
    let (mut screen, _) = open(&store, Mode::Normal, 0);

    let mut now = 0;
    for _ in 0..2 {
        assert!(screen.handle_gesture(Gesture::SwipeRight, at(now)));
        now += 250;
        screen.refresh(at(now));
    }

    assert_eq!(store.borrow().count(), 0);
    assert!(!screen.valid_display());
    assert!(screen.item().model().is_empty_state());
    assert!(screen.is_running());
    assert!(!screen.handle_gesture(Gesture::SwipeRight, at(now)));
}

#[test]
fn store_changes_between_ticks_are_picked_up() {
    let store = shared_store(&["a", "b", "c"]);
    let (mut screen, _) = open(&store, Mode::Normal, 0);
    screen.handle_gesture(Gesture::SwipeDown, at(0));
    screen.handle_gesture(Gesture::SwipeDown, at(0));
    assert_eq!(screen.current_id(), 2);

    assert_eq!(screen.item().model().title(), "a");

    // Another producer shrinks the store under the screen
    store.borrow_mut().dismiss(0);
    assert!(screen.handle_gesture(Gesture::SwipeRight, at(10)));
    assert!(screen.current_id() < store.borrow().count());

    // The swipe removed the record on screen, not its old slot
    assert_eq!(store.borrow().count(), 1);
    assert_eq!(store.borrow().at(0).map(|n| n.title().to_owned()), Some("b".to_owned()));

    screen.refresh(at(300));
    assert!(screen.valid_display());
    assert_eq!(screen.item().model().title(), "b");
    assert!(screen.current_id() < store.borrow().count());
}

#[test]
fn incoming_call_preview_lifecycle() {
    let store = Rc::new(RefCell::new(MemoryStore::default()));
    store.borrow_mut().push(Category::IncomingCall, "", "+33 6 12 34 56 78");
    let (mut screen, device) = open(&store, Mode::Preview, 1_000);

    assert!(device.is_ringing());
    assert!(device.sleep_inhibited());
    assert!(!store.borrow().has_new());
    assert_eq!(screen.item().model().body(), "+33 6 12 34 56 78");

    screen.refresh(at(2_000));
    assert!(screen.is_running());

    assert!(screen.activate(CallAction::Reject));
    assert!(!device.is_ringing());
    screen.refresh(at(2_020));
    assert!(!screen.is_running());

    drop(screen);
    assert!(!device.sleep_inhibited());
    assert_eq!(device.count(DeviceEvent::RejectCall), 1);
    assert_eq!(device.count(DeviceEvent::AcceptCall), 0);
    assert_eq!(device.count(DeviceEvent::MuteCall), 0);
    assert_eq!(
        device.count(DeviceEvent::SleepDisabled),
        device.count(DeviceEvent::SleepEnabled)
    );
}

#[test]
fn message_preview_times_out() {
    let store = shared_store(&["hello"]);
    let (mut screen, device) = open(&store, Mode::Preview, 500);
    assert_eq!(device.count(DeviceEvent::BriefPulse(Duration::from_millis(35))), 1);

    let mut now = 500;
    while screen.is_running() {
        now += 20;
        screen.refresh(at(now));
        assert!(now < 500 + 8_000, "preview never expired");
    }
    assert!(now >= 500 + 6_900);
    assert!(!device.sleep_inhibited());
    assert_eq!(screen.timeout_remaining(at(now)), None);
}

#[test]
fn countdown_bar_shrinks_monotonically() {
    let store = shared_store(&["hello"]);
    let (screen, _) = open(&store, Mode::Preview, 0);

    let mut last = u16::MAX;
    for ms in (0..7_000).step_by(100) {
        let remaining = screen.timeout_remaining(at(ms)).unwrap_or(0);
        assert!(remaining <= last);
        last = remaining;
    }
}
