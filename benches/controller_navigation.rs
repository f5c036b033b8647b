// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification screen state machine.
//!
//! Measures the performance of:
//! - Opening a screen (store query + item construction)
//! - Walking the full store down and back up
//! - A dismiss followed by the settling refresh

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wrist_notify::application::port::Peripherals;
use wrist_notify::config::MAX_STORE_CAPACITY;
use wrist_notify::domain::ui::ScreenSettings;
use wrist_notify::domain::{Category, Gesture, Tick};
use wrist_notify::infrastructure::{MemoryStore, SimulatedDevice};
use wrist_notify::ui::notifications::{Controller, Mode};

fn full_store() -> MemoryStore {
    let mut store = MemoryStore::with_capacity(MAX_STORE_CAPACITY);
    for i in 0..MAX_STORE_CAPACITY {
        store.push(
            Category::InstantMessage,
            format!("Sender {i}"),
            "A reasonably long message body that wraps over several lines",
        );
    }
    store
}

fn open(store: MemoryStore) -> Controller<MemoryStore> {
    let device = SimulatedDevice::new();
    Controller::new(
        store,
        Peripherals::new(device.clone(), device.clone(), device),
        Mode::Normal,
        ScreenSettings::default(),
        Tick::ZERO,
    )
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    let store = full_store();

    group.bench_function("open", |b| {
        b.iter(|| black_box(open(store.clone())));
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    let store = full_store();

    group.bench_function("walk_down_and_up", |b| {
        b.iter(|| {
            let mut screen = open(store.clone());
            for _ in 0..MAX_STORE_CAPACITY {
                screen.handle_gesture(Gesture::SwipeDown, Tick::ZERO);
            }
            for _ in 0..MAX_STORE_CAPACITY {
                screen.handle_gesture(Gesture::SwipeUp, Tick::ZERO);
            }
            black_box(screen.current_id());
        });
    });

    group.finish();
}

fn bench_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    let store = full_store();

    group.bench_function("dismiss_and_settle", |b| {
        b.iter(|| {
            let mut screen = open(store.clone());
            screen.handle_gesture(Gesture::SwipeRight, Tick::ZERO);
            screen.refresh(Tick::from_millis(1_000));
            black_box(screen.item().model().counter());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_walk, bench_dismiss);
criterion_main!(benches);
