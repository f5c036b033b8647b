// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use tempfile::tempdir;
use wrist_notify::config::{self, Config, DEFAULT_SCREEN_WIDTH};
use wrist_notify::error::Error;

#[test]
fn saved_settings_drive_the_screen() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut custom = Config::default();
    custom.timing.preview_timeout_ms = Some(10_000);
    custom.timing.brief_pulse_ms = Some(80);
    custom.store.capacity = Some(8);
    config::save_with_override(&custom, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let loaded = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, custom);

    let settings = loaded.screen_settings();
    assert_eq!(settings.preview_timeout.value(), 10_000);
    assert_eq!(settings.brief_pulse, Duration::from_millis(80));
    assert_eq!(settings.screen_width, DEFAULT_SCREEN_WIDTH);
    assert_eq!(loaded.store_capacity(), 8);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[display]\nwidth = 320\n").expect("write");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.screen_width(), 320);
    assert_eq!(loaded.timing, Config::default().timing);
    assert_eq!(loaded.store, Config::default().store);
}

#[test]
fn broken_file_is_an_error_but_load_falls_back() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[timing\npreview_timeout_ms = ").expect("write");

    let err = config::load_from_path(&path).expect_err("invalid TOML must fail");
    assert!(matches!(err, Error::Config(_)));

    let loaded = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
}

#[test]
fn missing_directory_yields_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let loaded = config::load_with_override(Some(dir.path().join("absent")));
    assert_eq!(loaded, Config::default());
}
