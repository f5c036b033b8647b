// SPDX-License-Identifier: MPL-2.0
//! This module handles the simulator's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Preview timeout, dismiss slide-out, vibration and refresh tick
//! - `[display]` - Simulated screen geometry
//! - `[store]` - Notification buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `WRIST_NOTIFY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use wrist_notify::config::{self, Config};
//!
//! // Load existing configuration, falling back to defaults
//! let mut config = config::load();
//!
//! // Modify a setting
//! config.timing.preview_timeout_ms = Some(10_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{DismissDuration, PreviewTimeout, ScreenSettings};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "WristNotify";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "WRIST_NOTIFY_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    #[serde(
        default = "default_preview_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_timeout_ms: Option<u32>,

    #[serde(
        default = "default_dismiss_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_animation_ms: Option<u32>,

    #[serde(
        default = "default_brief_pulse_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub brief_pulse_ms: Option<u32>,

    #[serde(
        default = "default_refresh_period_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_period_ms: Option<u32>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            preview_timeout_ms: default_preview_timeout_ms(),
            dismiss_animation_ms: default_dismiss_animation_ms(),
            brief_pulse_ms: default_brief_pulse_ms(),
            refresh_period_ms: default_refresh_period_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_screen_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,

    #[serde(default = "default_screen_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_screen_width(),
            height: default_screen_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default = "default_store_capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: default_store_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Resolves the settings a notification screen runs with.
    ///
    /// Missing values use defaults; out-of-range values are clamped.
    #[must_use]
    pub fn screen_settings(&self) -> ScreenSettings {
        let pulse_ms = self
            .timing
            .brief_pulse_ms
            .unwrap_or(DEFAULT_BRIEF_PULSE_MS)
            .min(MAX_BRIEF_PULSE_MS);
        ScreenSettings {
            preview_timeout: self
                .timing
                .preview_timeout_ms
                .map(PreviewTimeout::new)
                .unwrap_or_default(),
            dismiss: self
                .timing
                .dismiss_animation_ms
                .map(DismissDuration::new)
                .unwrap_or_default(),
            brief_pulse: Duration::from_millis(u64::from(pulse_ms)),
            screen_width: self.screen_width(),
        }
    }

    /// Refresh tick period, clamped to the supported range.
    #[must_use]
    pub fn refresh_period(&self) -> Duration {
        let ms = self
            .timing
            .refresh_period_ms
            .unwrap_or(DEFAULT_REFRESH_PERIOD_MS)
            .clamp(MIN_REFRESH_PERIOD_MS, MAX_REFRESH_PERIOD_MS);
        Duration::from_millis(u64::from(ms))
    }

    #[must_use]
    pub fn screen_width(&self) -> u16 {
        self.display
            .width
            .unwrap_or(DEFAULT_SCREEN_WIDTH)
            .max(MIN_SCREEN_EDGE)
    }

    #[must_use]
    pub fn screen_height(&self) -> u16 {
        self.display
            .height
            .unwrap_or(DEFAULT_SCREEN_HEIGHT)
            .max(MIN_SCREEN_EDGE)
    }

    #[must_use]
    pub fn store_capacity(&self) -> usize {
        self.store
            .capacity
            .unwrap_or(DEFAULT_STORE_CAPACITY)
            .clamp(1, MAX_STORE_CAPACITY)
    }
}

// =============================================================================
// Serde Default Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_preview_timeout_ms() -> Option<u32> {
    Some(DEFAULT_PREVIEW_TIMEOUT_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_dismiss_animation_ms() -> Option<u32> {
    Some(DEFAULT_DISMISS_ANIMATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_brief_pulse_ms() -> Option<u32> {
    Some(DEFAULT_BRIEF_PULSE_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_refresh_period_ms() -> Option<u32> {
    Some(DEFAULT_REFRESH_PERIOD_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_screen_width() -> Option<u16> {
    Some(DEFAULT_SCREEN_WIDTH)
}

#[allow(clippy::unnecessary_wraps)]
fn default_screen_height() -> Option<u16> {
    Some(DEFAULT_SCREEN_HEIGHT)
}

#[allow(clippy::unnecessary_wraps)]
fn default_store_capacity() -> Option<usize> {
    Some(DEFAULT_STORE_CAPACITY)
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Returns the config file path, honouring `override_dir` first, then
/// [`ENV_CONFIG_DIR`], then the platform config directory.
#[must_use]
pub fn config_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Ok(env_dir) = std::env::var(ENV_CONFIG_DIR) {
        if !env_dir.is_empty() {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// A missing file yields defaults silently; an unreadable or invalid file
/// yields defaults with a warning in the log.
#[must_use]
pub fn load() -> Config {
    load_with_override(None)
}

#[must_use]
pub fn load_with_override(override_dir: Option<PathBuf>) -> Config {
    let Some(path) = config_path_with_override(override_dir) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unusable config file");
            Config::default()
        }
    }
}

/// Loads and parses the configuration at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, override_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(override_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
