// SPDX-License-Identifier: MPL-2.0
//! Application layer - service interfaces consumed by the notification screen.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the controller through these ports
//!
//! # Example
//!
//! ```ignore
//! use wrist_notify::application::port::Haptics;
//!
//! // Firmware implements the port trait on top of its motor driver
//! struct MotorHaptics { /* ... */ }
//! impl Haptics for MotorHaptics { /* ... */ }
//! ```

pub mod port;
