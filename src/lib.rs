// SPDX-License-Identifier: MPL-2.0
//! `wrist_notify` is the notification screen of a wearable, with a desktop
//! simulator built on the Iced GUI framework.
//!
//! The screen browses a bounded store of phone notifications, raises a
//! vibrating preview when one arrives and offers call controls on incoming
//! calls. Device services (motor, power, call control) sit behind the port
//! traits in [`application::port`], so the state machine in
//! [`ui::notifications`] runs unchanged against the simulator or real
//! hardware adapters.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
