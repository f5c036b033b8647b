// SPDX-License-Identifier: MPL-2.0
//! System power port definition.

/// Port for the system task's sleep inhibit.
///
/// Requests are reference-counted on the system side, so every
/// [`request_sleep_disabled`](Power::request_sleep_disabled) must be matched
/// by exactly one [`request_sleep_enabled`](Power::request_sleep_enabled).
pub trait Power {
    fn request_sleep_disabled(&mut self);
    fn request_sleep_enabled(&mut self);
}
