// SPDX-License-Identifier: MPL-2.0
//! Slide-out animation played when a notification is dismissed.
//!
//! The animation is polled rather than event driven: the screen asks
//! [`DismissAnimation::elapsed`] on every refresh tick and swaps the view
//! item the one time it answers `true`.

use crate::domain::ui::DismissDuration;
use crate::domain::Tick;
use std::time::Duration;

/// One-shot slide-out timer owned by a single view item.
#[derive(Debug, Clone)]
pub struct DismissAnimation {
    duration: Duration,
    started_at: Option<Tick>,
}

impl DismissAnimation {
    #[must_use]
    pub fn new(duration: DismissDuration) -> Self {
        Self {
            duration: duration.as_duration(),
            started_at: None,
        }
    }

    /// Starts the slide-out at `now`.
    ///
    /// Restarting an animation that has not fired yet is not supported;
    /// the controller refuses a second dismissal while one is in flight.
    pub fn start(&mut self, now: Tick) {
        debug_assert!(self.started_at.is_none(), "dismiss animation restarted");
        self.started_at = Some(now);
    }

    /// Whether the slide-out has started and not been reported yet.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns true exactly once, on the first poll strictly after the
    /// animation length has passed. The marker is cleared when it fires.
    pub fn elapsed(&mut self, now: Tick) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        let elapsed = now.since(start) > self.duration;
        if elapsed {
            self.started_at = None;
        }
        elapsed
    }

    /// Horizontal slide progress in `[0, 1]`, for rendering.
    #[must_use]
    pub fn progress(&self, now: Tick) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let ratio = now.since(start).as_secs_f32() / self.duration.as_secs_f32();
        ratio.min(1.0)
    }
}

impl Default for DismissAnimation {
    fn default() -> Self {
        Self::new(DismissDuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation() -> DismissAnimation {
        DismissAnimation::new(DismissDuration::new(200))
    }

    #[test]
    fn never_elapses_before_start() {
        let mut anim = animation();
        assert!(!anim.elapsed(Tick::from_millis(10_000)));
        assert!(!anim.is_running());
    }

    #[test]
    fn does_not_fire_at_exact_duration() {
        let mut anim = animation();
        anim.start(Tick::from_millis(100));
        assert!(!anim.elapsed(Tick::from_millis(150)));
        assert!(!anim.elapsed(Tick::from_millis(300)));
        assert!(anim.elapsed(Tick::from_millis(301)));
    }

    #[test]
    fn fires_exactly_once_per_start() {
        let mut anim = animation();
        anim.start(Tick::from_millis(0));
        assert!(anim.elapsed(Tick::from_millis(500)));
        assert!(!anim.elapsed(Tick::from_millis(600)));
        assert!(!anim.elapsed(Tick::from_millis(10_000)));
        assert!(!anim.is_running());

        anim.start(Tick::from_millis(10_000));
        assert!(anim.elapsed(Tick::from_millis(10_201)));
    }

    #[test]
    fn late_poll_still_fires() {
        let mut anim = animation();
        anim.start(Tick::from_millis(0));
        assert!(anim.elapsed(Tick::from_millis(60_000)));
    }

    #[test]
    fn start_at_tick_zero_is_tracked() {
        let mut anim = animation();
        anim.start(Tick::ZERO);
        assert!(anim.is_running());
        assert!(anim.elapsed(Tick::from_millis(201)));
    }

    #[test]
    fn progress_is_clamped() {
        let mut anim = animation();
        assert!(anim.progress(Tick::from_millis(50)).abs() < f32::EPSILON);
        anim.start(Tick::from_millis(0));
        assert!((anim.progress(Tick::from_millis(100)) - 0.5).abs() < 1e-6);
        assert!((anim.progress(Tick::from_millis(900)) - 1.0).abs() < f32::EPSILON);
    }
}
