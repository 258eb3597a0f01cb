//! Static configuration for a carousel instance

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::breakpoints::Breakpoints;
use crate::constants::{gesture, timing};
use crate::lock::LockRelease;

/// Tuning for one carousel. Defaults mirror [`crate::constants`].
///
/// `transition_duration` drives both the emitted [`crate::Transition`] and
/// the animation lock, so the two can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    pub transition_duration: Duration,
    pub lock_release: LockRelease,
    /// Only used with [`LockRelease::TransitionEnd`].
    pub transition_end_grace: Duration,
    pub resize_debounce: Duration,
    pub swipe_threshold_px: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            transition_duration: Duration::from_millis(timing::TRANSITION_MS),
            lock_release: LockRelease::Timer,
            transition_end_grace: Duration::from_millis(
                timing::TRANSITION_END_GRACE_MS,
            ),
            resize_debounce: Duration::from_millis(timing::RESIZE_DEBOUNCE_MS),
            swipe_threshold_px: gesture::SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselConfig {
    /// How long the lock holds at most after a transition begins.
    pub fn lock_hold(&self) -> Duration {
        match self.lock_release {
            LockRelease::Timer => self.transition_duration,
            LockRelease::TransitionEnd => {
                self.transition_duration + self.transition_end_grace
            }
        }
    }
}
