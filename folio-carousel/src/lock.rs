//! Animation lock: suppresses overlapping transitions during the settle period

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// How an engaged lock is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockRelease {
    /// Release after the transition duration elapses.
    #[default]
    Timer,
    /// Release on the host's transition-completion signal, falling back to
    /// the transition duration plus a grace period if no signal arrives.
    TransitionEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LockState {
    Released,
    Engaged { release: LockRelease, deadline: Instant },
}

/// Boolean lock with a non-cancelable release deadline.
///
/// The lock never queues work: callers check [`AnimationLock::is_engaged`]
/// and drop the input when it is set.
#[derive(Debug, Clone, Copy)]
pub struct AnimationLock {
    state: LockState,
}

impl Default for AnimationLock {
    fn default() -> Self {
        Self {
            state: LockState::Released,
        }
    }
}

impl AnimationLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self.state, LockState::Engaged { .. })
    }

    /// Engage the lock at `now`; it releases no later than `now + hold`.
    pub fn engage(&mut self, now: Instant, release: LockRelease, hold: Duration) {
        self.state = LockState::Engaged {
            release,
            deadline: now + hold,
        };
    }

    /// Pending release deadline, if engaged.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            LockState::Engaged { deadline, .. } => Some(deadline),
            LockState::Released => None,
        }
    }

    /// Release the lock if its deadline has passed. Returns true on release.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            LockState::Engaged { deadline, .. } if now >= deadline => {
                self.state = LockState::Released;
                true
            }
            _ => false,
        }
    }

    /// Handle a transition-completion signal. Only locks engaged with
    /// [`LockRelease::TransitionEnd`] respond to it.
    pub fn transition_finished(&mut self) -> bool {
        match self.state {
            LockState::Engaged {
                release: LockRelease::TransitionEnd,
                ..
            } => {
                self.state = LockState::Released;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_lock_releases_at_deadline() {
        let t0 = Instant::now();
        let mut lock = AnimationLock::new();
        lock.engage(t0, LockRelease::Timer, Duration::from_millis(600));

        assert!(lock.is_engaged());
        assert!(!lock.poll(t0 + Duration::from_millis(599)));
        assert!(lock.is_engaged());
        assert!(lock.poll(t0 + Duration::from_millis(600)));
        assert!(!lock.is_engaged());
        assert_eq!(lock.deadline(), None);
    }

    #[test]
    fn timer_lock_ignores_transition_signal() {
        let t0 = Instant::now();
        let mut lock = AnimationLock::new();
        lock.engage(t0, LockRelease::Timer, Duration::from_millis(600));
        assert!(!lock.transition_finished());
        assert!(lock.is_engaged());
    }

    #[test]
    fn transition_end_lock_releases_on_signal_or_fallback() {
        let t0 = Instant::now();
        let mut lock = AnimationLock::new();
        lock.engage(t0, LockRelease::TransitionEnd, Duration::from_millis(700));
        assert!(lock.transition_finished());
        assert!(!lock.is_engaged());

        lock.engage(t0, LockRelease::TransitionEnd, Duration::from_millis(700));
        assert!(lock.poll(t0 + Duration::from_millis(700)));
    }
}
