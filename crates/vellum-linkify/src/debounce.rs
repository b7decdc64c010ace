//! Single-shot debounce timer.
//!
//! Coalesces bursts of trigger events into one deferred action. The timer is
//! a polled deadline, not a thread: the host's event loop calls
//! [`DebounceTimer::fire_ready`] and runs the action when it returns `true`.
//! Restarting the deadline is the cancellation mechanism.

use std::time::{Duration, Instant};

/// Default idle window before a coalesced action runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// A restartable single-shot delay timer.
///
/// State machine: `Idle --trigger--> Pending(deadline) --trigger-->
/// Pending(new deadline) --timeout--> Idle`.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Create an idle timer with the given delay window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restart the delay window from `now`, discarding any prior deadline.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` if a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any. Hosts can use this to schedule their
    /// next wakeup.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has passed.
    ///
    /// Returns `true` exactly once per elapsed window; the timer returns to
    /// idle so a burst of triggers yields a single firing.
    pub fn fire_ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
