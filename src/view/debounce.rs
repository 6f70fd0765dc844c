//! Latest-wins debouncing on a host-provided clock.
//!
//! The debouncer never reads a clock itself: callers pass `now` (a monotonic
//! offset) to both [`Debouncer::signal`] and [`Debouncer::poll`], which
//! keeps resize handling deterministic under test.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a signal, superseding any pending fire.
    pub fn signal(&mut self, now: Duration) {
        self.deadline = Some(now + self.window);
    }

    /// Returns `true` once when the quiescence window has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}
