// Rust guideline compliant 2026-02-06

//! Time sources for measuring step durations.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic instants used by the tracker.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and hand another to a tracker.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a manual clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    /// Moves the clock forward by `millis` milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.current.get()
    }
}
