//! Deterministic time source for tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use notes_rs_core::Clock;
use parking_lot::Mutex;
use std::sync::Arc;

/// Clock that only moves when told to, optionally stepping on every read.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
    step: Duration,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single();
        Self::starting_at(start.expect("valid start time"))
    }

    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
            step: Duration::zero(),
        }
    }

    /// Advance by `step` after every reading.
    pub fn stepping(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    /// Jump to `at`, forwards or backwards.
    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock() = at;
    }

    pub fn current(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock();
        let reading = *now;
        *now += self.step;
        reading
    }
}
