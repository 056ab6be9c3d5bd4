//! Integration test suite for perf_suite
//!
//! Drives the registry, runner and reporter together through the public
//! library API.

use perf_suite::Clock;
use std::cell::Cell;
use std::time::Duration;

/// Re-export components for test convenience
pub mod components {
    pub use perf_suite;
}

/// Clock that advances by a fixed step on every reading
pub struct SteppingClock {
    step: Duration,
    current: Cell<Duration>,
}

impl SteppingClock {
    /// Clock advancing by `step` per reading; a zero step never advances
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            current: Cell::new(Duration::ZERO),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let now = self.current.get() + self.step;
        self.current.set(now);
        now
    }
}
