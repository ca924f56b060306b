//! Clock adapters.

use crate::ports::outbound::Clock;
use parking_lot::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Manually driven clock for tests and simulations.
#[derive(Debug)]
pub struct ManualClock {
    current_time: RwLock<u64>,
}

impl ManualClock {
    /// Starts at `time`.
    pub fn new(time: u64) -> Self {
        Self {
            current_time: RwLock::new(time),
        }
    }

    /// Sets the current time.
    pub fn set_time(&self, time: u64) {
        *self.current_time.write() = time;
    }

    /// Moves the clock forward.
    pub fn advance_time(&self, secs: u64) {
        let mut time = self.current_time.write();
        *time = time.saturating_add(secs);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(1_700_000_000)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        *self.current_time.read()
    }
}
