//! Play-time tracking.

use std::time::{Duration, Instant};

/// Wall-clock play time for one game.
///
/// The clock accumulates time while running and holds its total while
/// stopped. Completing the board stops it; leaving the completed state
/// resumes it.
#[derive(Debug, Clone)]
pub(crate) struct SessionClock {
    banked: Duration,
    running_since: Option<Instant>,
}

impl SessionClock {
    /// Starts a fresh, running clock.
    pub(crate) fn running() -> Self {
        Self {
            banked: Duration::ZERO,
            running_since: Some(Instant::now()),
        }
    }

    /// Starts a fresh clock that is not counting.
    pub(crate) fn stopped() -> Self {
        Self {
            banked: Duration::ZERO,
            running_since: None,
        }
    }

    /// Rebuilds a clock from a persisted total.
    pub(crate) fn restored(elapsed: Duration, running: bool) -> Self {
        Self {
            banked: elapsed,
            running_since: running.then(Instant::now),
        }
    }

    /// Total play time so far.
    pub(crate) fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(since) => self.banked + since.elapsed(),
            None => self.banked,
        }
    }

    /// Stops counting, banking the time accumulated so far.
    pub(crate) fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
    }

    /// Resumes counting. Has no effect on a running clock.
    pub(crate) fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }
}
