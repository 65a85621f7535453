//! A single rewindable countdown.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time left out of a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
}

impl Countdown {
    /// A full countdown.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Time already used.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.duration - self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Back to the full duration.
    pub fn rewind(&mut self) {
        self.remaining = self.duration;
    }

    /// Use up to `elapsed`, stopping at zero. Returns the time actually used.
    pub fn consume(&mut self, elapsed: Duration) -> Duration {
        let used = elapsed.min(self.remaining);
        self.remaining -= used;
        used
    }
}
