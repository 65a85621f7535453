//! Turn and match countdowns.
//!
//! The clock never reads wall time. The host advances it with elapsed
//! durations and gets back the timeouts that fell due, in order. It knows
//! nothing about the game; the session feeds the timeouts to the rules.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::countdown::Countdown;

/// A timeout produced by the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEvent {
    /// The active player ran out of time.
    TurnTimeout,
    /// The whole match ran out of time.
    MatchTimeout,
}

/// Lifecycle of the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockState {
    /// Not started yet, both countdowns full.
    #[default]
    Stopped,
    Running,
    /// Frozen; remaining times are kept.
    Paused,
    /// The match is over; nothing fires until reset.
    Cancelled,
}

/// Per-turn and per-match countdown pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    turn: Countdown,
    match_time: Countdown,
    state: ClockState,
}

impl TurnClock {
    /// A stopped clock. A zero turn duration disables turn timeouts.
    #[must_use]
    pub fn new(turn_duration: Duration, match_duration: Duration) -> Self {
        Self {
            turn: Countdown::new(turn_duration),
            match_time: Countdown::new(match_duration),
            state: ClockState::Stopped,
        }
    }

    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Time left for the active player.
    #[must_use]
    pub fn turn_remaining(&self) -> Duration {
        self.turn.remaining()
    }

    /// Time left in the match.
    #[must_use]
    pub fn match_remaining(&self) -> Duration {
        self.match_time.remaining()
    }

    /// Start counting. Only a stopped clock starts.
    pub fn start(&mut self) -> bool {
        self.transition(ClockState::Stopped, ClockState::Running)
    }

    pub fn pause(&mut self) -> bool {
        self.transition(ClockState::Running, ClockState::Paused)
    }

    pub fn resume(&mut self) -> bool {
        self.transition(ClockState::Paused, ClockState::Running)
    }

    /// Stop for good; remaining times are kept for display.
    pub fn cancel(&mut self) {
        if self.state != ClockState::Cancelled {
            debug!(match_remaining = ?self.match_remaining(), "clock cancelled");
        }
        self.state = ClockState::Cancelled;
    }

    /// Back to a stopped clock with both countdowns full.
    pub fn reset(&mut self) {
        self.turn.rewind();
        self.match_time.rewind();
        self.state = ClockState::Stopped;
    }

    /// Give the active player a fresh turn countdown.
    pub fn restart_turn(&mut self) {
        self.turn.rewind();
    }

    fn transition(&mut self, from: ClockState, to: ClockState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }

    fn ticks_turns(&self) -> bool {
        !self.turn.duration().is_zero()
    }

    /// Let `elapsed` pass and return the timeouts that fell due, oldest
    /// first.
    ///
    /// A turn timeout rewinds the turn countdown, so a long step can yield
    /// several. The match timeout cancels the clock and is always last; a
    /// turn timeout due at the same instant is dropped. Does nothing unless
    /// running.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ClockEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        let mut left = elapsed;
        loop {
            let mut step = left.min(self.match_time.remaining());
            if self.ticks_turns() {
                step = step.min(self.turn.remaining());
            }
            self.match_time.consume(step);
            self.turn.consume(step);
            left -= step;

            if self.match_time.is_expired() {
                debug!("match time expired");
                self.state = ClockState::Cancelled;
                events.push(ClockEvent::MatchTimeout);
                break;
            }
            if self.ticks_turns() && self.turn.is_expired() {
                debug!(match_remaining = ?self.match_remaining(), "turn time expired");
                self.turn.rewind();
                events.push(ClockEvent::TurnTimeout);
                continue;
            }
            if left.is_zero() {
                break;
            }
        }
        events
    }
}
