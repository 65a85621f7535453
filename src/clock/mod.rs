//! Match timing.
//!
//! - `Countdown`: one rewindable countdown
//! - `TurnClock`: the turn/match pair, advanced by elapsed time

pub mod countdown;
pub mod turn_clock;

pub use countdown::Countdown;
pub use turn_clock::{ClockEvent, ClockState, TurnClock};
