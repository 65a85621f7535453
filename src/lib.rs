//! # titan-circuits
//!
//! Rules engine for a two-player strategy game on a three-ring board.
//!
//! Players alternately place a fixed number of titans, then move them one
//! step at a time. An edge whose endpoints both hold one player's titans
//! scores its weight for that player. A titan whose neighbors are all enemy
//! titans is removed. The match ends when a side is wiped out, when the
//! inner circuit is full, or when the match clock runs out.
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: no I/O and no wall clock. The host feeds
//!    commands and elapsed time and renders the returned events and
//!    snapshots.
//!
//! 2. **Validate, then mutate**: a rejected input is a typed error and
//!    leaves the match untouched.
//!
//! 3. **Immutable board**: the graph is built once per configuration;
//!    occupancy and edge control live in the resettable `MatchState`.
//!
//! ## Modules
//!
//! - `board`: nodes, edges, weight tables and the board graph
//! - `core`: players, actions, configuration, errors and match state
//! - `events`: outcome events produced by accepted inputs
//! - `rules`: the `RulesEngine` trait and `TitanRules`
//! - `clock`: turn and match countdowns
//! - `session`: command routing, clock wiring and render snapshots
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use titan_circuits::{Command, GameConfig, Player, Session};
//!
//! let mut session = Session::new(GameConfig::default()).unwrap();
//! session.submit(Command::Start).unwrap();
//! session.submit(Command::Click("outer-0".parse().unwrap())).unwrap();
//! session.submit(Command::Click("outer-3".parse().unwrap())).unwrap();
//! session.submit(Command::Click("outer-1".parse().unwrap())).unwrap();
//! assert_eq!(session.state().score(Player::Red), 1);
//!
//! session.tick(Duration::from_secs(30));
//! assert_eq!(session.state().active_player(), Player::Red);
//! ```

pub mod board;
pub mod clock;
pub mod core;
pub mod events;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::board::{
    BoardGraph, BoardLayout, Circuit, Edge, EdgeId, Node, NodeId, NODE_COUNT, EDGE_COUNT,
};

pub use crate::core::{
    Action, ActionError, ActionRecord, ConstructionError, GameConfig, InvalidAction, MatchState,
    Phase, Player, PlayerMap, PlayerStats, TieBreak,
};

pub use crate::events::{GameEvent, Outcome};

pub use crate::rules::{EndReason, GameResult, MatchResult, RulesEngine, TitanRules};

pub use crate::clock::{ClockEvent, ClockState, TurnClock};

pub use crate::session::{Command, MatchSnapshot, Session};
