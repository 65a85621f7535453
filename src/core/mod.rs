//! Core engine types: players, configuration, actions, match state, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::{GameConfig, TieBreak, MAX_PIECES_LIMIT, MIN_TURN_DURATION};
pub use error::{ActionError, ConstructionError, InvalidAction};
pub use player::{Player, PlayerMap};
pub use state::{MatchState, Phase, PlayerStats};
