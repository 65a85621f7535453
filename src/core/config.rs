//! Game configuration.
//!
//! Everything the engine needs is fixed at construction:
//! - titans per player
//! - turn and match durations for the clock
//! - board weight tables (`BoardLayout`)
//! - how equal scores are resolved (`TieBreak`)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConstructionError;
use super::player::{Player, PlayerMap};
use crate::board::{BoardLayout, NODE_COUNT};
use crate::rules::GameResult;

/// Most titans a player may field: both sides together can't exceed the board.
pub const MAX_PIECES_LIMIT: u8 = (NODE_COUNT / 2) as u8;

/// Shortest accepted turn. Timers count whole seconds.
pub const MIN_TURN_DURATION: Duration = Duration::from_secs(1);

/// How a score comparison ends when both scores are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal scores end the match without a winner.
    #[default]
    Draw,
    /// Equal scores credit the given player.
    Favor(Player),
}

impl TieBreak {
    /// Decide a match by score.
    ///
    /// ```
    /// use titan_circuits::core::{Player, PlayerMap, TieBreak};
    /// use titan_circuits::rules::GameResult;
    ///
    /// let level = PlayerMap::with_value(7);
    /// assert_eq!(TieBreak::Draw.decide(&level), GameResult::Draw);
    /// assert_eq!(
    ///     TieBreak::Favor(Player::Blue).decide(&level),
    ///     GameResult::Winner(Player::Blue)
    /// );
    /// ```
    #[must_use]
    pub fn decide(self, scores: &PlayerMap<u32>) -> GameResult {
        let (red, blue) = (scores[Player::Red], scores[Player::Blue]);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Red),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Blue),
            std::cmp::Ordering::Equal => match self {
                TieBreak::Draw => GameResult::Draw,
                TieBreak::Favor(player) => GameResult::Winner(player),
            },
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Titans each player places before the movement phase.
    pub max_pieces: u8,

    /// Time a player has to act before the turn passes automatically.
    pub turn_duration: Duration,

    /// Total match time; the higher score wins when it runs out.
    pub match_duration: Duration,

    /// Edge weight tables.
    pub layout: BoardLayout,

    /// Resolution of equal scores at saturation or time expiry.
    pub tie_break: TieBreak,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_pieces: 4,
            turn_duration: Duration::from_secs(30),
            match_duration: Duration::from_secs(5 * 60),
            layout: BoardLayout::default(),
            tie_break: TieBreak::Draw,
        }
    }
}

impl GameConfig {
    /// Set titans per player.
    #[must_use]
    pub fn with_max_pieces(mut self, max_pieces: u8) -> Self {
        self.max_pieces = max_pieces;
        self
    }

    /// Set the per-turn time limit.
    #[must_use]
    pub fn with_turn_duration(mut self, duration: Duration) -> Self {
        self.turn_duration = duration;
        self
    }

    /// Set the total match time.
    #[must_use]
    pub fn with_match_duration(mut self, duration: Duration) -> Self {
        self.match_duration = duration;
        self
    }

    /// Set the weight tables.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the tie-break rule.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Check the scalar settings. Weight tables are checked when the board
    /// is built.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if !(1..=MAX_PIECES_LIMIT).contains(&self.max_pieces) {
            return Err(ConstructionError::InvalidMaxPieces {
                got: self.max_pieces,
                max: MAX_PIECES_LIMIT,
            });
        }
        if self.turn_duration.is_zero() {
            return Err(ConstructionError::ZeroDuration("turn"));
        }
        if self.turn_duration < MIN_TURN_DURATION {
            return Err(ConstructionError::TurnTooShort {
                got: self.turn_duration,
                min: MIN_TURN_DURATION,
            });
        }
        if self.match_duration.is_zero() {
            return Err(ConstructionError::ZeroDuration("match"));
        }
        Ok(())
    }
}
