//! Rules engine trait.
//!
//! A rules engine defines:
//! - What actions are legal
//! - How actions modify state
//! - When the match is over

use serde::{Deserialize, Serialize};

use crate::board::BoardGraph;
use crate::core::{Action, ActionError, GameConfig, MatchState, Player};
use crate::events::Outcome;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if no input is accepted right now
/// - `apply_action`: Must validate completely before the first mutation, so
///   a rejected action leaves `state` untouched
/// - `is_terminal`: Return None if the match continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get the board the rules are played on.
    fn board(&self) -> &BoardGraph;

    /// Enumerate every action the active player could submit.
    fn legal_actions(&self, state: &MatchState) -> Vec<Action>;

    /// Apply an action for the active player.
    ///
    /// Must be deterministic.
    fn apply_action(&self, state: &mut MatchState, action: Action) -> Result<Outcome, ActionError>;

    /// Check if the match is over.
    ///
    /// Returns `Some(result)` if the match has ended, `None` if it continues.
    fn is_terminal(&self, state: &MatchState) -> Option<GameResult> {
        state.result().map(|r| r.result)
    }

    // === Convenience Methods ===

    /// Check if `action` would currently be accepted.
    fn is_legal(&self, state: &MatchState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Blue);
        assert!(!result.is_winner(Player::Red));
        assert!(result.is_winner(Player::Blue));
        assert_eq!(result.winner(), Some(Player::Blue));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::Red));
        assert_eq!(draw.winner(), None);
    }
}
