//! Win conditions.
//!
//! Checked in order after every move:
//! 1. Elimination: a player with no titans left loses.
//! 2. Saturation: a full inner circuit ends the match on score.
//!
//! Match time expiry is the third condition; it arrives as a clock event
//! and is decided on score the same way.

use serde::{Deserialize, Serialize};

use super::engine::GameResult;
use super::unlock;
use crate::board::{BoardGraph, Circuit};
use crate::core::{MatchState, Phase, Player, PlayerMap, TieBreak};

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A player lost every titan.
    Elimination,
    /// Every inner circuit node is occupied.
    BoardSaturated,
    /// The match clock ran out.
    TimeExpired,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::Elimination => f.write_str("all titans of one side were removed"),
            EndReason::BoardSaturated => f.write_str("the inner circuit is full"),
            EndReason::TimeExpired => f.write_str("time is up"),
        }
    }
}

/// Final outcome of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub result: GameResult,
    pub reason: EndReason,
    pub final_scores: PlayerMap<u32>,
}

impl MatchResult {
    /// Capture the result together with the current scores.
    #[must_use]
    pub fn new(result: GameResult, reason: EndReason, state: &MatchState) -> Self {
        Self {
            result,
            reason,
            final_scores: state.scores(),
        }
    }
}

/// Elimination check. Only meaningful once titans can be captured.
///
/// Both sides emptied in the same capture pass is a draw.
#[must_use]
pub fn elimination(state: &MatchState) -> Option<GameResult> {
    if state.phase() != Phase::Movement {
        return None;
    }
    let out = |player: Player| state.stats(player).live == 0;
    match (out(Player::Red), out(Player::Blue)) {
        (true, true) => Some(GameResult::Draw),
        (true, false) => Some(GameResult::Winner(Player::Blue)),
        (false, true) => Some(GameResult::Winner(Player::Red)),
        (false, false) => None,
    }
}

/// Saturation check: decided on score once the inner circuit is full.
#[must_use]
pub fn saturation(
    board: &BoardGraph,
    state: &MatchState,
    tie_break: TieBreak,
) -> Option<GameResult> {
    unlock::is_full(board, state, Circuit::Inner).then(|| by_score(state, tie_break))
}

/// Decide on score with `tie_break` for equal scores.
#[must_use]
pub fn by_score(state: &MatchState, tie_break: TieBreak) -> GameResult {
    tie_break.decide(&state.scores())
}

/// Run the board conditions in order.
#[must_use]
pub fn evaluate(
    board: &BoardGraph,
    state: &MatchState,
    tie_break: TieBreak,
) -> Option<(GameResult, EndReason)> {
    if let Some(result) = elimination(state) {
        return Some((result, EndReason::Elimination));
    }
    saturation(board, state, tie_break).map(|result| (result, EndReason::BoardSaturated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;

    fn board() -> BoardGraph {
        BoardGraph::build(&BoardLayout::default()).unwrap()
    }

    fn movement_state(red_live: u8, blue_live: u8) -> MatchState {
        let mut state = MatchState::new();
        state.enter_movement();
        state.stats_mut(Player::Red).live = red_live;
        state.stats_mut(Player::Blue).live = blue_live;
        state
    }

    #[test]
    fn test_elimination() {
        assert_eq!(elimination(&movement_state(2, 3)), None);
        assert_eq!(elimination(&movement_state(0, 3)), Some(GameResult::Winner(Player::Blue)));
        assert_eq!(elimination(&movement_state(1, 0)), Some(GameResult::Winner(Player::Red)));
        assert_eq!(elimination(&movement_state(0, 0)), Some(GameResult::Draw));
    }

    #[test]
    fn test_no_elimination_during_placement() {
        assert_eq!(elimination(&MatchState::new()), None);
    }

    #[test]
    fn test_saturation() {
        let board = board();
        let mut state = movement_state(4, 4);
        state.stats_mut(Player::Red).score = 10;
        state.stats_mut(Player::Blue).score = 12;

        for (i, node) in Circuit::Inner.nodes().enumerate() {
            assert_eq!(saturation(&board, &state, TieBreak::Draw), None);
            let owner = if i % 2 == 0 { Player::Red } else { Player::Blue };
            state.set_occupant(node, Some(owner));
        }

        assert_eq!(
            evaluate(&board, &state, TieBreak::Draw),
            Some((GameResult::Winner(Player::Blue), EndReason::BoardSaturated))
        );
    }

    #[test]
    fn test_elimination_takes_precedence() {
        let board = board();
        let mut state = movement_state(0, 4);
        for node in Circuit::Inner.nodes() {
            state.set_occupant(node, Some(Player::Blue));
        }

        assert_eq!(
            evaluate(&board, &state, TieBreak::Draw),
            Some((GameResult::Winner(Player::Blue), EndReason::Elimination))
        );
    }

    #[test]
    fn test_match_result_captures_scores() {
        let mut state = MatchState::new();
        state.stats_mut(Player::Red).score = 6;

        let result =
            MatchResult::new(GameResult::Winner(Player::Red), EndReason::TimeExpired, &state);
        assert_eq!(result.final_scores[Player::Red], 6);
        assert_eq!(result.final_scores[Player::Blue], 0);
    }
}
