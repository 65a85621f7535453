//! Capture by encirclement.
//!
//! A titan is captured when it has at least one neighbor and every neighbor
//! holds an opponent titan. Candidates are collected against the occupancy
//! before any removal, so one capture never exposes another within the same
//! pass.

use smallvec::SmallVec;
use tracing::info;

use crate::board::{BoardGraph, NodeId};
use crate::core::{MatchState, Player};
use crate::events::{GameEvent, Outcome};

/// Check if the titan of `owner` at `node` is surrounded.
#[must_use]
pub fn is_surrounded(board: &BoardGraph, state: &MatchState, node: NodeId, owner: Player) -> bool {
    let neighbors = board.neighbors(node);
    let opponent = owner.opponent();
    !neighbors.is_empty() && neighbors.iter().all(|&n| state.occupant(n) == Some(opponent))
}

/// Every currently surrounded titan.
#[must_use]
pub fn surrounded(board: &BoardGraph, state: &MatchState) -> SmallVec<[(NodeId, Player); 4]> {
    board
        .nodes()
        .iter()
        .filter_map(|node| {
            let owner = state.occupant(node.id)?;
            is_surrounded(board, state, node.id, owner).then_some((node.id, owner))
        })
        .collect()
}

/// Remove every surrounded titan in one non-cascading pass.
///
/// Returns the number of titans removed.
pub(crate) fn resolve(board: &BoardGraph, state: &mut MatchState, outcome: &mut Outcome) -> usize {
    let captured = surrounded(board, state);

    for &(node, player) in &captured {
        state.set_occupant(node, None);
        let stats = state.stats_mut(player);
        stats.live = stats.live.saturating_sub(1);
        info!(%node, %player, live = stats.live, "titan surrounded and removed");
        outcome.push(GameEvent::PieceCaptured { node, player });
    }

    captured.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;

    fn board() -> BoardGraph {
        BoardGraph::build(&BoardLayout::default()).unwrap()
    }

    fn id(text: &str) -> NodeId {
        text.parse().unwrap()
    }

    fn place(state: &mut MatchState, node: &str, player: Player) {
        state.set_occupant(id(node), Some(player));
        state.stats_mut(player).live += 1;
    }

    #[test]
    fn test_surrounded_on_two_sides() {
        let board = board();
        let mut state = MatchState::new();
        // outer-1 has exactly two neighbors: outer-0 and outer-2.
        place(&mut state, "outer-1", Player::Red);
        place(&mut state, "outer-0", Player::Blue);
        assert!(!is_surrounded(&board, &state, id("outer-1"), Player::Red));

        place(&mut state, "outer-2", Player::Blue);
        assert!(is_surrounded(&board, &state, id("outer-1"), Player::Red));

        let mut outcome = Outcome::new();
        assert_eq!(resolve(&board, &mut state, &mut outcome), 1);
        assert_eq!(state.occupant(id("outer-1")), None);
        assert_eq!(state.stats(Player::Red).live, 0);
        assert_eq!(outcome.captures().collect::<Vec<_>>(), vec![(id("outer-1"), Player::Red)]);
    }

    #[test]
    fn test_empty_neighbor_protects() {
        let board = board();
        let mut state = MatchState::new();
        // outer-0 also touches middle-0 through a spoke.
        place(&mut state, "outer-0", Player::Red);
        place(&mut state, "outer-1", Player::Blue);
        place(&mut state, "outer-5", Player::Blue);

        assert!(surrounded(&board, &state).is_empty());

        place(&mut state, "middle-0", Player::Blue);
        assert_eq!(surrounded(&board, &state).as_slice(), &[(id("outer-0"), Player::Red)]);
    }

    #[test]
    fn test_own_neighbor_protects() {
        let board = board();
        let mut state = MatchState::new();
        place(&mut state, "outer-1", Player::Red);
        place(&mut state, "outer-0", Player::Blue);
        place(&mut state, "outer-2", Player::Red);

        assert!(!is_surrounded(&board, &state, id("outer-1"), Player::Red));
    }

    #[test]
    fn test_mutual_captures_use_pre_pass_snapshot() {
        let board = board();
        let mut state = MatchState::new();
        // Red outer-1 sits between blue outer-0 and outer-2, while blue
        // outer-2 is ringed by red outer-1, outer-3 and middle-2. Removing
        // either one first would free the other; both go.
        place(&mut state, "outer-0", Player::Blue);
        place(&mut state, "outer-1", Player::Red);
        place(&mut state, "outer-2", Player::Blue);
        place(&mut state, "outer-3", Player::Red);
        place(&mut state, "middle-2", Player::Red);

        let mut outcome = Outcome::new();
        assert_eq!(resolve(&board, &mut state, &mut outcome), 2);
        assert_eq!(state.occupant(id("outer-1")), None);
        assert_eq!(state.occupant(id("outer-2")), None);
        assert_eq!(state.occupant(id("outer-0")), Some(Player::Blue));
        assert_eq!(state.stats(Player::Red).live, 2);
        assert_eq!(state.stats(Player::Blue).live, 1);
    }
}
