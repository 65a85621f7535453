//! Circuit unlocking.
//!
//! A circuit opens once the circuit outside it is open and completely
//! occupied. Opening is permanent until the match is reset.

use tracing::info;

use crate::board::{BoardGraph, Circuit};
use crate::core::MatchState;
use crate::events::{GameEvent, Outcome};

/// Check if every node of `circuit` is occupied.
#[must_use]
pub fn is_full(board: &BoardGraph, state: &MatchState, circuit: Circuit) -> bool {
    board
        .nodes_in(circuit)
        .all(|node| state.occupant(node.id).is_some())
}

/// Open every circuit whose predecessor is open and full.
///
/// Idempotent: already-open circuits are skipped and nothing is ever closed.
pub(crate) fn open_filled_circuits(
    board: &BoardGraph,
    state: &mut MatchState,
    outcome: &mut Outcome,
) {
    for circuit in Circuit::ALL {
        let Some(previous) = circuit.previous() else {
            continue;
        };
        if state.is_open(circuit) {
            continue;
        }
        if !state.is_open(previous) || !is_full(board, state, previous) {
            break;
        }

        state.open_circuit(circuit);
        info!(%circuit, "circuit unlocked");
        outcome.push(GameEvent::CircuitUnlocked { circuit });
    }
}
