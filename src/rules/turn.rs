//! Turn advancement.

use tracing::debug;

use crate::core::MatchState;
use crate::events::{GameEvent, Outcome};

/// Hand the turn to the opponent, dropping any pending selection.
pub(crate) fn advance(state: &mut MatchState, timed_out: bool, outcome: &mut Outcome) {
    if let Some(node) = state.selected() {
        state.set_selected(None);
        outcome.push(GameEvent::SelectionCleared { node });
    }

    state.pass_turn();
    let to = state.active_player();
    debug!(%to, turn = state.turn_number(), timed_out, "turn passed");
    outcome.push(GameEvent::TurnPassed { to, timed_out });
}
