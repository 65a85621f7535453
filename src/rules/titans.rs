//! The titan circuits rules.
//!
//! `TitanRules` owns the immutable board and the configuration; every match
//! is a separate `MatchState` passed in by the caller. Each operation checks
//! everything up front and only then mutates, so an `Err` always leaves the
//! state exactly as it was.
//!
//! ## Action pipeline
//!
//! Placement: occupy, unlock circuits, switch phase once both sides are
//! fully placed, recompute control, check saturation, pass the turn.
//!
//! Movement: select, cancel or move. A move releases the mover's edges at the
//! source, relocates the titan, recomputes control, removes surrounded
//! titans, evaluates the win conditions and passes the turn.

use tracing::{debug, info};

use super::engine::{GameResult, RulesEngine};
use super::victory::{self, EndReason, MatchResult};
use super::{capture, control, turn, unlock};
use crate::board::{BoardGraph, NodeId};
use crate::core::{
    Action, ActionError, ActionKind, ConstructionError, GameConfig, InvalidAction, MatchState,
    Phase, Player,
};
use crate::events::{GameEvent, Outcome};

/// Rules engine for one board and configuration.
#[derive(Clone, Debug)]
pub struct TitanRules {
    config: GameConfig,
    board: BoardGraph,
}

impl TitanRules {
    /// Validate `config` and build its board.
    pub fn new(config: GameConfig) -> Result<Self, ConstructionError> {
        config.validate()?;
        let board = BoardGraph::build(&config.layout)?;
        info!(
            max_pieces = config.max_pieces,
            edges = board.edges().len(),
            total_weight = board.total_weight(),
            "titan rules ready"
        );
        Ok(Self { config, board })
    }

    /// A fresh, not yet started match.
    #[must_use]
    pub fn new_match(&self) -> MatchState {
        MatchState::new()
    }

    // === Match control ===

    /// Start the match.
    pub fn start(&self, state: &mut MatchState) -> Result<Outcome, ActionError> {
        if state.is_over() {
            return Err(ActionError::AlreadyOver);
        }
        if state.is_running() {
            return Err(ActionError::AlreadyRunning);
        }
        state.set_running(true);
        info!(first = %state.active_player(), "match started");
        Ok(Outcome::from_event(GameEvent::MatchStarted))
    }

    /// Freeze the match. Actions and timeouts are refused until resumed.
    pub fn pause(&self, state: &mut MatchState) -> Result<Outcome, ActionError> {
        if state.is_over() {
            return Err(ActionError::AlreadyOver);
        }
        if !state.is_running() {
            return Err(ActionError::NotRunning);
        }
        if state.is_paused() {
            return Err(ActionError::Paused);
        }
        state.set_paused(true);
        debug!("match paused");
        Ok(Outcome::from_event(GameEvent::MatchPaused))
    }

    /// Continue a paused match.
    pub fn resume(&self, state: &mut MatchState) -> Result<Outcome, ActionError> {
        if state.is_over() {
            return Err(ActionError::AlreadyOver);
        }
        if !state.is_running() {
            return Err(ActionError::NotRunning);
        }
        if !state.is_paused() {
            return Err(ActionError::NotPaused);
        }
        state.set_paused(false);
        debug!("match resumed");
        Ok(Outcome::from_event(GameEvent::MatchResumed))
    }

    /// Throw the match away and start over from the fresh state.
    pub fn reset(&self, state: &mut MatchState) -> Outcome {
        state.reset();
        info!("match reset");
        Outcome::from_event(GameEvent::MatchReset)
    }

    fn ensure_accepting(&self, state: &MatchState) -> Result<(), ActionError> {
        if state.is_over() {
            Err(ActionError::AlreadyOver)
        } else if !state.is_running() {
            Err(ActionError::NotRunning)
        } else if state.is_paused() {
            Err(ActionError::Paused)
        } else {
            Ok(())
        }
    }

    fn ensure_phase(
        &self,
        state: &MatchState,
        action: ActionKind,
        phase: Phase,
    ) -> Result<(), ActionError> {
        if state.phase() == phase {
            Ok(())
        } else {
            Err(ActionError::IllegalPhaseAction {
                action,
                phase: state.phase(),
            })
        }
    }

    fn ensure_known(&self, node: NodeId) -> Result<(), InvalidAction> {
        if self.board.contains(node) {
            Ok(())
        } else {
            Err(InvalidAction::UnknownNode(node))
        }
    }

    // === Placement ===

    /// Check whether the active player may place on `node` right now.
    pub fn check_placement(&self, state: &MatchState, node: NodeId) -> Result<(), ActionError> {
        self.ensure_accepting(state)?;
        self.ensure_phase(state, ActionKind::Place, Phase::Placement)?;
        self.ensure_known(node)?;

        let player = state.active_player();
        if state.stats(player).placed >= self.config.max_pieces {
            return Err(InvalidAction::AllPiecesPlaced { player }.into());
        }
        if !state.is_open(node.circuit()) {
            return Err(InvalidAction::CircuitLocked(node.circuit()).into());
        }
        if state.occupant(node).is_some() {
            return Err(InvalidAction::NodeOccupied(node).into());
        }
        Ok(())
    }

    /// Place a titan of the active player on `node`.
    pub fn place(&self, state: &mut MatchState, node: NodeId) -> Result<Outcome, ActionError> {
        if let Err(error) = self.check_placement(state, node) {
            debug!(%node, %error, "placement rejected");
            return Err(error);
        }

        let player = state.active_player();
        let before = state.scores();
        let mut outcome = Outcome::new();

        state.set_occupant(node, Some(player));
        let stats = state.stats_mut(player);
        stats.placed += 1;
        stats.live += 1;
        state.record_action(player, Action::Place(node));
        debug!(%node, %player, placed = state.stats(player).placed, "titan placed");
        outcome.push(GameEvent::PiecePlaced { node, player });

        unlock::open_filled_circuits(&self.board, state, &mut outcome);

        let max = self.config.max_pieces;
        if Player::all().all(|p| state.stats(p).placed >= max) {
            state.enter_movement();
            info!(turn = state.turn_number(), "all titans placed, movement phase begins");
            outcome.push(GameEvent::PhaseChanged {
                phase: Phase::Movement,
            });
        }

        control::recompute(&self.board, state);
        control::report_scores(state, &before, &mut outcome);

        match victory::saturation(&self.board, state, self.config.tie_break) {
            Some(result) => self.finish(state, result, EndReason::BoardSaturated, &mut outcome),
            None => turn::advance(state, false, &mut outcome),
        }
        Ok(outcome)
    }

    // === Movement ===

    /// Check whether the active player may select, cancel or move onto
    /// `node` right now.
    pub fn check_select_or_move(
        &self,
        state: &MatchState,
        node: NodeId,
    ) -> Result<(), ActionError> {
        self.ensure_accepting(state)?;
        self.ensure_phase(state, ActionKind::SelectOrMove, Phase::Movement)?;
        self.ensure_known(node)?;

        match state.selected() {
            None => {
                if state.occupant(node) != Some(state.active_player()) {
                    return Err(InvalidAction::NotYourPiece(node).into());
                }
            }
            Some(from) if from == node => {}
            Some(from) => {
                if !self.board.are_adjacent(from, node) {
                    return Err(InvalidAction::NotAdjacent { from, to: node }.into());
                }
                if state.occupant(node).is_some() {
                    return Err(InvalidAction::DestinationOccupied(node).into());
                }
            }
        }
        Ok(())
    }

    /// Movement input: select a titan, cancel the selection, or move the
    /// selected titan to an adjacent empty node.
    pub fn select_or_move(
        &self,
        state: &mut MatchState,
        node: NodeId,
    ) -> Result<Outcome, ActionError> {
        if let Err(error) = self.check_select_or_move(state, node) {
            debug!(%node, %error, "movement input rejected");
            return Err(error);
        }

        let player = state.active_player();
        let mut outcome = Outcome::new();
        state.record_action(player, Action::SelectOrMove(node));

        match state.selected() {
            None => {
                state.set_selected(Some(node));
                debug!(%node, %player, "titan selected");
                outcome.push(GameEvent::PieceSelected { node, player });
            }
            Some(from) if from == node => {
                state.set_selected(None);
                debug!(%node, %player, "selection cancelled");
                outcome.push(GameEvent::SelectionCleared { node });
            }
            Some(from) => self.move_titan(state, from, node, &mut outcome),
        }
        Ok(outcome)
    }

    fn move_titan(&self, state: &mut MatchState, from: NodeId, to: NodeId, outcome: &mut Outcome) {
        let player = state.active_player();
        let before = state.scores();

        control::release_at(&self.board, state, from, player);
        state.set_occupant(from, None);
        state.set_occupant(to, Some(player));
        state.set_selected(None);
        debug!(%from, %to, %player, "titan moved");
        outcome.push(GameEvent::PieceMoved { from, to, player });

        control::recompute(&self.board, state);
        if capture::resolve(&self.board, state, outcome) > 0 {
            control::recompute(&self.board, state);
        }
        control::report_scores(state, &before, outcome);

        match victory::evaluate(&self.board, state, self.config.tie_break) {
            Some((result, reason)) => self.finish(state, result, reason, outcome),
            None => turn::advance(state, false, outcome),
        }
    }

    // === Clock events ===

    /// The active player ran out of time: drop the selection and pass.
    ///
    /// Ignored (empty outcome) unless the match is running and not paused.
    pub fn turn_timeout(&self, state: &mut MatchState) -> Outcome {
        let mut outcome = Outcome::new();
        if self.ensure_accepting(state).is_err() {
            debug!("turn timeout ignored");
            return outcome;
        }
        turn::advance(state, true, &mut outcome);
        outcome
    }

    /// The match clock ran out: decide on score.
    ///
    /// Ignored (empty outcome) unless the match is running and not paused.
    pub fn match_timeout(&self, state: &mut MatchState) -> Outcome {
        let mut outcome = Outcome::new();
        if self.ensure_accepting(state).is_err() {
            debug!("match timeout ignored");
            return outcome;
        }
        let result = victory::by_score(state, self.config.tie_break);
        self.finish(state, result, EndReason::TimeExpired, &mut outcome);
        outcome
    }

    fn finish(
        &self,
        state: &mut MatchState,
        result: GameResult,
        reason: EndReason,
        outcome: &mut Outcome,
    ) {
        if let Some(node) = state.selected() {
            outcome.push(GameEvent::SelectionCleared { node });
        }
        let result = MatchResult::new(result, reason, state);
        state.conclude(result);
        state.set_running(false);
        info!(
            result = ?result.result,
            %reason,
            red = result.final_scores[Player::Red],
            blue = result.final_scores[Player::Blue],
            "match ended"
        );
        outcome.push(GameEvent::MatchEnded(result));
    }
}

impl RulesEngine for TitanRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn board(&self) -> &BoardGraph {
        &self.board
    }

    fn legal_actions(&self, state: &MatchState) -> Vec<Action> {
        if self.ensure_accepting(state).is_err() {
            return Vec::new();
        }
        match state.phase() {
            Phase::Placement => NodeId::all()
                .filter(|&node| self.check_placement(state, node).is_ok())
                .map(Action::Place)
                .collect(),
            Phase::Movement => match state.selected() {
                None => state
                    .nodes_of(state.active_player())
                    .map(Action::SelectOrMove)
                    .collect(),
                Some(from) => std::iter::once(from)
                    .chain(
                        self.board
                            .neighbors(from)
                            .iter()
                            .copied()
                            .filter(|&n| state.occupant(n).is_none()),
                    )
                    .map(Action::SelectOrMove)
                    .collect(),
            },
        }
    }

    fn apply_action(&self, state: &mut MatchState, action: Action) -> Result<Outcome, ActionError> {
        match action {
            Action::Place(node) => self.place(state, node),
            Action::SelectOrMove(node) => self.select_or_move(state, node),
        }
    }

    fn is_legal(&self, state: &MatchState, action: Action) -> bool {
        match action {
            Action::Place(node) => self.check_placement(state, node).is_ok(),
            Action::SelectOrMove(node) => self.check_select_or_move(state, node).is_ok(),
        }
    }
}
