//! The match session: single owner of rules, state and clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::snapshot::{EdgeView, MatchSnapshot, NodeView};
use crate::board::NodeId;
use crate::clock::{ClockEvent, TurnClock};
use crate::core::{ActionError, ConstructionError, GameConfig, MatchState, Phase};
use crate::events::{GameEvent, Outcome};
use crate::rules::{RulesEngine, TitanRules};

/// Input from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", content = "node", rename_all = "snake_case")]
pub enum Command {
    Start,
    Pause,
    Resume,
    Reset,
    PlaceAt(NodeId),
    SelectOrMoveTo(NodeId),
    /// Placement or movement depending on the current phase.
    Click(NodeId),
}

/// A match in progress.
///
/// Commands and clock events are processed one at a time, each to
/// completion. The clock follows the outcome of every accepted input:
/// a regular turn pass rewinds the turn countdown, the end of the match
/// cancels it.
#[derive(Clone, Debug)]
pub struct Session {
    rules: TitanRules,
    state: MatchState,
    clock: TurnClock,
}

impl Session {
    /// Build the rules for `config` and set up a match that is not yet
    /// started.
    pub fn new(config: GameConfig) -> Result<Self, ConstructionError> {
        let rules = TitanRules::new(config)?;
        let state = rules.new_match();
        let clock = TurnClock::new(rules.config().turn_duration, rules.config().match_duration);
        Ok(Self { rules, state, clock })
    }

    #[must_use]
    pub fn rules(&self) -> &TitanRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    /// Dispatch a host command.
    pub fn submit(&mut self, command: Command) -> Result<Outcome, ActionError> {
        debug!(?command, "command submitted");
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Reset => Ok(self.reset()),
            Command::PlaceAt(node) => self.place_at(node),
            Command::SelectOrMoveTo(node) => self.select_or_move_to(node),
            Command::Click(node) => self.click(node),
        }
    }

    // === Match control ===

    pub fn start(&mut self) -> Result<Outcome, ActionError> {
        let outcome = self.rules.start(&mut self.state)?;
        self.clock.start();
        Ok(outcome)
    }

    pub fn pause(&mut self) -> Result<Outcome, ActionError> {
        let outcome = self.rules.pause(&mut self.state)?;
        self.clock.pause();
        Ok(outcome)
    }

    pub fn resume(&mut self) -> Result<Outcome, ActionError> {
        let outcome = self.rules.resume(&mut self.state)?;
        self.clock.resume();
        Ok(outcome)
    }

    /// Back to a fresh, stopped match with full timers.
    pub fn reset(&mut self) -> Outcome {
        self.clock.reset();
        self.rules.reset(&mut self.state)
    }

    // === Board input ===

    pub fn place_at(&mut self, node: NodeId) -> Result<Outcome, ActionError> {
        let outcome = self.rules.place(&mut self.state, node)?;
        self.follow(&outcome);
        Ok(outcome)
    }

    pub fn select_or_move_to(&mut self, node: NodeId) -> Result<Outcome, ActionError> {
        let outcome = self.rules.select_or_move(&mut self.state, node)?;
        self.follow(&outcome);
        Ok(outcome)
    }

    /// A click on `node`: a placement or a movement input depending on the
    /// phase.
    pub fn click(&mut self, node: NodeId) -> Result<Outcome, ActionError> {
        match self.state.phase() {
            Phase::Placement => self.place_at(node),
            Phase::Movement => self.select_or_move_to(node),
        }
    }

    // === Time ===

    /// Let `elapsed` pass and apply every timeout that fell due.
    pub fn tick(&mut self, elapsed: Duration) -> Outcome {
        let mut outcome = Outcome::new();
        for event in self.clock.advance(elapsed) {
            outcome.append(self.apply_clock(event));
        }
        outcome
    }

    /// Apply a timeout raised outside of [`tick`](Self::tick).
    pub fn handle_clock(&mut self, event: ClockEvent) -> Outcome {
        let outcome = self.apply_clock(event);
        if event == ClockEvent::TurnTimeout && !outcome.is_empty() {
            self.clock.restart_turn();
        }
        outcome
    }

    fn apply_clock(&mut self, event: ClockEvent) -> Outcome {
        debug!(?event, "clock event");
        let outcome = match event {
            ClockEvent::TurnTimeout => self.rules.turn_timeout(&mut self.state),
            ClockEvent::MatchTimeout => self.rules.match_timeout(&mut self.state),
        };
        self.follow(&outcome);
        outcome
    }

    fn follow(&mut self, outcome: &Outcome) {
        for event in outcome.events() {
            match event {
                GameEvent::TurnPassed { timed_out: false, .. } => self.clock.restart_turn(),
                GameEvent::MatchEnded(_) => self.clock.cancel(),
                _ => {}
            }
        }
    }

    // === Rendering ===

    /// Current board, scores and timers.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        let state = &self.state;
        let board = self.rules.board();

        let nodes = board
            .nodes()
            .iter()
            .map(|node| NodeView {
                id: node.id,
                circuit: node.circuit,
                position: node.position,
                occupant: state.occupant(node.id),
                open: state.is_open(node.circuit),
                selected: state.selected() == Some(node.id),
            })
            .collect();

        let edges = board
            .edges()
            .iter()
            .map(|edge| EdgeView {
                id: edge.id,
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
                controller: state.controller(edge.id),
            })
            .collect();

        MatchSnapshot {
            nodes,
            edges,
            phase: state.phase(),
            active_player: state.active_player(),
            turn_number: state.turn_number(),
            selected: state.selected(),
            open_circuits: state.open_circuits().collect(),
            players: *state.players(),
            running: state.is_running(),
            paused: state.is_paused(),
            over: state.is_over(),
            turn_remaining: self.clock.turn_remaining(),
            match_remaining: self.clock.match_remaining(),
            result: state.result().copied(),
        }
    }
}
