//! Match state: everything that changes during a match.
//!
//! ## MatchState
//!
//! - Phase, active player, turn number, selection
//! - Open circuits
//! - Per-player placed/live/score counters
//! - Node occupancy and the edge controller cache
//! - Running/paused flags and the final result
//! - Action history
//!
//! The board graph itself is immutable; the occupancy it would otherwise
//! carry is kept here so a match can be reset without rebuilding the board.
//! Fields are read through accessors; only the rules mutate them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::{Player, PlayerMap};
use crate::board::{Circuit, EdgeId, NodeId, EDGE_COUNT, NODE_COUNT};
use crate::rules::MatchResult;

/// Stage of a match. Only ever moves forward, except on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Titans are being added to the board.
    #[default]
    Placement,
    /// Titans are being moved.
    Movement,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placement => f.write_str("placement"),
            Phase::Movement => f.write_str("movement"),
        }
    }
}

/// Per-player counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Titans placed so far (never exceeds the configured maximum).
    pub placed: u8,
    /// Titans currently on the board.
    pub live: u8,
    /// Sum of the weights of controlled edges.
    pub score: u32,
}

/// Per-match mutable state.
///
/// Uses `im::Vector` for the action history so cloning stays cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    phase: Phase,
    active_player: Player,
    turn_number: u32,
    selected: Option<NodeId>,
    open: [bool; 3],
    players: PlayerMap<PlayerStats>,
    occupancy: [Option<Player>; NODE_COUNT],
    controllers: [Option<Player>; EDGE_COUNT],
    running: bool,
    paused: bool,
    result: Option<MatchResult>,
    action_sequence: u32,
    history: Vector<ActionRecord>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// A fresh match: placement phase, red to act, only the outer circuit
    /// open, empty board, not yet running.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Placement,
            active_player: Player::Red,
            turn_number: 1,
            selected: None,
            open: [true, false, false],
            players: PlayerMap::default(),
            occupancy: [None; NODE_COUNT],
            controllers: [None; EDGE_COUNT],
            running: false,
            paused: false,
            result: None,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    /// Return to the fresh state. The only operation that moves the phase or
    /// the open circuits backwards.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Progression ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Turn number (starts at 1, +1 on every pass).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Titan picked up in the first half of a move.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, node: Option<NodeId>) {
        self.selected = node;
    }

    pub(crate) fn enter_movement(&mut self) {
        self.phase = Phase::Movement;
    }

    /// Hand the turn to the opponent.
    pub(crate) fn pass_turn(&mut self) {
        self.active_player = self.active_player.opponent();
        self.turn_number += 1;
    }

    // === Circuits ===

    #[must_use]
    pub fn is_open(&self, circuit: Circuit) -> bool {
        self.open[circuit.ordinal()]
    }

    /// Open circuits in unlock order.
    pub fn open_circuits(&self) -> impl Iterator<Item = Circuit> + '_ {
        Circuit::ALL.into_iter().filter(|&c| self.is_open(c))
    }

    pub(crate) fn open_circuit(&mut self, circuit: Circuit) {
        self.open[circuit.ordinal()] = true;
    }

    // === Players ===

    #[must_use]
    pub fn stats(&self, player: Player) -> PlayerStats {
        self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerStats> {
        &self.players
    }

    pub(crate) fn stats_mut(&mut self, player: Player) -> &mut PlayerStats {
        &mut self.players[player]
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.players[player].score
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.players.map(|s| s.score)
    }

    // === Board occupancy ===

    /// Who holds `node`. `None` for empty or unknown nodes.
    #[must_use]
    pub fn occupant(&self, node: NodeId) -> Option<Player> {
        self.occupancy.get(node.index()).copied().flatten()
    }

    pub(crate) fn set_occupant(&mut self, node: NodeId, occupant: Option<Player>) {
        if let Some(slot) = self.occupancy.get_mut(node.index()) {
            *slot = occupant;
        }
    }

    /// Nodes held by `player`.
    pub fn nodes_of(&self, player: Player) -> impl Iterator<Item = NodeId> + '_ {
        NodeId::all().filter(move |&n| self.occupant(n) == Some(player))
    }

    /// Number of nodes held by `player`.
    #[must_use]
    pub fn pieces_on_board(&self, player: Player) -> usize {
        self.nodes_of(player).count()
    }

    /// Cached controller of `edge`.
    #[must_use]
    pub fn controller(&self, edge: EdgeId) -> Option<Player> {
        self.controllers.get(edge.index()).copied().flatten()
    }

    pub(crate) fn set_controller(&mut self, edge: EdgeId, controller: Option<Player>) {
        if let Some(slot) = self.controllers.get_mut(edge.index()) {
            *slot = controller;
        }
    }

    // === Flags ===

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Final result once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub(crate) fn conclude(&mut self, result: MatchResult) {
        self.selected = None;
        self.paused = false;
        self.result = Some(result);
    }

    // === Action History ===

    /// Accepted actions in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub(crate) fn record_action(&mut self, player: Player, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }
}
