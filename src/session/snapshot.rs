//! Read-only views for rendering.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{Circuit, EdgeId, NodeId, Point};
use crate::core::{Phase, Player, PlayerMap, PlayerStats};
use crate::rules::MatchResult;

/// One node as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub circuit: Circuit,
    pub position: Point,
    pub occupant: Option<Player>,
    /// The circuit is open for placement.
    pub open: bool,
    pub selected: bool,
}

/// One edge as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
    pub controller: Option<Player>,
}

/// Everything needed to draw the board, the scores and the timers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub phase: Phase,
    pub active_player: Player,
    pub turn_number: u32,
    pub selected: Option<NodeId>,
    pub open_circuits: Vec<Circuit>,
    pub players: PlayerMap<PlayerStats>,
    pub running: bool,
    pub paused: bool,
    pub over: bool,
    pub turn_remaining: Duration,
    pub match_remaining: Duration,
    pub result: Option<MatchResult>,
}

impl MatchSnapshot {
    /// View of a single node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeView> {
        self.nodes.iter().find(|view| view.id == id)
    }

    /// Score of `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.players[player].score
    }
}
