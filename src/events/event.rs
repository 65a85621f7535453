//! Outcome events.
//!
//! Every accepted action, control command or clock event produces an ordered
//! list of `GameEvent`s. Collaborators (rendering, sound, timers) react to
//! these; they never read intermediate engine state.

use serde::{Deserialize, Serialize};

use crate::board::{Circuit, NodeId};
use crate::core::{Phase, Player};
use crate::rules::MatchResult;

/// Something that happened as a consequence of an accepted input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    MatchStarted,
    MatchPaused,
    MatchResumed,
    MatchReset,

    PiecePlaced { node: NodeId, player: Player },
    PieceSelected { node: NodeId, player: Player },
    /// A selection was cancelled or dropped by a turn timeout.
    SelectionCleared { node: NodeId },
    PieceMoved { from: NodeId, to: NodeId, player: Player },

    CircuitUnlocked { circuit: Circuit },
    PhaseChanged { phase: Phase },

    /// A player's score moved; carries the new total.
    ScoreChanged { player: Player, score: u32 },

    /// A surrounded titan was removed from `node`.
    PieceCaptured { node: NodeId, player: Player },

    /// The turn went to `to`. `timed_out` is set when the clock forced it.
    TurnPassed { to: Player, timed_out: bool },

    MatchEnded(MatchResult),
}

/// Ordered events produced by one accepted input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    events: Vec<GameEvent>,
}

impl Outcome {
    /// An empty outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An outcome holding a single event.
    #[must_use]
    pub fn from_event(event: GameEvent) -> Self {
        Self { events: vec![event] }
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Append every event of another outcome.
    pub fn append(&mut self, other: Outcome) {
        self.events.extend(other.events);
    }

    /// Events in the order they happened.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check if any event matches `predicate`.
    pub fn contains(&self, predicate: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }

    /// The final result, if this outcome ended the match.
    #[must_use]
    pub fn match_result(&self) -> Option<&MatchResult> {
        self.events.iter().find_map(|event| match event {
            GameEvent::MatchEnded(result) => Some(result),
            _ => None,
        })
    }

    /// Nodes captured in this outcome.
    pub fn captures(&self) -> impl Iterator<Item = (NodeId, Player)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            GameEvent::PieceCaptured { node, player } => Some((node, player)),
            _ => None,
        })
    }
}

impl IntoIterator for Outcome {
    type Item = GameEvent;
    type IntoIter = std::vec::IntoIter<GameEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
