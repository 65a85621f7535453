//! Error types.
//!
//! - `InvalidAction`: a rule violation; the action is rejected and nothing
//!   changes.
//! - `ActionError`: every way a submitted action or control command can be
//!   refused.
//! - `ConstructionError`: malformed board tables or configuration, reported
//!   when the engine is built.

use std::time::Duration;

use thiserror::Error;

use super::action::ActionKind;
use super::player::Player;
use super::state::Phase;
use crate::board::{Circuit, NodeId};

/// An illegal placement or movement target.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("{player} has already placed all titans; move them instead")]
    AllPiecesPlaced { player: Player },
    #[error("the {0} circuit is not unlocked yet")]
    CircuitLocked(Circuit),
    #[error("node {0} is already occupied")]
    NodeOccupied(NodeId),
    #[error("node {0} does not hold one of your titans")]
    NotYourPiece(NodeId),
    #[error("{to} is not adjacent to {from}")]
    NotAdjacent { from: NodeId, to: NodeId },
    #[error("destination {0} is already occupied")]
    DestinationOccupied(NodeId),
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
}

/// Why a submitted action or command was refused.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Invalid(#[from] InvalidAction),
    #[error("cannot {action} during the {phase} phase")]
    IllegalPhaseAction { action: ActionKind, phase: Phase },
    #[error("the match is already over")]
    AlreadyOver,
    #[error("the match has not been started")]
    NotRunning,
    #[error("the match is paused")]
    Paused,
    #[error("the match is already running")]
    AlreadyRunning,
    #[error("the match is not paused")]
    NotPaused,
}

impl ActionError {
    /// The rule violation, if this is one.
    #[must_use]
    pub fn as_invalid(&self) -> Option<InvalidAction> {
        match self {
            ActionError::Invalid(invalid) => Some(*invalid),
            _ => None,
        }
    }
}

/// Malformed board tables or configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("edge {from}-{to} has zero weight")]
    ZeroWeight { from: NodeId, to: NodeId },
    #[error("edge endpoint {0} is not on the board")]
    UnknownEndpoint(NodeId),
    #[error("edge at {0} connects the node to itself")]
    SelfLoop(NodeId),
    #[error("edge {from}-{to} is defined twice")]
    DuplicateEdge { from: NodeId, to: NodeId },
    #[error("titans per player must be within 1..={max}, got {got}")]
    InvalidMaxPieces { got: u8, max: u8 },
    #[error("{0} duration must be positive")]
    ZeroDuration(&'static str),
    #[error("turn duration must be at least {min:?}, got {got:?}")]
    TurnTooShort { got: Duration, min: Duration },
    #[error("edge weights sum past {}", u32::MAX)]
    WeightOverflow,
}
