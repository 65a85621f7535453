//! Board actions and their history records.
//!
//! Only two actions go through the rules: placing a titan and the two-step
//! select/move interaction. Both name a single target node; the acting player
//! is always the active player.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::board::NodeId;

/// A board action submitted by the active player.
///
/// ## Example
///
/// ```
/// use titan_circuits::board::NodeId;
/// use titan_circuits::core::{Action, ActionKind};
///
/// let place = Action::Place("outer-0".parse().unwrap());
/// assert_eq!(place.kind(), ActionKind::Place);
/// assert_eq!(place.node(), NodeId(0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Put a new titan on an empty node (placement phase).
    Place(NodeId),

    /// Select an own titan, cancel the selection, or move the selected
    /// titan to an adjacent empty node (movement phase).
    SelectOrMove(NodeId),
}

impl Action {
    /// The type of action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Place(_) => ActionKind::Place,
            Action::SelectOrMove(_) => ActionKind::SelectOrMove,
        }
    }

    /// The target node.
    #[must_use]
    pub fn node(&self) -> NodeId {
        match *self {
            Action::Place(node) | Action::SelectOrMove(node) => node,
        }
    }
}

/// Action type without its target, used in phase errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Place,
    SelectOrMove,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Place => f.write_str("place a titan"),
            ActionKind::SelectOrMove => f.write_str("select or move a titan"),
        }
    }
}

/// An accepted action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the match (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
