//! Weighted edges between board nodes.

use serde::{Deserialize, Serialize};

use super::node::{Circuit, NodeId};

/// Ring edges plus the six spokes between rings.
pub const EDGE_COUNT: usize = 24;

/// Edge identifier, assigned in build order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u8);

impl EdgeId {
    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({})", self.0)
    }
}

/// Where an edge sits on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Part of the cycle around a ring.
    Ring(Circuit),
    /// Joins a node of `outer` to the matching node of the next ring in.
    Spoke { outer: Circuit },
}

/// An undirected weighted edge.
///
/// `from`/`to` keep the orientation of the layout table (it only matters for
/// the label); lookups treat the pair as unordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
    pub kind: EdgeKind,
}

impl Edge {
    /// Check if `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    #[must_use]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }

    /// Textual identity, e.g. `outer-0-outer-1`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

/// Canonical (smaller first) endpoint pair used as a lookup key.
#[must_use]
pub fn endpoint_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}
