//! Board nodes and the circuits (rings) they belong to.
//!
//! Node IDs are laid out ring by ring: `0..6` outer, `6..12` middle,
//! `12..18` inner. Textually a node is `<circuit>-<position>`, e.g. `middle-3`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::edge::EdgeId;

/// Nodes on every circuit.
pub const NODES_PER_CIRCUIT: usize = 6;

/// Nodes on the whole board.
pub const NODE_COUNT: usize = NODES_PER_CIRCUIT * 3;

/// Board center used for render coordinates.
pub const BOARD_CENTER: Point = Point { x: 250.0, y: 250.0 };

/// One of the three concentric rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Circuit {
    Outer,
    Middle,
    Inner,
}

impl Circuit {
    /// All circuits in unlock order.
    pub const ALL: [Circuit; 3] = [Circuit::Outer, Circuit::Middle, Circuit::Inner];

    /// Position in unlock order (outer = 0).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Circuit::Outer => 0,
            Circuit::Middle => 1,
            Circuit::Inner => 2,
        }
    }

    /// Inverse of [`Circuit::ordinal`].
    #[must_use]
    pub const fn from_ordinal(ordinal: usize) -> Option<Circuit> {
        match ordinal {
            0 => Some(Circuit::Outer),
            1 => Some(Circuit::Middle),
            2 => Some(Circuit::Inner),
            _ => None,
        }
    }

    /// The ring that must be full before this one opens.
    #[must_use]
    pub const fn previous(self) -> Option<Circuit> {
        match self {
            Circuit::Outer => None,
            Circuit::Middle => Some(Circuit::Outer),
            Circuit::Inner => Some(Circuit::Middle),
        }
    }

    /// The ring this one unlocks once full.
    #[must_use]
    pub const fn next(self) -> Option<Circuit> {
        match self {
            Circuit::Outer => Some(Circuit::Middle),
            Circuit::Middle => Some(Circuit::Inner),
            Circuit::Inner => None,
        }
    }

    /// Lowercase ring name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Circuit::Outer => "outer",
            Circuit::Middle => "middle",
            Circuit::Inner => "inner",
        }
    }

    /// Render radius of the ring around [`BOARD_CENTER`].
    #[must_use]
    pub const fn radius(self) -> f64 {
        match self {
            Circuit::Outer => 200.0,
            Circuit::Middle => 130.0,
            Circuit::Inner => 70.0,
        }
    }

    /// Iterate over the node IDs of this ring in position order.
    pub fn nodes(self) -> impl Iterator<Item = NodeId> {
        (0..NODES_PER_CIRCUIT).map(move |position| NodeId::new(self, position))
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a textual node or circuit name can't be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseNodeError {
    #[error("unknown circuit `{0}`")]
    UnknownCircuit(String),
    #[error("malformed node id `{0}` (expected `<circuit>-<0..6>`)")]
    Malformed(String),
}

impl FromStr for Circuit {
    type Err = ParseNodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Circuit::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseNodeError::UnknownCircuit(s.to_string()))
    }
}

/// Node identifier.
///
/// ```
/// use titan_circuits::board::{Circuit, NodeId};
///
/// let node: NodeId = "middle-2".parse().unwrap();
/// assert_eq!(node, NodeId::new(Circuit::Middle, 2));
/// assert_eq!(node.to_string(), "middle-2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u8);

impl NodeId {
    /// Create the ID of the node at `position` on `circuit`.
    ///
    /// Panics if `position` is not below [`NODES_PER_CIRCUIT`].
    #[must_use]
    pub const fn new(circuit: Circuit, position: usize) -> Self {
        assert!(position < NODES_PER_CIRCUIT, "node position out of range");
        Self((circuit.ordinal() * NODES_PER_CIRCUIT + position) as u8)
    }

    /// Get the raw index (0..18).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The ring this node sits on.
    ///
    /// Only meaningful for IDs below [`NODE_COUNT`]; larger raw values clamp
    /// to the inner ring.
    #[must_use]
    pub const fn circuit(self) -> Circuit {
        match Circuit::from_ordinal(self.index() / NODES_PER_CIRCUIT) {
            Some(circuit) => circuit,
            None => Circuit::Inner,
        }
    }

    /// Position within the ring (0..6).
    #[must_use]
    pub const fn position(self) -> usize {
        self.index() % NODES_PER_CIRCUIT
    }

    /// Check that the ID refers to a node of the fixed board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < NODE_COUNT
    }

    /// Iterate over every node on the board.
    pub fn all() -> impl Iterator<Item = NodeId> {
        (0..NODE_COUNT as u8).map(NodeId)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{}-{}", self.circuit(), self.position())
        } else {
            write!(f, "Node({})", self.0)
        }
    }
}

impl FromStr for NodeId {
    type Err = ParseNodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (circuit, position) = s
            .rsplit_once('-')
            .ok_or_else(|| ParseNodeError::Malformed(s.to_string()))?;
        let circuit: Circuit = circuit.parse()?;
        let position: usize = position
            .parse()
            .map_err(|_| ParseNodeError::Malformed(s.to_string()))?;
        if position >= NODES_PER_CIRCUIT {
            return Err(ParseNodeError::Malformed(s.to_string()));
        }
        Ok(NodeId::new(circuit, position))
    }
}

/// A 2D render coordinate. Irrelevant to the rules.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A board node: fixed position, ring membership and adjacency.
///
/// Occupancy is not stored here; it lives in
/// [`MatchState`](crate::core::MatchState) so the graph stays immutable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub circuit: Circuit,
    pub position: Point,

    /// Adjacent nodes in the order their edges were built.
    /// SmallVec: no node has more than three neighbors.
    pub neighbors: SmallVec<[NodeId; 4]>,

    /// Edges touching this node, parallel to `neighbors`.
    pub edges: SmallVec<[EdgeId; 4]>,
}

impl Node {
    /// Create an unconnected node with its ring geometry.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        let circuit = id.circuit();
        let angle = std::f64::consts::FRAC_PI_3 * id.position() as f64;
        let position = Point {
            x: BOARD_CENTER.x + circuit.radius() * angle.cos(),
            y: BOARD_CENTER.y + circuit.radius() * angle.sin(),
        };

        Self {
            id,
            circuit,
            position,
            neighbors: SmallVec::new(),
            edges: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_layout() {
        assert_eq!(NodeId::new(Circuit::Outer, 0), NodeId(0));
        assert_eq!(NodeId::new(Circuit::Middle, 0), NodeId(6));
        assert_eq!(NodeId::new(Circuit::Inner, 5), NodeId(17));

        let node = NodeId(9);
        assert_eq!(node.circuit(), Circuit::Middle);
        assert_eq!(node.position(), 3);
        assert_eq!(NodeId::all().count(), NODE_COUNT);
    }

    #[test]
    fn test_node_id_display_and_parse() {
        for node in NodeId::all() {
            let text = node.to_string();
            assert_eq!(text.parse::<NodeId>().unwrap(), node);
        }
        assert_eq!(NodeId(40).to_string(), "Node(40)");
    }

    #[test]
    fn test_node_id_parse_errors() {
        assert_eq!(
            "outer-6".parse::<NodeId>(),
            Err(ParseNodeError::Malformed("outer-6".to_string()))
        );
        assert_eq!(
            "centre-1".parse::<NodeId>(),
            Err(ParseNodeError::UnknownCircuit("centre".to_string()))
        );
        assert!("outer".parse::<NodeId>().is_err());
        assert!("inner-x".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_circuit_order() {
        assert_eq!(Circuit::Outer.previous(), None);
        assert_eq!(Circuit::Inner.previous(), Some(Circuit::Middle));
        assert_eq!(Circuit::Outer.next(), Some(Circuit::Middle));
        assert_eq!(Circuit::Inner.next(), None);
        assert_eq!(Circuit::Middle.nodes().count(), NODES_PER_CIRCUIT);
    }

    #[test]
    fn test_node_geometry() {
        let node = Node::new(NodeId::new(Circuit::Outer, 0));
        assert!((node.position.x - 450.0).abs() < 1e-9);
        assert!((node.position.y - 250.0).abs() < 1e-9);

        let inner = Node::new(NodeId::new(Circuit::Inner, 3));
        assert!((inner.position.x - 180.0).abs() < 1e-9);
    }
}
