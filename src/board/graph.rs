//! The immutable board graph.
//!
//! `BoardGraph` is built once from a [`BoardLayout`] and never mutated
//! afterwards. All per-match data (occupancy, edge control) lives in
//! [`MatchState`](crate::core::MatchState).

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::error::ConstructionError;

use super::edge::{endpoint_key, Edge, EdgeId};
use super::layout::{BoardLayout, EdgeSpec};
use super::node::{Circuit, Node, NodeId};

/// Nodes, weighted edges and adjacency of the three-ring board.
///
/// ## Usage
///
/// ```
/// use titan_circuits::board::{BoardGraph, BoardLayout, NodeId};
///
/// let board = BoardGraph::build(&BoardLayout::default()).unwrap();
///
/// let a: NodeId = "outer-0".parse().unwrap();
/// let b: NodeId = "outer-1".parse().unwrap();
/// assert!(board.are_adjacent(a, b));
/// assert_eq!(board.edge_between(a, b).map(|e| e.weight), Some(1));
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct BoardGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    /// Canonical endpoint pair -> edge.
    #[serde(skip)]
    by_endpoints: FxHashMap<(NodeId, NodeId), EdgeId>,
}

impl BoardGraph {
    /// Build the board from a layout's weight tables.
    ///
    /// Fails on a zero weight, an endpoint outside the board, a self-loop or
    /// a duplicated endpoint pair. The weights must also sum within `u32`,
    /// which bounds every score.
    pub fn build(layout: &BoardLayout) -> Result<Self, ConstructionError> {
        let specs = layout.edge_specs();
        let mut graph = Self {
            nodes: NodeId::all().map(Node::new).collect(),
            edges: Vec::with_capacity(specs.len()),
            by_endpoints: FxHashMap::default(),
        };

        let mut total: u32 = 0;
        for spec in specs {
            total = total
                .checked_add(spec.weight)
                .ok_or(ConstructionError::WeightOverflow)?;
            graph.connect(spec)?;
        }

        Ok(graph)
    }

    fn connect(&mut self, spec: EdgeSpec) -> Result<(), ConstructionError> {
        let EdgeSpec { from, to, weight, kind } = spec;

        for endpoint in [from, to] {
            if self.nodes.get(endpoint.index()).is_none() {
                return Err(ConstructionError::UnknownEndpoint(endpoint));
            }
        }
        if from == to {
            return Err(ConstructionError::SelfLoop(from));
        }
        if weight == 0 {
            return Err(ConstructionError::ZeroWeight { from, to });
        }
        let key = endpoint_key(from, to);
        if self.by_endpoints.contains_key(&key) {
            return Err(ConstructionError::DuplicateEdge { from, to });
        }

        let id = EdgeId(self.edges.len() as u8);
        self.edges.push(Edge { id, from, to, weight, kind });
        self.by_endpoints.insert(key, id);

        let a = &mut self.nodes[from.index()];
        a.neighbors.push(to);
        a.edges.push(id);
        let b = &mut self.nodes[to.index()];
        b.neighbors.push(from);
        b.edges.push(id);

        Ok(())
    }

    // === Nodes ===

    /// Get a node by ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// All nodes in ID order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Check if `id` names a node of this board.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Neighbors of a node. Empty for unknown IDs.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|n| n.neighbors.as_slice())
            .unwrap_or_default()
    }

    /// Check if two nodes share an edge.
    #[must_use]
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.by_endpoints.contains_key(&endpoint_key(a, b))
    }

    /// Nodes on `circuit`, in position order.
    pub fn nodes_in(&self, circuit: Circuit) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.circuit == circuit)
    }

    // === Edges ===

    /// Get an edge by ID.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// All edges in build order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge joining `a` and `b`, in either orientation.
    #[must_use]
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.by_endpoints
            .get(&endpoint_key(a, b))
            .and_then(|&id| self.edge(id))
    }

    /// Edges touching `id`. Empty for unknown IDs.
    pub fn edges_at(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.edges.iter())
            .filter_map(move |&edge| self.edge(edge))
    }

    /// Sum of every edge weight on the board.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::edge::{EdgeKind, EDGE_COUNT};
    use crate::board::node::{NODES_PER_CIRCUIT, NODE_COUNT};

    fn board() -> BoardGraph {
        BoardGraph::build(&BoardLayout::default()).unwrap()
    }

    fn id(text: &str) -> NodeId {
        text.parse().unwrap()
    }

    #[test]
    fn test_build_counts() {
        let board = board();
        assert_eq!(board.nodes().len(), NODE_COUNT);
        assert_eq!(board.edges().len(), EDGE_COUNT);
        for circuit in Circuit::ALL {
            assert_eq!(board.nodes_in(circuit).count(), NODES_PER_CIRCUIT);
        }
    }

    #[test]
    fn test_degrees() {
        let board = board();

        // Outer: even positions carry a spoke inward.
        assert_eq!(board.neighbors(id("outer-0")).len(), 3);
        assert_eq!(board.neighbors(id("outer-1")).len(), 2);

        // Middle: even positions link outward, odd positions inward.
        assert_eq!(board.neighbors(id("middle-0")).len(), 3);
        assert_eq!(board.neighbors(id("middle-1")).len(), 3);

        // Inner: odd positions link outward.
        assert_eq!(board.neighbors(id("inner-0")).len(), 2);
        assert_eq!(board.neighbors(id("inner-5")).len(), 3);
    }

    #[test]
    fn test_edge_lookup_is_unordered() {
        let board = board();
        let edge = board.edge_between(id("middle-1"), id("inner-1")).unwrap();
        assert_eq!(edge.weight, 4);
        assert_eq!(edge.kind, EdgeKind::Spoke { outer: Circuit::Middle });

        let reversed = board.edge_between(id("inner-1"), id("middle-1")).unwrap();
        assert_eq!(edge.id, reversed.id);

        assert!(board.edge_between(id("outer-1"), id("middle-1")).is_none());
        assert!(!board.are_adjacent(id("outer-0"), id("outer-2")));
    }

    #[test]
    fn test_edges_at() {
        let board = board();
        let node = id("outer-0");
        let edges: Vec<_> = board.edges_at(node).collect();
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|e| e.touches(node)));
        assert_eq!(board.edges_at(NodeId(99)).count(), 0);
        assert!(board.neighbors(NodeId(99)).is_empty());
    }

    #[test]
    fn test_total_weight() {
        // 9 + 26 + 50 ring weights, 4 + 17 spoke weights.
        assert_eq!(board().total_weight(), 106);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let layout = BoardLayout::default().with_ring_weights(Circuit::Middle, [1, 1, 0, 1, 1, 1]);
        let err = BoardGraph::build(&layout).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::ZeroWeight {
                from: id("middle-2"),
                to: id("middle-3"),
            }
        );
    }

    #[test]
    fn test_weight_overflow_rejected() {
        let layout = BoardLayout::default().with_ring_weights(Circuit::Outer, [u32::MAX; 6]);
        assert_eq!(BoardGraph::build(&layout).unwrap_err(), ConstructionError::WeightOverflow);

        // One huge edge is fine as long as the whole board still fits.
        let spare = u32::MAX - 102;
        let layout =
            BoardLayout::default().with_ring_weights(Circuit::Outer, [spare, 1, 1, 1, 1, 1]);
        assert_eq!(BoardGraph::build(&layout).unwrap().total_weight(), u32::MAX);
    }

    #[test]
    fn test_unused_spoke_weight_may_be_zero() {
        // Odd outer positions carry no spoke, so their table slot is ignored.
        let layout = BoardLayout::default().with_spoke_weights(Circuit::Outer, [2, 0, 1, 0, 1, 0]);
        assert!(BoardGraph::build(&layout).is_ok());
    }

    #[test]
    fn test_connect_rejects_malformed_rows() {
        let mut graph = board();
        let ring = EdgeKind::Ring(Circuit::Outer);

        let duplicate = EdgeSpec { from: id("outer-1"), to: id("outer-0"), weight: 1, kind: ring };
        assert!(matches!(graph.connect(duplicate), Err(ConstructionError::DuplicateEdge { .. })));

        let missing = EdgeSpec { from: id("outer-1"), to: NodeId(30), weight: 1, kind: ring };
        assert_eq!(graph.connect(missing), Err(ConstructionError::UnknownEndpoint(NodeId(30))));

        let looped = EdgeSpec { from: id("outer-1"), to: id("outer-1"), weight: 1, kind: ring };
        assert_eq!(graph.connect(looped), Err(ConstructionError::SelfLoop(id("outer-1"))));
    }
}
