//! Fixed board topology and its weight tables.
//!
//! The topology never changes: three 6-node cycles, spokes from the outer
//! ring to the middle ring on even positions and from the middle ring to the
//! inner ring on odd positions. Only the weights are configurable.

use serde::{Deserialize, Serialize};

use super::edge::EdgeKind;
use super::node::{Circuit, NodeId, NODES_PER_CIRCUIT};

/// One weight per position.
pub type WeightTable = [u32; NODES_PER_CIRCUIT];

/// A single row of the topology table, before IDs are assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
    pub kind: EdgeKind,
}

/// Weight tables for every edge family.
///
/// Ring table index `i` weights the edge `i -> (i + 1) % 6`. Spoke tables are
/// indexed by the position of the connected nodes; only the positions that
/// carry a spoke are read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub outer: WeightTable,
    pub middle: WeightTable,
    pub inner: WeightTable,
    pub outer_middle: WeightTable,
    pub middle_inner: WeightTable,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            outer: [1, 2, 3, 1, 1, 1],
            middle: [6, 4, 1, 6, 5, 4],
            inner: [8, 9, 8, 8, 8, 9],
            outer_middle: [2, 2, 1, 1, 1, 5],
            middle_inner: [5, 4, 9, 5, 8, 8],
        }
    }
}

impl BoardLayout {
    /// Ring weights for `circuit`.
    #[must_use]
    pub fn ring_weights(&self, circuit: Circuit) -> &WeightTable {
        match circuit {
            Circuit::Outer => &self.outer,
            Circuit::Middle => &self.middle,
            Circuit::Inner => &self.inner,
        }
    }

    /// Spoke weights from `outer` to the ring inside it.
    ///
    /// Returns `None` for the inner ring, which has nothing inside it.
    #[must_use]
    pub fn spoke_weights(&self, outer: Circuit) -> Option<&WeightTable> {
        match outer {
            Circuit::Outer => Some(&self.outer_middle),
            Circuit::Middle => Some(&self.middle_inner),
            Circuit::Inner => None,
        }
    }

    /// Replace the ring weights of `circuit`.
    #[must_use]
    pub fn with_ring_weights(mut self, circuit: Circuit, weights: WeightTable) -> Self {
        match circuit {
            Circuit::Outer => self.outer = weights,
            Circuit::Middle => self.middle = weights,
            Circuit::Inner => self.inner = weights,
        }
        self
    }

    /// Replace the spoke weights leaving `outer`. Ignored for the inner ring.
    #[must_use]
    pub fn with_spoke_weights(mut self, outer: Circuit, weights: WeightTable) -> Self {
        match outer {
            Circuit::Outer => self.outer_middle = weights,
            Circuit::Middle => self.middle_inner = weights,
            Circuit::Inner => {}
        }
        self
    }

    /// Expand the tables into the full edge list, in build order:
    /// outer ring, middle ring, inner ring, outer spokes, middle spokes.
    #[must_use]
    pub fn edge_specs(&self) -> Vec<EdgeSpec> {
        let mut specs = Vec::with_capacity(super::edge::EDGE_COUNT);

        for circuit in Circuit::ALL {
            let weights = self.ring_weights(circuit);
            for position in 0..NODES_PER_CIRCUIT {
                specs.push(EdgeSpec {
                    from: NodeId::new(circuit, position),
                    to: NodeId::new(circuit, (position + 1) % NODES_PER_CIRCUIT),
                    weight: weights[position],
                    kind: EdgeKind::Ring(circuit),
                });
            }
        }

        for outer in [Circuit::Outer, Circuit::Middle] {
            let (Some(inner), Some(weights)) = (outer.next(), self.spoke_weights(outer)) else {
                continue;
            };
            // Spokes alternate between rings so the connections stagger.
            let first = outer.ordinal() % 2;
            for position in (first..NODES_PER_CIRCUIT).step_by(2) {
                specs.push(EdgeSpec {
                    from: NodeId::new(outer, position),
                    to: NodeId::new(inner, position),
                    weight: weights[position],
                    kind: EdgeKind::Spoke { outer },
                });
            }
        }

        specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_edge_specs() {
        let specs = BoardLayout::default().edge_specs();
        assert_eq!(specs.len(), super::super::edge::EDGE_COUNT);

        let first = specs[0];
        assert_eq!(first.from.to_string(), "outer-0");
        assert_eq!(first.to.to_string(), "outer-1");
        assert_eq!(first.weight, 1);

        let wrap = specs[5];
        assert_eq!(wrap.from.to_string(), "outer-5");
        assert_eq!(wrap.to.to_string(), "outer-0");
    }

    #[test]
    fn test_spokes_stagger() {
        let specs = BoardLayout::default().edge_specs();
        let spokes: Vec<_> = specs
            .iter()
            .filter(|s| matches!(s.kind, EdgeKind::Spoke { .. }))
            .map(|s| (s.from.to_string(), s.to.to_string(), s.weight))
            .collect();

        assert_eq!(
            spokes,
            vec![
                ("outer-0".to_string(), "middle-0".to_string(), 2),
                ("outer-2".to_string(), "middle-2".to_string(), 1),
                ("outer-4".to_string(), "middle-4".to_string(), 1),
                ("middle-1".to_string(), "inner-1".to_string(), 4),
                ("middle-3".to_string(), "inner-3".to_string(), 5),
                ("middle-5".to_string(), "inner-5".to_string(), 8),
            ]
        );
    }

    #[test]
    fn test_layout_builders() {
        let layout = BoardLayout::default()
            .with_ring_weights(Circuit::Inner, [1; 6])
            .with_spoke_weights(Circuit::Middle, [2; 6])
            .with_spoke_weights(Circuit::Inner, [9; 6]);

        assert_eq!(layout.ring_weights(Circuit::Inner), &[1; 6]);
        assert_eq!(layout.spoke_weights(Circuit::Middle), Some(&[2; 6]));
        assert_eq!(layout.spoke_weights(Circuit::Inner), None);
        assert_eq!(layout.outer, BoardLayout::default().outer);
    }
}
