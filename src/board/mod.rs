//! The three-ring board.
//!
//! The topology is fixed; only edge weights come from configuration.
//!
//! ## Key Types
//!
//! - `NodeId` / `Node`: the 18 board positions and their geometry
//! - `Circuit`: the outer, middle and inner rings
//! - `EdgeId` / `Edge`: the 24 weighted connections
//! - `BoardLayout`: weight tables
//! - `BoardGraph`: the built, immutable graph

pub mod edge;
pub mod graph;
pub mod layout;
pub mod node;

pub use edge::{Edge, EdgeId, EdgeKind, EDGE_COUNT};
pub use graph::BoardGraph;
pub use layout::{BoardLayout, EdgeSpec, WeightTable};
pub use node::{Circuit, Node, NodeId, ParseNodeError, Point, NODES_PER_CIRCUIT, NODE_COUNT};
