//! digraph — a growable directed graph with classical traversals.
//!
//! Vertices are addressed by 1-based handles. Adding an edge or vertex past
//! the current capacity grows the graph; breadth-first search reports
//! shortest-hop distances and parents, and whole-graph depth-first search
//! reports discovery/finish times plus a descending-finish-time ordering.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{AdjacencyDump, EdgeListReader, EdgeListWriter};
pub use graph::{BfsTree, DfsForest, DirectedGraph, GraphBuilder};
pub use types::{BfsVisit, DfsVisit, GraphError, GraphResult, MAX_VERTEX_COUNT, NO_PARENT};
