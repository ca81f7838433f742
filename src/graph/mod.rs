//! In-memory graph operations — the core data structure and its traversals.

pub mod builder;
pub mod directed_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use directed_graph::DirectedGraph;
pub use traversal::{bfs_traverse, dfs_forest, BfsTree, DfsForest};
