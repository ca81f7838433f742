//! Fluent API for building DirectedGraph instances.

use crate::types::GraphResult;

use super::DirectedGraph;

/// Fluent builder for constructing a DirectedGraph.
///
/// Edges are applied in the order they were given, so adjacency order (and
/// therefore traversal order) matches the call sequence.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a new builder with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `n` vertex slots up front.
    pub fn vertices(&mut self, n: usize) -> &mut Self {
        self.vertices = self.vertices.max(n);
        self
    }

    /// Add the edge `u -> v`.
    pub fn edge(&mut self, u: usize, v: usize) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Add a chain of edges `path[0] -> path[1] -> ...`.
    pub fn path(&mut self, path: &[usize]) -> &mut Self {
        for pair in path.windows(2) {
            self.edges.push((pair[0], pair[1]));
        }
        self
    }

    /// Add every edge from an iterator.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final DirectedGraph.
    pub fn build(&self) -> GraphResult<DirectedGraph> {
        DirectedGraph::from_edges(self.vertices, self.edges.iter().copied())
    }
}
