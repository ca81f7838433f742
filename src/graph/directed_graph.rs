//! Core graph structure — a growable vector of adjacency lists.

use crate::types::{
    handle_to_index, index_to_handle, GraphError, GraphResult, MAX_VERTEX_COUNT,
};

use super::traversal::{bfs_traverse, dfs_forest, BfsTree, DfsForest};

/// A directed graph addressed by 1-based vertex handles.
///
/// Slot `i` of the adjacency store holds the out-neighbours of handle `i + 1`,
/// as 0-based indices, in insertion order. Multi-edges are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Out-neighbour lists, one per vertex slot.
    adjacency: Vec<Vec<usize>>,
    /// Handles by descending finish time from the last ordering DFS.
    ordering: Vec<usize>,
}

impl DirectedGraph {
    /// Create a new empty graph (no vertices).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `n` empty vertex slots, then insert `edges`.
    pub fn from_edges<I>(n: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new();
        graph.load(n, edges)?;
        Ok(graph)
    }

    /// Reinitialise to exactly `n` empty slots and apply each edge through
    /// the `add_edge` growth rules.
    ///
    /// The graph is left untouched if any handle is zero or the vertex count
    /// cannot be allocated. The ordering cache is cleared.
    pub fn load<I>(&mut self, n: usize, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut fresh = Self::new();
        fresh.ensure_capacity(n)?;
        let mut count = 0usize;
        for (u, v) in edges {
            fresh.add_edge(u, v)?;
            count += 1;
        }
        if fresh.vertex_count() > n {
            log::warn!(
                "Edge list declared {} vertices but references up to {}",
                n,
                fresh.vertex_count()
            );
        }
        log::debug!(
            "Loaded graph with {} vertices and {} edges",
            fresh.vertex_count(),
            count
        );
        *self = fresh;
        Ok(())
    }

    /// Number of vertex slots.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// True when the graph has no vertex slots.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `handle` names an allocated slot.
    pub fn contains_vertex(&self, handle: usize) -> bool {
        self.slot(handle).is_some()
    }

    /// Out-neighbour handles of `u` in insertion order. Empty if `u` is not
    /// an allocated vertex.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.slot(u)
            .map(|i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&v| index_to_handle(v))
    }

    /// Number of out-edges of `u` (0 if `u` is not allocated).
    pub fn out_degree(&self, u: usize) -> usize {
        self.slot(u).map(|i| self.adjacency[i].len()).unwrap_or(0)
    }

    /// All edges as `(u, v)` handle pairs, by source then insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .map(move |&v| (index_to_handle(u), index_to_handle(v)))
        })
    }

    /// Raw 0-based adjacency store, for the traversals and writers.
    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Grow the store so that it holds at least `k` slots. New slots are
    /// empty; existing lists are preserved. Never shrinks.
    ///
    /// Fails with `CapacityExceeded`, leaving the graph unchanged, when `k`
    /// is above `MAX_VERTEX_COUNT` or the slots cannot be allocated.
    pub fn ensure_capacity(&mut self, k: usize) -> GraphResult<()> {
        let current = self.adjacency.len();
        if k <= current {
            return Ok(());
        }
        let exceeded = GraphError::CapacityExceeded {
            requested: k,
            limit: MAX_VERTEX_COUNT,
        };
        if k > MAX_VERTEX_COUNT {
            return Err(exceeded);
        }
        if let Err(e) = self.adjacency.try_reserve_exact(k - current) {
            log::warn!("Allocation for {} vertices failed: {}", k, e);
            return Err(exceeded);
        }
        log::debug!("Growing graph from {} to {} vertices", current, k);
        self.adjacency.resize_with(k, Vec::new);
        Ok(())
    }

    /// Introduce vertex `u`, growing capacity to exactly `u`.
    pub fn add_vertex(&mut self, u: usize) -> GraphResult<()> {
        let idx = handle_to_index(u).ok_or(GraphError::InvalidVertex(u))?;
        if idx < self.vertex_count() {
            return Err(GraphError::DuplicateVertex(u));
        }
        self.ensure_capacity(u)
    }

    /// Append the edge `u -> v`, growing capacity to `max(u, v)` if needed.
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        let from = handle_to_index(u).ok_or(GraphError::InvalidVertex(u))?;
        let to = handle_to_index(v).ok_or(GraphError::InvalidVertex(v))?;
        self.ensure_capacity(u.max(v))?;
        self.adjacency[from].push(to);
        Ok(())
    }

    /// Remove the first occurrence of `v` from `u`'s adjacency list.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        let from = handle_to_index(u).ok_or(GraphError::InvalidVertex(u))?;
        let to = handle_to_index(v).ok_or(GraphError::InvalidVertex(v))?;
        if let Some(list) = self.adjacency.get_mut(from) {
            if let Some(pos) = list.iter().position(|&w| w == to) {
                list.remove(pos);
                return Ok(());
            }
        }
        Err(GraphError::EdgeNotFound {
            from: u,
            to: Some(v),
        })
    }

    /// Whether `u -> v` exists. Out-of-range handles answer `false`.
    pub fn edge_in(&self, u: usize, v: usize) -> bool {
        match (self.slot(u), self.slot(v)) {
            (Some(from), Some(to)) => self.adjacency[from].contains(&to),
            _ => false,
        }
    }

    /// Clear `u`'s out-edges and drop the first edge into `u` from every
    /// other vertex. The slot itself stays allocated.
    pub fn delete_vertex(&mut self, u: usize) -> GraphResult<()> {
        let idx = handle_to_index(u).ok_or(GraphError::InvalidVertex(u))?;
        if idx >= self.vertex_count() {
            return Err(GraphError::EdgeNotFound { from: u, to: None });
        }

        self.adjacency[idx].clear();
        for (i, list) in self.adjacency.iter_mut().enumerate() {
            if i == idx {
                continue;
            }
            if let Some(pos) = list.iter().position(|&w| w == idx) {
                list.remove(pos);
            }
        }
        Ok(())
    }

    /// Breadth-first search from `source`.
    pub fn breadth_first_search(&self, source: usize) -> GraphResult<BfsTree> {
        bfs_traverse(self, source)
    }

    /// Depth-first search over every vertex. When `populate_ordering` is set
    /// the descending-finish-time ordering replaces the ordering cache.
    pub fn depth_first_search(&mut self, populate_ordering: bool) -> DfsForest {
        let forest = dfs_forest(self);
        if populate_ordering {
            self.ordering = forest.ordering();
        }
        forest
    }

    /// The ordering cache from the last ordering DFS (empty if none ran).
    pub fn get_ordering(&self) -> &[usize] {
        &self.ordering
    }

    fn slot(&self, handle: usize) -> Option<usize> {
        handle_to_index(handle).filter(|&i| i < self.adjacency.len())
    }
}
