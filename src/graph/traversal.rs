//! Graph traversal algorithms (BFS, whole-graph DFS).

use std::collections::{BTreeMap, VecDeque};

use crate::types::{handle_to_index, index_to_handle, BfsVisit, DfsVisit, GraphError, GraphResult};

use super::DirectedGraph;

/// Visitation state for depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet discovered.
    White,
    /// Discovered, subtree still open.
    Gray,
    /// Subtree finished.
    Black,
}

/// Result of a breadth-first search: every vertex reachable from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    source: usize,
    visits: BTreeMap<usize, BfsVisit>,
}

impl BfsTree {
    /// Handle the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Visit record for `handle`, or `None` if it was not reached.
    pub fn get(&self, handle: usize) -> Option<&BfsVisit> {
        self.visits.get(&handle)
    }

    /// Whether `handle` was reached.
    pub fn contains(&self, handle: usize) -> bool {
        self.visits.contains_key(&handle)
    }

    /// Number of reachable vertices, including the source.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Never true for a successful search; the source always reaches itself.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Reached vertices in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BfsVisit)> {
        self.visits.iter().map(|(&h, v)| (h, v))
    }

    /// Borrow the handle → visit mapping.
    pub fn as_map(&self) -> &BTreeMap<usize, BfsVisit> {
        &self.visits
    }

    /// Shortest-hop path from the source to `target`, both inclusive.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        let mut path = vec![target];
        let mut current = self.visits.get(&target)?;
        while let Some(parent) = current.parent {
            path.push(parent);
            current = self.visits.get(&parent)?;
        }
        path.reverse();
        Some(path)
    }
}

/// Result of a whole-graph depth-first search: one record per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsForest {
    visits: Vec<DfsVisit>,
}

impl DfsForest {
    /// Visit record for `handle`, or `None` if it is not a vertex.
    pub fn get(&self, handle: usize) -> Option<&DfsVisit> {
        handle_to_index(handle).and_then(|i| self.visits.get(i))
    }

    /// Number of vertices covered (always the graph's vertex count).
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// True for a graph with no vertices.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// All vertices in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &DfsVisit)> {
        self.visits
            .iter()
            .enumerate()
            .map(|(i, v)| (index_to_handle(i), v))
    }

    /// Handles of the tree roots, in the order they were started.
    pub fn roots(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, v)| v.parent.is_none())
            .map(|(h, _)| h)
            .collect()
    }

    /// Owned handle → visit mapping.
    pub fn to_map(&self) -> BTreeMap<usize, DfsVisit> {
        self.iter().map(|(h, v)| (h, *v)).collect()
    }

    /// All handles sorted by descending finish time.
    ///
    /// Finish times are unique, so no tie-break is needed. This is a
    /// topological order only when the graph is acyclic.
    pub fn ordering(&self) -> Vec<usize> {
        let mut handles: Vec<usize> = (1..=self.visits.len()).collect();
        handles.sort_unstable_by(|&a, &b| {
            self.visits[b - 1].finish.cmp(&self.visits[a - 1].finish)
        });
        handles
    }
}

/// BFS from `source`, following out-edges in insertion order.
pub fn bfs_traverse(graph: &DirectedGraph, source: usize) -> GraphResult<BfsTree> {
    let adjacency = graph.adjacency();
    let start = handle_to_index(source)
        .filter(|&i| i < adjacency.len())
        .ok_or(GraphError::InvalidVertex(source))?;

    let mut visited = vec![false; adjacency.len()];
    let mut visits: BTreeMap<usize, BfsVisit> = BTreeMap::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    visited[start] = true;
    visits.insert(
        source,
        BfsVisit {
            distance: 0,
            parent: None,
        },
    );
    queue.push_back((start, 0));

    while let Some((current, distance)) = queue.pop_front() {
        for &next in &adjacency[current] {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            visits.insert(
                index_to_handle(next),
                BfsVisit {
                    distance: distance + 1,
                    parent: Some(index_to_handle(current)),
                },
            );
            queue.push_back((next, distance + 1));
        }
    }

    log::debug!("BFS from {} reached {} vertices", source, visits.len());
    Ok(BfsTree { source, visits })
}

/// DFS over every vertex, trying roots in ascending order.
///
/// One clock is shared by all trees and ticks on every discovery and every
/// finish, so timestamps fall in `[1, 2 * vertex_count]`. Frames on the
/// explicit stack hold the next adjacency position to examine, which keeps
/// visit order identical to the recursive formulation.
pub fn dfs_forest(graph: &DirectedGraph) -> DfsForest {
    let adjacency = graph.adjacency();
    let n = adjacency.len();

    let mut color = vec![Color::White; n];
    let mut visits = vec![
        DfsVisit {
            discovery: 0,
            finish: 0,
            parent: None,
        };
        n
    ];
    let mut clock = 0usize;
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }
        clock += 1;
        visits[root].discovery = clock;
        color[root] = Color::Gray;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, pos) = *frame;
            match adjacency[u].get(pos) {
                Some(&v) => {
                    frame.1 += 1;
                    if color[v] == Color::White {
                        visits[v].parent = Some(index_to_handle(u));
                        clock += 1;
                        visits[v].discovery = clock;
                        color[v] = Color::Gray;
                        stack.push((v, 0));
                    }
                }
                None => {
                    stack.pop();
                    clock += 1;
                    visits[u].finish = clock;
                    color[u] = Color::Black;
                }
            }
        }
    }

    log::debug!("DFS covered {} vertices, clock ended at {}", n, clock);
    DfsForest { visits }
}
