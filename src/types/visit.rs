//! Per-vertex records produced by the traversals.

use serde::{Serialize, Serializer};

/// Parent sentinel reported for a BFS source or a DFS tree root.
pub const NO_PARENT: i64 = -1;

/// What breadth-first search learned about one reachable vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BfsVisit {
    /// Hop count from the source (0 for the source itself).
    pub distance: usize,
    /// Handle of the vertex that first discovered this one.
    #[serde(serialize_with = "serialize_parent")]
    pub parent: Option<usize>,
}

impl BfsVisit {
    /// Parent as a signed handle, `-1` when there is none.
    pub fn parent_handle(&self) -> i64 {
        parent_or_sentinel(self.parent)
    }

    /// The `(distance, parent)` pair with the `-1` sentinel applied.
    pub fn as_pair(&self) -> (usize, i64) {
        (self.distance, self.parent_handle())
    }
}

/// What depth-first search recorded for one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DfsVisit {
    /// Clock value when the vertex turned gray.
    pub discovery: usize,
    /// Clock value when the vertex turned black.
    pub finish: usize,
    /// Handle of the vertex whose subtree contains this one; `None` for roots.
    #[serde(serialize_with = "serialize_parent")]
    pub parent: Option<usize>,
}

impl DfsVisit {
    /// Parent as a signed handle, `-1` for tree roots.
    pub fn parent_handle(&self) -> i64 {
        parent_or_sentinel(self.parent)
    }

    /// The `(discovery, finish, parent)` triple with the `-1` sentinel applied.
    pub fn as_triple(&self) -> (usize, usize, i64) {
        (self.discovery, self.finish, self.parent_handle())
    }
}

fn parent_or_sentinel(parent: Option<usize>) -> i64 {
    parent.map(|p| p as i64).unwrap_or(NO_PARENT)
}

fn serialize_parent<S: Serializer>(parent: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(parent_or_sentinel(*parent))
}
