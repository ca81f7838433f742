//! Shared types: vertex handles, traversal records and errors.

pub mod error;
pub mod visit;

pub use error::{GraphError, GraphResult};
pub use visit::{BfsVisit, DfsVisit, NO_PARENT};

/// Maximum number of vertex slots a graph may hold.
pub const MAX_VERTEX_COUNT: usize = 1 << 28;

/// Vertex handles are 1-based; slot indices are 0-based.
///
/// Returns `None` for the reserved handle `0`.
pub fn handle_to_index(handle: usize) -> Option<usize> {
    handle.checked_sub(1)
}

/// Convert a 0-based slot index back into a public handle.
pub fn index_to_handle(index: usize) -> usize {
    index + 1
}
