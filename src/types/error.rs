//! Error types for the digraph library.

use thiserror::Error;

/// All errors that can occur in the digraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex handle is zero or outside the current capacity.
    #[error("Invalid vertex handle: {0}")]
    InvalidVertex(usize),

    /// Vertex handle already lies within the current capacity.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(usize),

    /// No matching edge to remove, or the vertex lies outside capacity.
    #[error("Edge not found: {}", describe_edge(.from, .to))]
    EdgeNotFound { from: usize, to: Option<usize> },

    /// Growing to the requested vertex count would exceed the vertex limit
    /// or could not be allocated.
    #[error("Cannot grow graph to {requested} vertices (limit {limit})")]
    CapacityExceeded { requested: usize, limit: usize },

    /// A command-line argument is not acceptable for the requested command.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A token in the edge-list input is not a non-negative integer.
    #[error("Parse error at token {token}: {message}")]
    Parse { token: usize, message: String },

    /// Input ended before the declared number of values was read.
    #[error("Input is truncated: expected {expected} more value(s)")]
    Truncated { expected: usize },
}

fn describe_edge(from: &usize, to: &Option<usize>) -> String {
    match to {
        Some(to) => format!("{} -> {}", from, to),
        None => format!("vertex {} has no adjacency slot", from),
    }
}

/// Convenience result type for digraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
