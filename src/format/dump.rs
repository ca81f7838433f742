//! Human-readable adjacency dump.

use std::fmt;

use crate::graph::DirectedGraph;

/// Terminator printed after each vertex's neighbour list.
pub const DUMP_TERMINATOR: &str = "/";

/// Display adapter printing one line per vertex: `i: a -> b -> /`.
///
/// Diagnostic output only; read graphs back with
/// [`EdgeListReader`](super::EdgeListReader).
pub struct AdjacencyDump<'a>(pub &'a DirectedGraph);

impl fmt::Display for AdjacencyDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in 1..=self.0.vertex_count() {
            write!(f, "{}: ", u)?;
            for v in self.0.neighbors(u) {
                write!(f, "{} -> ", v)?;
            }
            writeln!(f, "{}", DUMP_TERMINATOR)?;
        }
        Ok(())
    }
}
