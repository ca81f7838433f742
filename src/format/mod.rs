//! Text I/O: the `n m` edge-list format and the adjacency dump.

pub mod dump;
pub mod reader;
pub mod writer;

pub use dump::{AdjacencyDump, DUMP_TERMINATOR};
pub use reader::EdgeListReader;
pub use writer::EdgeListWriter;
