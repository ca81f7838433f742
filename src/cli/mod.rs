//! Command-line front end for the `dgraph` tool.

pub mod commands;
