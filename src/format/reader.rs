//! Reads whitespace-separated edge lists into a DirectedGraph.
//!
//! Layout: `n m` followed by `m` pairs `u v` of 1-based handles. Line breaks
//! carry no meaning; any whitespace separates tokens.

use std::io::Read;
use std::path::Path;

use crate::graph::DirectedGraph;
use crate::types::error::{GraphError, GraphResult};

/// Reader for the textual edge-list format.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a DirectedGraph.
    pub fn read_from_file(path: &Path) -> GraphResult<DirectedGraph> {
        let text = std::fs::read_to_string(path)?;
        Self::read_from_str(&text)
    }

    /// Read from any reader (e.g. standard input) into a DirectedGraph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<DirectedGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::read_from_str(&text)
    }

    /// Parse edge-list text into a DirectedGraph.
    pub fn read_from_str(text: &str) -> GraphResult<DirectedGraph> {
        let mut tokens = Tokens::new(text);

        let n = tokens.next_value(2)?;
        let m = tokens.next_value(1)?;

        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(m.min(1 << 20));
        for i in 0..m {
            let remaining = 2 * (m - i);
            let u = tokens.next_value(remaining)?;
            let v = tokens.next_value(remaining - 1)?;
            edges.push((u, v));
        }

        let trailing = tokens.remaining();
        if trailing > 0 {
            log::warn!("Ignoring {} trailing token(s) after {} edges", trailing, m);
        }

        DirectedGraph::from_edges(n, edges)
    }
}

/// Whitespace tokenizer that tracks token positions for error reports.
struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().enumerate(),
        }
    }

    /// Next token as a non-negative integer. `expected` is how many values
    /// are still owed, for the truncation error.
    fn next_value(&mut self, expected: usize) -> GraphResult<usize> {
        let (index, token) = self
            .inner
            .next()
            .ok_or(GraphError::Truncated { expected })?;
        parse_token(index + 1, token)
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

fn parse_token(position: usize, token: &str) -> GraphResult<usize> {
    token.parse::<usize>().map_err(|e| GraphError::Parse {
        token: position,
        message: if token.starts_with('-') {
            format!("negative value {:?} is not a vertex handle or count", token)
        } else {
            format!("{:?}: {}", token, e)
        },
    })
}
