//! Writes a DirectedGraph back out in edge-list format.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::graph::DirectedGraph;
use crate::types::error::GraphResult;

/// Writer for the textual edge-list format.
///
/// The header declares the full vertex count so isolated trailing vertices
/// survive a round trip. The ordering cache is not written.
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write a DirectedGraph to an edge-list file.
    ///
    /// The graph is written to a sibling temporary file which then replaces
    /// `path`, so a failed write leaves any existing file intact.
    pub fn write_to_file(graph: &DirectedGraph, path: &Path) -> GraphResult<()> {
        let tmp_path = sibling_temp_path(path)?;
        if let Err(e) = Self::write_new_file(graph, &tmp_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e);
        }
        if let Err(e) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn write_new_file(graph: &DirectedGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }

    /// Write a DirectedGraph to any writer.
    pub fn write_to(graph: &DirectedGraph, writer: &mut impl Write) -> GraphResult<()> {
        writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
        for (u, v) in graph.edges() {
            writeln!(writer, "{} {}", u, v)?;
        }
        Ok(())
    }

    /// Render a DirectedGraph as an edge-list string.
    pub fn render(graph: &DirectedGraph) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = Self::write_to(graph, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// `dir/.name.<pid>.tmp` next to `path`.
fn sibling_temp_path(path: &Path) -> GraphResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let tmp_name = format!(".{}.{}.tmp", name.to_string_lossy(), std::process::id());
    Ok(path.with_file_name(tmp_name))
}
