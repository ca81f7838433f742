//! CLI command implementations.
//!
//! Each `cmd_*` loads the graph, runs one operation and prints the result.
//! The `render_*` helpers produce the printed text so it can be checked
//! without capturing stdout.

use std::io;
use std::path::Path;

use crate::format::{AdjacencyDump, EdgeListReader, EdgeListWriter};
use crate::graph::{BfsTree, DfsForest, DirectedGraph};
use crate::types::{GraphError, GraphResult};

/// Path argument meaning "standard input".
pub const STDIN_PATH: &str = "-";

/// Load a graph from `path`, or from standard input when `path` is `-`.
pub fn load_graph(path: &Path) -> GraphResult<DirectedGraph> {
    if path.as_os_str() == STDIN_PATH {
        EdgeListReader::read_from(&mut io::stdin().lock())
    } else {
        EdgeListReader::read_from_file(path)
    }
}

/// Print the adjacency lists.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    print!("{}", render_show(&graph, json));
    Ok(())
}

/// Display summary statistics about the graph.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    print!("{}", render_stats(&graph, json));
    Ok(())
}

/// Report whether `u -> v` is present.
pub fn cmd_has_edge(path: &Path, u: usize, v: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let present = graph.edge_in(u, v);
    if json {
        println!(
            "{}",
            serde_json::json!({"source": u, "target": v, "present": present})
        );
    } else {
        println!("{}", present);
    }
    Ok(())
}

/// Run a breadth-first search from `source`.
pub fn cmd_bfs(path: &Path, source: usize, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let tree = graph.breadth_first_search(source)?;
    print!("{}", render_bfs(&tree, json));
    Ok(())
}

/// Run a whole-graph depth-first search, optionally with the ordering.
pub fn cmd_dfs(path: &Path, order: bool, json: bool) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    let forest = graph.depth_first_search(order);
    let ordering = order.then(|| graph.get_ordering());
    print!("{}", render_dfs(&forest, ordering, json));
    Ok(())
}

/// Print only the descending-finish-time ordering.
pub fn cmd_order(path: &Path, json: bool) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    graph.depth_first_search(true);
    print!("{}", render_ordering(graph.get_ordering(), json));
    Ok(())
}

/// Add vertex `u` and write the graph back.
pub fn cmd_add_vertex(path: &Path, u: usize, json: bool) -> GraphResult<()> {
    mutate(path, json, "add_vertex", |g| g.add_vertex(u))
}

/// Add the edge `u -> v` and write the graph back.
pub fn cmd_add_edge(path: &Path, u: usize, v: usize, json: bool) -> GraphResult<()> {
    mutate(path, json, "add_edge", |g| g.add_edge(u, v))
}

/// Remove the first `u -> v` edge and write the graph back.
pub fn cmd_remove_edge(path: &Path, u: usize, v: usize, json: bool) -> GraphResult<()> {
    mutate(path, json, "remove_edge", |g| g.remove_edge(u, v))
}

/// Delete vertex `u`'s edges and write the graph back.
pub fn cmd_delete_vertex(path: &Path, u: usize, json: bool) -> GraphResult<()> {
    mutate(path, json, "delete_vertex", |g| g.delete_vertex(u))
}

fn mutate<F>(path: &Path, json: bool, op: &str, f: F) -> GraphResult<()>
where
    F: FnOnce(&mut DirectedGraph) -> GraphResult<()>,
{
    if path.as_os_str() == STDIN_PATH {
        return Err(GraphError::InvalidArgument(format!(
            "{} needs a file path, not standard input",
            op
        )));
    }

    let mut graph = EdgeListReader::read_from_file(path)?;
    f(&mut graph)?;
    EdgeListWriter::write_to_file(&graph, path)?;
    log::debug!("{} applied to {}", op, path.display());

    if json {
        println!(
            "{}",
            serde_json::json!({
                "operation": op,
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
            })
        );
    } else {
        println!(
            "{} ok: {} vertices, {} edges in {}",
            op,
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
    }
    Ok(())
}

/// Text or JSON view of the adjacency lists.
pub fn render_show(graph: &DirectedGraph, json: bool) -> String {
    if json {
        let adjacency: Vec<serde_json::Value> = (1..=graph.vertex_count())
            .map(|u| {
                let neighbors: Vec<usize> = graph.neighbors(u).collect();
                serde_json::json!({"vertex": u, "neighbors": neighbors})
            })
            .collect();
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        });
        format!(
            "{}\n",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )
    } else {
        AdjacencyDump(graph).to_string()
    }
}

/// Text or JSON summary statistics.
pub fn render_stats(graph: &DirectedGraph, json: bool) -> String {
    let n = graph.vertex_count();
    let mut in_degree = vec![0usize; n];
    for (_, v) in graph.edges() {
        in_degree[v - 1] += 1;
    }
    let max_out = (1..=n).map(|u| graph.out_degree(u)).max().unwrap_or(0);
    let sinks = (1..=n).filter(|&u| graph.out_degree(u) == 0).count();
    let isolated = (1..=n)
        .filter(|&u| graph.out_degree(u) == 0 && in_degree[u - 1] == 0)
        .count();

    if json {
        let info = serde_json::json!({
            "vertices": n,
            "edges": graph.edge_count(),
            "max_out_degree": max_out,
            "sinks": sinks,
            "isolated": isolated,
        });
        format!(
            "{}\n",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )
    } else {
        let mut out = String::from("Graph Statistics:\n");
        out.push_str(&format!("  Vertices: {}\n", n));
        out.push_str(&format!("  Edges: {}\n", graph.edge_count()));
        out.push_str(&format!("  Max out-degree: {}\n", max_out));
        out.push_str(&format!("  Sinks: {}\n", sinks));
        out.push_str(&format!("  Isolated: {}\n", isolated));
        out
    }
}

/// Text or JSON BFS result, one entry per reachable vertex.
pub fn render_bfs(tree: &BfsTree, json: bool) -> String {
    if json {
        let info = serde_json::json!({
            "source": tree.source(),
            "visits": tree.as_map(),
        });
        format!(
            "{}\n",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )
    } else {
        tree.iter()
            .map(|(v, visit)| {
                format!(
                    "{}: distance {}, parent {}\n",
                    v,
                    visit.distance,
                    visit.parent_handle()
                )
            })
            .collect()
    }
}

/// Text or JSON DFS result, with the ordering appended when given.
pub fn render_dfs(forest: &DfsForest, ordering: Option<&[usize]>, json: bool) -> String {
    if json {
        let mut info = serde_json::json!({ "visits": forest.to_map() });
        if let Some(ordering) = ordering {
            info["ordering"] = serde_json::json!(ordering);
        }
        format!(
            "{}\n",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )
    } else {
        let mut out: String = forest
            .iter()
            .map(|(v, visit)| {
                format!(
                    "{}: discovery {}, finish {}, parent {}\n",
                    v,
                    visit.discovery,
                    visit.finish,
                    visit.parent_handle()
                )
            })
            .collect();
        if let Some(ordering) = ordering {
            out.push_str(&render_ordering(ordering, false));
        }
        out
    }
}

/// Text or JSON rendering of an ordering.
pub fn render_ordering(ordering: &[usize], json: bool) -> String {
    if json {
        format!("{}\n", serde_json::json!({ "ordering": ordering }))
    } else {
        let joined: Vec<String> = ordering.iter().map(|v| v.to_string()).collect();
        format!("Ordering: {}\n", joined.join(" "))
    }
}
