//! Phase 4 tests: CLI commands and their rendered output.

use std::io::Write;
use std::path::Path;

use digraph::cli::commands::{
    cmd_add_edge, cmd_add_vertex, cmd_bfs, cmd_delete_vertex, cmd_dfs, cmd_remove_edge,
    render_bfs, render_dfs, render_ordering, render_show, render_stats,
};
use digraph::format::EdgeListReader;
use digraph::graph::DirectedGraph;
use digraph::types::error::GraphError;

use tempfile::NamedTempFile;

// ==================== Helper ====================

fn temp_graph(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn reload(path: &Path) -> DirectedGraph {
    EdgeListReader::read_from_file(path).unwrap()
}

fn reference_graph() -> DirectedGraph {
    DirectedGraph::from_edges(4, vec![(1, 2), (1, 3), (3, 4)]).unwrap()
}

// ==================== Rendering ====================

#[test]
fn test_render_show_text_is_dump() {
    let graph = reference_graph();
    assert_eq!(
        render_show(&graph, false),
        "1: 2 -> 3 -> /\n2: /\n3: 4 -> /\n4: /\n"
    );
}

#[test]
fn test_render_show_json() {
    let graph = reference_graph();
    let value: serde_json::Value = serde_json::from_str(&render_show(&graph, true)).unwrap();
    assert_eq!(value["vertices"], 4);
    assert_eq!(value["edges"], 3);
    assert_eq!(value["adjacency"][0]["neighbors"], serde_json::json!([2, 3]));
    assert_eq!(value["adjacency"][3]["neighbors"], serde_json::json!([]));
}

#[test]
fn test_render_stats() {
    let graph = DirectedGraph::from_edges(5, vec![(1, 2), (1, 3), (3, 4)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&render_stats(&graph, true)).unwrap();
    assert_eq!(value["max_out_degree"], 2);
    assert_eq!(value["sinks"], 3);
    assert_eq!(value["isolated"], 1);

    let text = render_stats(&graph, false);
    assert!(text.contains("Vertices: 5"));
    assert!(text.contains("Edges: 3"));
}

#[test]
fn test_render_bfs_text() {
    let graph = reference_graph();
    let tree = graph.breadth_first_search(1).unwrap();
    assert_eq!(
        render_bfs(&tree, false),
        "1: distance 0, parent -1\n\
         2: distance 1, parent 1\n\
         3: distance 1, parent 1\n\
         4: distance 2, parent 3\n"
    );
}

#[test]
fn test_render_bfs_json_uses_sentinel() {
    let graph = reference_graph();
    let tree = graph.breadth_first_search(3).unwrap();
    let value: serde_json::Value = serde_json::from_str(&render_bfs(&tree, true)).unwrap();
    assert_eq!(value["source"], 3);
    assert_eq!(value["visits"]["3"]["parent"], -1);
    assert_eq!(value["visits"]["4"]["distance"], 1);
    assert_eq!(value["visits"]["4"]["parent"], 3);
    assert!(value["visits"].get("1").is_none());
}

#[test]
fn test_render_dfs_with_ordering() {
    let mut graph = reference_graph();
    let forest = graph.depth_first_search(true);
    let text = render_dfs(&forest, Some(graph.get_ordering()), false);
    assert_eq!(
        text,
        "1: discovery 1, finish 8, parent -1\n\
         2: discovery 2, finish 3, parent 1\n\
         3: discovery 4, finish 7, parent 1\n\
         4: discovery 5, finish 6, parent 3\n\
         Ordering: 1 3 4 2\n"
    );

    let value: serde_json::Value =
        serde_json::from_str(&render_dfs(&forest, Some(graph.get_ordering()), true)).unwrap();
    assert_eq!(value["visits"]["4"]["parent"], 3);
    assert_eq!(value["ordering"], serde_json::json!([1, 3, 4, 2]));
}

#[test]
fn test_render_dfs_without_ordering() {
    let mut graph = reference_graph();
    let forest = graph.depth_first_search(false);
    assert!(!render_dfs(&forest, None, false).contains("Ordering"));
    let value: serde_json::Value =
        serde_json::from_str(&render_dfs(&forest, None, true)).unwrap();
    assert!(value.get("ordering").is_none());
}

#[test]
fn test_render_ordering() {
    assert_eq!(render_ordering(&[], false), "Ordering: \n");
    assert_eq!(render_ordering(&[2, 1], true), "{\"ordering\":[2,1]}\n");
}

// ==================== Commands ====================

#[test]
fn test_read_only_commands_succeed() {
    let tmp = temp_graph("4 3\n1 2\n1 3\n3 4\n");
    cmd_bfs(tmp.path(), 1, false).unwrap();
    cmd_dfs(tmp.path(), true, true).unwrap();
    assert!(matches!(
        cmd_bfs(tmp.path(), 9, false),
        Err(GraphError::InvalidVertex(9))
    ));
}

#[test]
fn test_mutation_commands_write_back() {
    let tmp = temp_graph("3 1\n1 2\n");

    cmd_add_edge(tmp.path(), 2, 5, false).unwrap();
    let graph = reload(tmp.path());
    assert_eq!(graph.vertex_count(), 5);
    assert!(graph.edge_in(2, 5));

    cmd_remove_edge(tmp.path(), 1, 2, true).unwrap();
    assert!(!reload(tmp.path()).edge_in(1, 2));

    cmd_add_vertex(tmp.path(), 8, false).unwrap();
    assert_eq!(reload(tmp.path()).vertex_count(), 8);

    cmd_delete_vertex(tmp.path(), 5, false).unwrap();
    let graph = reload(tmp.path());
    assert!(!graph.edge_in(2, 5));
    assert_eq!(graph.vertex_count(), 8);
}

#[test]
fn test_failed_mutation_leaves_file_unchanged() {
    let tmp = temp_graph("3 1\n1 2\n");
    let before = std::fs::read_to_string(tmp.path()).unwrap();

    assert!(matches!(
        cmd_remove_edge(tmp.path(), 2, 1, false),
        Err(GraphError::EdgeNotFound { .. })
    ));
    assert!(matches!(
        cmd_add_vertex(tmp.path(), 2, false),
        Err(GraphError::DuplicateVertex(2))
    ));

    assert_eq!(std::fs::read_to_string(tmp.path()).unwrap(), before);
}

#[test]
fn test_mutation_rejects_stdin() {
    match cmd_add_edge(Path::new("-"), 1, 2, false).unwrap_err() {
        GraphError::InvalidArgument(message) => assert!(message.contains("standard input")),
        e => panic!("Expected InvalidArgument, got {:?}", e),
    }
    assert!(matches!(
        cmd_delete_vertex(Path::new("-"), 1, false),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_mutation_beyond_vertex_limit_leaves_file_unchanged() {
    let tmp = temp_graph("3 1\n1 2\n");
    let before = std::fs::read_to_string(tmp.path()).unwrap();

    assert!(matches!(
        cmd_add_edge(tmp.path(), 1, usize::MAX, false),
        Err(GraphError::CapacityExceeded { .. })
    ));
    assert_eq!(std::fs::read_to_string(tmp.path()).unwrap(), before);
}
