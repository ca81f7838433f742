//! CLI entry point for the `dgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use digraph::cli::commands;
use digraph::GraphError;

#[derive(Parser)]
#[command(
    name = "dgraph",
    about = "dgraph — inspect and edit directed graphs stored as `n m` edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each vertex's adjacency list
    Show {
        /// Edge-list file, or "-" for standard input
        file: PathBuf,
    },
    /// Summary statistics about the graph
    Stats {
        /// Edge-list file, or "-" for standard input
        file: PathBuf,
    },
    /// Test whether an edge is present
    HasEdge {
        /// Edge-list file, or "-" for standard input
        file: PathBuf,
        /// Source vertex handle
        u: usize,
        /// Target vertex handle
        v: usize,
    },
    /// Breadth-first search from a source vertex
    Bfs {
        /// Edge-list file, or "-" for standard input
        file: PathBuf,
        /// Source vertex handle (1-based)
        source: usize,
    },
    /// Depth-first search over every vertex
    Dfs {
        /// Edge-list file, or "-" for standard input
        file: PathBuf,
        /// Also print the descending-finish-time ordering
        #[arg(long)]
        order: bool,
    },
    /// Print the descending-finish-time ordering
    Order {
        /// Edge-list file, or "-" for standard input
        file: PathBuf,
    },
    /// Add a vertex, growing the graph to that handle
    AddVertex {
        /// Edge-list file to update
        file: PathBuf,
        /// Vertex handle
        u: usize,
    },
    /// Add a directed edge
    AddEdge {
        /// Edge-list file to update
        file: PathBuf,
        /// Source vertex handle
        u: usize,
        /// Target vertex handle
        v: usize,
    },
    /// Remove the first matching directed edge
    RemoveEdge {
        /// Edge-list file to update
        file: PathBuf,
        /// Source vertex handle
        u: usize,
        /// Target vertex handle
        v: usize,
    },
    /// Clear a vertex's edges and one incoming edge from every other vertex
    DeleteVertex {
        /// Edge-list file to update
        file: PathBuf,
        /// Vertex handle
        u: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid output format: {}", other);
            process::exit(3);
        }
    };

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
        Commands::HasEdge { file, u, v } => commands::cmd_has_edge(&file, u, v, json),
        Commands::Bfs { file, source } => commands::cmd_bfs(&file, source, json),
        Commands::Dfs { file, order } => commands::cmd_dfs(&file, order, json),
        Commands::Order { file } => commands::cmd_order(&file, json),
        Commands::AddVertex { file, u } => commands::cmd_add_vertex(&file, u, json),
        Commands::AddEdge { file, u, v } => commands::cmd_add_edge(&file, u, v, json),
        Commands::RemoveEdge { file, u, v } => commands::cmd_remove_edge(&file, u, v, json),
        Commands::DeleteVertex { file, u } => commands::cmd_delete_vertex(&file, u, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } | GraphError::Truncated { .. } => 2,
            GraphError::InvalidArgument(_) => 3,
            GraphError::InvalidVertex(_)
            | GraphError::DuplicateVertex(_)
            | GraphError::EdgeNotFound { .. }
            | GraphError::CapacityExceeded { .. } => 4,
        };
        process::exit(code);
    }
}
