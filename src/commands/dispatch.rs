//! Command dispatch logic for digraph
use std::time::Instant;

use digraph_core::error::Result;
use digraph_core::Graph;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let graph = build_graph(cli);

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed = ?start.elapsed(),
        "build_graph"
    );

    match &cli.command {
        Commands::Dfs { start } => commands::traverse::execute_dfs(cli, &graph, start),
        Commands::Bfs { start } => commands::traverse::execute_bfs(cli, &graph, start),
        Commands::Routes { from, to, length } => {
            commands::routes::execute_routes(cli, &graph, from, to.as_deref(), *length)
        }
        Commands::FindRoute { ids } => commands::routes::execute_find_route(cli, &graph, ids),
        Commands::Stats => commands::stats::execute(cli, &graph),
    }
}

/// Build the graph described by `--node` and `--edge` arguments.
/// Nodes come first so isolated ids keep their position.
fn build_graph(cli: &Cli) -> Graph {
    let mut graph = Graph::new();
    for id in &cli.nodes {
        graph.add_node(id);
    }
    for spec in &cli.edges {
        if graph
            .add_edge_with(&spec.source, &spec.target, spec.options)
            .is_none()
        {
            tracing::warn!(source = %spec.source, target = %spec.target, "duplicate_edge_ignored");
        }
    }
    graph
}
