//! `digraph dfs` and `digraph bfs`

use digraph_core::error::Result;
use digraph_core::visitor::{bfs, dfs};
use digraph_core::Graph;
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Serialize)]
struct Level {
    distance: usize,
    nodes: Vec<String>,
}

/// Execute `digraph dfs`
pub fn execute_dfs(cli: &Cli, graph: &Graph, start: &str) -> Result<()> {
    let mut visited = Vec::new();
    dfs(graph, start, |node| visited.push(node.id().to_string()))?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "visited": visited,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for id in &visited {
                println!("{}", id);
            }
            if !cli.quiet {
                println!("Visited {} node(s) from {}", visited.len(), start);
            }
        }
    }
    Ok(())
}

/// Execute `digraph bfs`
pub fn execute_bfs(cli: &Cli, graph: &Graph, start: &str) -> Result<()> {
    let mut levels = Vec::new();
    bfs(graph, start, |nodes, distance| {
        levels.push(Level {
            distance,
            nodes: nodes.iter().map(|node| node.id().to_string()).collect(),
        });
    })?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "levels": levels,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for level in &levels {
                println!("{}: {}", level.distance, level.nodes.join(", "));
            }
        }
    }
    Ok(())
}
