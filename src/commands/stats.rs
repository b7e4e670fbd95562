//! `digraph stats`

use digraph_core::error::Result;
use digraph_core::Graph;
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Serialize)]
struct NodeStats {
    id: String,
    in_degree: usize,
    out_degree: usize,
}

/// Execute `digraph stats`
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let nodes: Vec<NodeStats> = graph
        .nodes()
        .map(|node| NodeStats {
            id: node.id().to_string(),
            in_degree: node.parents().len(),
            out_degree: node.children().len(),
        })
        .collect();
    let total_weight: f64 = graph.edges().iter().map(|edge| edge.weight()).sum();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "node_count": graph.node_count(),
                "edge_count": graph.edge_count(),
                "total_weight": total_weight,
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Nodes: {}", graph.node_count());
            println!("Edges: {}", graph.edge_count());
            println!("Total weight: {}", total_weight);
            for node in &nodes {
                println!("  {} (in {}, out {})", node.id, node.in_degree, node.out_degree);
            }
        }
    }
    Ok(())
}
