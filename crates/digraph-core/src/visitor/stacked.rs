use std::slice::Iter;

use crate::edge::Edge;
use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeRef};

/// Enumerate every simple path leaving `start` along outgoing edges.
///
/// Each time the walk extends the current path by one edge, the callback
/// receives the node just reached, the path so far (start node first) and
/// the summed weight of the path's edges. A node already on the current
/// path is never entered again, but the same node may appear on many
/// different paths.
#[tracing::instrument(skip(graph, start, callback), fields(start = %start.node_id()))]
pub fn stacked<P, S, F>(graph: &Graph<P>, start: S, mut callback: F) -> Result<()>
where
    S: NodeRef,
    F: FnMut(&Node<P>, &[&Node<P>], f64),
{
    let from = super::resolve_start(graph, &start)?;

    // stack[i] is entered through frames[i - 1]; weights[i] is the path weight up to stack[i]
    let mut stack: Vec<&Node<P>> = vec![from];
    let mut weights: Vec<f64> = vec![0.0];
    let mut frames: Vec<Iter<'_, Edge>> = vec![from.edges().iter()];
    let mut extensions = 0usize;

    while let Some(edges) = frames.last_mut() {
        let Some(edge) = edges.next() else {
            frames.pop();
            stack.pop();
            weights.pop();
            continue;
        };

        // Incoming edges and self-loops target the current node, which is on the stack
        if stack.iter().any(|node| node.id() == edge.target()) {
            continue;
        }
        let Some(node) = graph.node(edge.target()) else {
            continue;
        };

        let weight = weights.last().copied().unwrap_or(0.0) + edge.weight();
        stack.push(node);
        weights.push(weight);
        extensions += 1;
        callback(node, &stack, weight);
        frames.push(node.edges().iter());
    }

    tracing::debug!(extensions, "stacked_complete");
    Ok(())
}
