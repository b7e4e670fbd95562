//! Traversal visitors
//!
//! Each visitor reads a graph without mutating it and reports what it
//! finds through a callback:
//! - [`dfs`]: depth-first spanning walk, each reachable node once
//! - [`bfs`]: level-order walk, one callback per level with its hop distance
//! - [`stacked`]: every simple outgoing path, one callback per extension
//!
//! All three walk with an explicit stack or queue rather than recursion, so
//! deep graphs cannot exhaust the call stack.

mod bfs;
mod dfs;
mod stacked;

pub use bfs::bfs;
pub use dfs::dfs;
pub use stacked::stacked;

use crate::bail_not_found;
use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeRef};

/// Look up the node a traversal starts from
fn resolve_start<'g, P>(graph: &'g Graph<P>, start: &impl NodeRef) -> Result<&'g Node<P>> {
    let Some(node) = graph.node(start.node_id()) else {
        bail_not_found!("start node", start.node_id());
    };
    Ok(node)
}
