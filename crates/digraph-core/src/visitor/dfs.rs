use std::collections::HashSet;

use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeRef};

/// Adjacents of one node still waiting to be explored
struct Frame<'g, P> {
    pending: std::vec::IntoIter<&'g Node<P>>,
}

impl<'g, P> Frame<'g, P> {
    fn new(graph: &'g Graph<P>, node: &'g Node<P>) -> Self {
        Frame {
            pending: graph.adjacents_of(node).into_iter(),
        }
    }
}

/// Depth-first walk from `start`.
///
/// Calls back once per newly reached node, before descending into it. The
/// start node is marked visited but never reported, and no node is reported
/// twice even when several paths reach it.
#[tracing::instrument(skip(graph, start, callback), fields(start = %start.node_id()))]
pub fn dfs<P, S, F>(graph: &Graph<P>, start: S, mut callback: F) -> Result<()>
where
    S: NodeRef,
    F: FnMut(&Node<P>),
{
    let head = super::resolve_start(graph, &start)?;
    let mut visited: HashSet<&str> = HashSet::from([head.id()]);
    let mut stack = vec![Frame::new(graph, head)];

    while let Some(frame) = stack.last_mut() {
        match frame.pending.next() {
            Some(node) => {
                if visited.insert(node.id()) {
                    callback(node);
                    stack.push(Frame::new(graph, node));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(visited = visited.len(), "dfs_complete");
    Ok(())
}
