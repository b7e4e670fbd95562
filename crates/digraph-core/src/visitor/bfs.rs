use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeRef};

/// Breadth-first walk from `start`, one level at a time.
///
/// The start node is reported alone at distance 0. Each following callback
/// receives every not-yet-visited adjacent of the previous level, in
/// discovery order, with its hop distance. The walk ends at the first level
/// that reaches nothing new.
#[tracing::instrument(skip(graph, start, callback), fields(start = %start.node_id()))]
pub fn bfs<P, S, F>(graph: &Graph<P>, start: S, mut callback: F) -> Result<()>
where
    S: NodeRef,
    F: FnMut(&[&Node<P>], usize),
{
    let head = super::resolve_start(graph, &start)?;
    let mut visited: HashSet<&str> = HashSet::from([head.id()]);
    let mut queue: VecDeque<(Vec<&Node<P>>, usize)> = VecDeque::new();

    let level = vec![head];
    callback(&level, 0);
    queue.push_back((level, 0));

    while let Some((level, distance)) = queue.pop_front() {
        let mut next = Vec::new();
        for node in &level {
            for adjacent in graph.adjacents_of(*node) {
                if visited.insert(adjacent.id()) {
                    next.push(adjacent);
                }
            }
        }
        if next.is_empty() {
            tracing::debug!(depth = distance, visited = visited.len(), "bfs_complete");
            break;
        }
        callback(&next, distance + 1);
        queue.push_back((next, distance + 1));
    }

    Ok(())
}
