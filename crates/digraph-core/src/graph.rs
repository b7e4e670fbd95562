//! Directed graph storage and mutation
//!
//! The graph is the arena for every node and edge. Nodes live in a map keyed
//! by id; edges refer to their endpoints by id. Each edge is recorded three
//! times (in the graph-level list and in both endpoints' local lists) and every
//! mutation keeps those lists consistent with each other.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::edge::Edge;
use crate::error::Result;
use crate::events::{EventKind, GraphEvent, ListenerId, Notifier};
use crate::node::{Node, NodeRef, Payload};
use crate::options::EdgeOptions;
use crate::visitor;

pub struct Graph<P = Payload> {
    nodes: HashMap<String, Node<P>>,
    /// Node ids in insertion order
    order: Vec<String>,
    edges: Vec<Edge>,
    notifier: Notifier<P>,
}

impl Graph {
    /// Create an empty graph whose nodes carry the default JSON record payload
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Graph {
            nodes: HashMap::new(),
            order: Vec::new(),
            edges: Vec::new(),
            notifier: Notifier::new(),
        }
    }
}

impl<P> Graph<P> {
    /// Add a node with a default payload.
    ///
    /// If a node with this id exists it is returned unchanged.
    pub fn add_node(&mut self, id: impl NodeRef) -> &Node<P>
    where
        P: Default,
    {
        self.add_node_with(id, P::default())
    }

    /// Add a node carrying `payload`.
    ///
    /// If a node with this id exists it is returned unchanged and `payload`
    /// is dropped.
    pub fn add_node_with(&mut self, id: impl NodeRef, payload: P) -> &Node<P> {
        let id = id.node_id();
        match self.nodes.entry(id.to_string()) {
            Entry::Occupied(entry) => {
                trace!(node_id = %id, "node_exists");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.order.push(id.to_string());
                let node = entry.insert(Node::new(id, payload));
                debug!(node_id = %id, "node_added");
                self.notifier.emit(&GraphEvent::NodeAdded(&*node));
                node
            }
        }
    }

    /// Add a zero-weight edge, creating missing endpoints
    pub fn add_edge(&mut self, source: impl NodeRef, target: impl NodeRef) -> Option<&Edge>
    where
        P: Default,
    {
        self.add_edge_with(source, target, EdgeOptions::default())
    }

    /// Add an edge from `source` to `target`, creating missing endpoints.
    ///
    /// Returns `None` when an edge between the same pair already exists; the
    /// existing edge keeps its weight.
    pub fn add_edge_with(
        &mut self,
        source: impl NodeRef,
        target: impl NodeRef,
        options: EdgeOptions,
    ) -> Option<&Edge>
    where
        P: Default,
    {
        let (source, target) = (source.node_id(), target.node_id());
        self.add_node(source);
        self.add_node(target);

        let edge = Edge::new(source, target, options);
        if self.edges.contains(&edge) {
            trace!(source = %source, target = %target, "edge_exists");
            return None;
        }

        for id in [source, target] {
            if let Some(node) = self.nodes.get_mut(id) {
                node.add_edge(edge.clone());
            }
        }
        self.edges.push(edge);
        debug!(source = %source, target = %target, weight = options.weight, "edge_added");

        let edge = self.edges.last()?;
        self.notifier.emit(&GraphEvent::EdgeAdded(edge));
        Some(edge)
    }

    /// Remove a node and every edge touching it. No-op if absent.
    pub fn remove_node(&mut self, id: impl NodeRef) {
        let id = id.node_id();
        if !self.nodes.contains_key(id) {
            trace!(node_id = %id, "node_absent");
            return;
        }

        let incident: Vec<(String, String)> = self
            .edges
            .iter()
            .filter(|edge| edge.touches(id))
            .map(|edge| (edge.source().to_string(), edge.target().to_string()))
            .collect();
        for (source, target) in &incident {
            self.remove_edge(source.as_str(), target.as_str());
        }

        self.nodes.remove(id);
        self.order.retain(|key| key != id);
        debug!(node_id = %id, edges = incident.len(), "node_removed");
        self.notifier.emit(&GraphEvent::NodeRemoved(id));
    }

    /// Remove every edge going from `source` to `target`, from the graph and
    /// from all local node lists. No-op unless both nodes and a matching
    /// edge exist.
    pub fn remove_edge(&mut self, source: impl NodeRef, target: impl NodeRef) {
        let (source, target) = (source.node_id(), target.node_id());
        if !self.has_node(source) || !self.has_node(target) || !self.has_edge(source, target) {
            trace!(source = %source, target = %target, "edge_absent");
            return;
        }

        self.edges.retain(|edge| !edge.connects(source, target));
        for node in self.nodes.values_mut() {
            node.detach_edges(source, target);
        }

        debug!(source = %source, target = %target, "edge_removed");
        self.notifier
            .emit(&GraphEvent::EdgeRemoved { source, target });
    }

    pub fn has_node(&self, node: impl NodeRef) -> bool {
        self.nodes.contains_key(node.node_id())
    }

    /// Whether an edge from `source` to `target` exists
    pub fn has_edge(&self, source: impl NodeRef, target: impl NodeRef) -> bool {
        let (source, target) = (source.node_id(), target.node_id());
        self.edges.iter().any(|edge| edge.connects(source, target))
    }

    /// Whether an edge equal to `edge` (same source and target) exists
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Remove all edges, then all nodes, emitting one event per entity
    pub fn clear(&mut self) {
        let (nodes, edges) = (self.nodes.len(), self.edges.len());

        while let Some(edge) = self.edges.first() {
            let (source, target) = (edge.source().to_string(), edge.target().to_string());
            self.remove_edge(source.as_str(), target.as_str());
        }
        for id in self.order.clone() {
            self.remove_node(id.as_str());
        }

        debug!(nodes, edges, "graph_cleared");
    }

    pub fn node(&self, id: impl NodeRef) -> Option<&Node<P>> {
        self.nodes.get(id.node_id())
    }

    /// Mutable access to a node's payload; the node's edges stay graph-owned
    pub fn payload_mut(&mut self, id: impl NodeRef) -> Option<&mut P> {
        self.nodes.get_mut(id.node_id()).map(Node::payload_mut)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<P>> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes with an edge into `id`, in edge-list order
    pub fn parents_of(&self, id: impl NodeRef) -> Vec<&Node<P>> {
        self.resolve(id, Node::parents)
    }

    /// Nodes `id` has an edge into, in edge-list order
    pub fn children_of(&self, id: impl NodeRef) -> Vec<&Node<P>> {
        self.resolve(id, Node::children)
    }

    /// Nodes reachable from `id` through one outgoing edge
    pub fn adjacents_of(&self, id: impl NodeRef) -> Vec<&Node<P>> {
        self.resolve(id, Node::adjacents)
    }

    fn resolve<'g>(
        &'g self,
        id: impl NodeRef,
        select: fn(&'g Node<P>) -> Vec<&'g str>,
    ) -> Vec<&'g Node<P>> {
        self.nodes
            .get(id.node_id())
            .map(|node| {
                select(node)
                    .into_iter()
                    .filter_map(|id| self.nodes.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Depth-first iteration over the nodes reachable from `start`
    pub fn for_each<F>(&self, start: impl NodeRef, callback: F) -> Result<()>
    where
        F: FnMut(&Node<P>),
    {
        visitor::dfs(self, start, callback)
    }

    /// Register a listener for one kind of structural change
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&GraphEvent<'_, P>) + 'static,
    {
        self.notifier.subscribe(kind, listener)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl<P> fmt::Debug for Graph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.order)
            .field("edges", &self.edges)
            .field("listeners", &self.notifier)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Record every event as a readable string
    fn record(graph: &mut Graph) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for kind in EventKind::ALL {
            let log = Rc::clone(&log);
            graph.on(kind, move |event| {
                let line = match event {
                    GraphEvent::NodeAdded(node) => format!("node.added {}", node.id()),
                    GraphEvent::EdgeAdded(edge) => {
                        format!("edge.added {}>{}", edge.source(), edge.target())
                    }
                    GraphEvent::NodeRemoved(id) => format!("node.removed {}", id),
                    GraphEvent::EdgeRemoved { source, target } => {
                        format!("edge.removed {}>{}", source, target)
                    }
                };
                log.borrow_mut().push(line);
            });
        }
        log
    }

    fn assert_consistent<P>(graph: &Graph<P>) {
        for edge in graph.edges() {
            let source = graph.node(edge.source()).unwrap();
            let target = graph.node(edge.target()).unwrap();
            assert!(source.has_edge(edge), "{} missing from source", edge);
            assert!(target.has_edge(edge), "{} missing from target", edge);
        }
        for node in graph.nodes() {
            for edge in node.edges() {
                assert!(graph.contains_edge(edge), "{} dangling on {}", edge, node.id());
            }
        }
    }

    #[test]
    fn test_add_node() {
        let mut graph = Graph::new();
        graph.add_node("foo");
        graph.add_node("bar");
        graph.add_node("baz");

        assert!(graph.has_node("foo"));
        assert!(graph.has_node("bar"));
        assert!(graph.has_node("baz"));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        let log = record(&mut graph);
        let mut payload = Payload::new();
        payload.insert("rank".to_string(), serde_json::json!(1));

        graph.add_node_with("foo", payload);
        let again = graph.add_node_with("foo", Payload::new());
        assert_eq!(again.payload()["rank"], 1);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(*log.borrow(), vec!["node.added foo"]);
    }

    #[test]
    fn test_default_payload_is_empty_record() {
        let mut graph = Graph::new();
        assert!(graph.add_node("foo").payload().is_empty());
    }

    #[test]
    fn test_payload_mut() {
        let mut graph = Graph::new();
        graph.add_node("foo");
        graph
            .payload_mut("foo")
            .unwrap()
            .insert("seen".to_string(), serde_json::json!(true));
        assert_eq!(graph.node("foo").unwrap().payload()["seen"], true);
        assert!(graph.payload_mut("missing").is_none());
    }

    #[test]
    fn test_add_edge() {
        let mut graph = Graph::new();
        graph.add_edge("foo", "bar");
        graph.add_edge("bar", "baz");

        assert!(graph.has_edge("foo", "bar"));
        assert!(graph.has_edge("bar", "baz"));
        assert!(!graph.has_edge("bar", "foo"));
        assert_eq!(graph.edges()[0].source(), "foo");
        assert_eq!(graph.edges()[0].target(), "bar");
        assert_eq!(graph.edges()[1].source(), "bar");
        assert_eq!(graph.edges()[1].target(), "baz");
    }

    #[test]
    fn test_add_edge_creates_nodes_and_local_edges() {
        let mut graph = Graph::new();
        graph.add_edge("three", "four");

        assert!(graph.has_node("three"));
        assert!(graph.has_node("four"));
        let three = graph.node("three").unwrap();
        let four = graph.node("four").unwrap();
        assert_eq!(three.edges()[0].source(), "three");
        assert_eq!(three.edges()[0].target(), "four");
        assert_eq!(four.edges()[0].source(), "three");
        assert_eq!(four.edges()[0].target(), "four");
    }

    #[test]
    fn test_add_edge_dedup_ignores_weight() {
        let mut graph = Graph::new();
        let log = record(&mut graph);

        assert!(graph
            .add_edge_with("a", "b", EdgeOptions::weighted(1.0))
            .is_some());
        assert!(graph
            .add_edge_with("a", "b", EdgeOptions::weighted(99.0))
            .is_none());

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].weight(), 1.0);
        assert_eq!(
            *log.borrow(),
            vec!["node.added a", "node.added b", "edge.added a>b"]
        );
    }

    #[test]
    fn test_self_loop_recorded_once_per_node() {
        let mut graph = Graph::new();
        graph.add_edge("a", "a");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node("a").unwrap().edges().len(), 1);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut graph = Graph::new();
        graph.add_edge("foo", "bar");
        graph.add_edge("baz", "foo");
        graph.add_edge("bar", "baz");
        let log = record(&mut graph);

        graph.remove_node("foo");

        assert!(!graph.has_node("foo"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node("bar").unwrap().edges().len(), 1);
        assert_eq!(graph.node("baz").unwrap().edges().len(), 1);
        assert_eq!(
            *log.borrow(),
            vec!["edge.removed foo>bar", "edge.removed baz>foo", "node.removed foo"]
        );
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_absent_node_is_silent() {
        let mut graph = Graph::new();
        graph.add_node("foo");
        let log = record(&mut graph);
        graph.remove_node("bar");
        assert!(log.borrow().is_empty());
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = Graph::new();
        graph.add_edge("foo", "bar");
        graph.add_edge("bar", "baz");

        graph.remove_edge("foo", "bar");
        assert_eq!(graph.node("foo").unwrap().edges().len(), 0);
        assert_eq!(graph.node("bar").unwrap().edges().len(), 1);
        assert_eq!(graph.edge_count(), 1);

        graph.remove_edge("bar", "baz");
        assert_eq!(graph.node("bar").unwrap().edges().len(), 0);
        assert_eq!(graph.node("baz").unwrap().edges().len(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_missing_edge_is_silent() {
        let mut graph = Graph::new();
        graph.add_edge("foo", "bar");
        let log = record(&mut graph);

        graph.remove_edge("bar", "foo");
        graph.remove_edge("foo", "nowhere");
        assert!(log.borrow().is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_clear_emits_in_removal_order() {
        let mut graph = Graph::new();
        graph.add_edge("foo", "bar");
        graph.add_edge("bar", "baz");
        let log = record(&mut graph);

        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(
            *log.borrow(),
            vec![
                "edge.removed foo>bar",
                "edge.removed bar>baz",
                "node.removed foo",
                "node.removed bar",
                "node.removed baz",
            ]
        );
    }

    #[test]
    fn test_off_stops_notifications() {
        let mut graph = Graph::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = graph.on(EventKind::NodeAdded, move |_| *counter.borrow_mut() += 1);

        graph.add_node("boo");
        assert!(graph.off(id));
        graph.add_node("bah");
        assert_eq!(*count.borrow(), 1);
    }

    fn ids(nodes: Vec<&Node>) -> Vec<&str> {
        nodes.into_iter().map(Node::id).collect()
    }

    #[test]
    fn test_neighbourhood_queries() {
        let mut graph = Graph::new();
        graph.add_edge("head", "SLC-W13");
        graph.add_edge("head", "SLC-W10");
        graph.add_edge("SLC-W13", "AromaLIGHT");
        graph.add_edge("SLC-W10", "AromaLIGHT");

        assert!(graph.parents_of("head").is_empty());
        assert_eq!(ids(graph.parents_of("AromaLIGHT")), vec!["SLC-W13", "SLC-W10"]);
        assert_eq!(ids(graph.children_of("head")), vec!["SLC-W13", "SLC-W10"]);
        assert!(graph.children_of("AromaLIGHT").is_empty());
        assert_eq!(ids(graph.adjacents_of("SLC-W13")), vec!["AromaLIGHT"]);
        assert!(graph.adjacents_of("missing").is_empty());
    }

    #[test]
    fn test_nodes_in_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("c", "a");
        graph.add_node("b");
        let ids: Vec<&str> = graph.nodes().map(Node::id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
