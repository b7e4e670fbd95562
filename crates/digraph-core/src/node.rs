use std::hash::{Hash, Hasher};

use crate::edge::Edge;

/// Default payload carried by nodes: an opaque JSON record, empty unless supplied
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Anything that names a node: a bare id or a node itself
pub trait NodeRef {
    fn node_id(&self) -> &str;
}

impl NodeRef for str {
    fn node_id(&self) -> &str {
        self
    }
}

impl NodeRef for String {
    fn node_id(&self) -> &str {
        self.as_str()
    }
}

impl<P> NodeRef for Node<P> {
    fn node_id(&self) -> &str {
        &self.id
    }
}

impl<T: NodeRef + ?Sized> NodeRef for &T {
    fn node_id(&self) -> &str {
        (**self).node_id()
    }
}

/// A vertex identified by its id.
///
/// `edges` holds both outgoing and incoming edges, in the order they were
/// attached. Equality and hashing use the id only.
#[derive(Debug, Clone)]
pub struct Node<P = Payload> {
    id: String,
    payload: P,
    edges: Vec<Edge>,
}

impl<P> Node<P> {
    pub fn new(id: impl Into<String>, payload: P) -> Self {
        Node {
            id: id.into(),
            payload,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Edges incident to this node, outgoing and incoming
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the nodes with an edge into this node
    pub fn parents(&self) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.target() == self.id)
            .map(Edge::source)
            .collect()
    }

    /// Ids of the nodes this node has an edge into
    pub fn children(&self) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.source() == self.id)
            .map(Edge::target)
            .collect()
    }

    /// Ids reachable through one outgoing edge. Edges pointing at this node,
    /// self-loops included, are not followed.
    pub fn adjacents(&self) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.target() != self.id)
            .map(Edge::target)
            .collect()
    }

    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Attach an edge unless an equal one is already present.
    /// Returns whether the edge was appended.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if self.has_edge(&edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Drop every local edge going from `source` to `target`
    pub(crate) fn detach_edges(&mut self, source: &str, target: &str) {
        self.edges.retain(|edge| !edge.connects(source, target));
    }
}

impl<P, Q> PartialEq<Node<Q>> for Node<P> {
    fn eq(&self, other: &Node<Q>) -> bool {
        self.id == other.id
    }
}

impl<P> Eq for Node<P> {}

impl<P> Hash for Node<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
