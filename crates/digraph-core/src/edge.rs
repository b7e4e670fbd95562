use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::node::NodeRef;
use crate::options::EdgeOptions;

/// A directed, weighted connection between two nodes.
///
/// Endpoints are stored as node ids; the owning graph resolves them.
/// Two edges are equal when their source and target ids match, whatever
/// their weights.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    source: String,
    target: String,
    weight: f64,
}

impl Edge {
    /// Build an edge. A NaN weight is stored as 0.
    pub fn new(source: impl NodeRef, target: impl NodeRef, options: EdgeOptions) -> Self {
        let weight = if options.weight.is_nan() {
            0.0
        } else {
            options.weight
        };
        Edge {
            source: source.node_id().to_string(),
            target: target.node_id().to_string(),
            weight,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether this edge goes from `source` to `target`
    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }

    /// Whether `id` is one of the endpoints
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.source, &other.target)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
