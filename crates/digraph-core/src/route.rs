//! Routes: discovered paths with their aggregate weight
//!
//! A [`Route`] is a snapshot. It records node ids, so it stays valid as a
//! value after the graph changes; [`Graph::has_route`] checks whether the
//! graph still contains it.

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::node::Node;
use crate::options::RouteQuery;
use crate::visitor::stacked;
use crate::{bail_invalid, trace_time};

/// An ordered, non-empty sequence of node ids and the summed weight of the
/// edges between them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    path: Vec<String>,
    weight: f64,
}

impl Route {
    /// Build a route. Fails on an empty path or a NaN weight.
    pub fn new<I, S>(path: I, weight: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path: Vec<String> = path.into_iter().map(Into::into).collect();
        if path.is_empty() {
            return Err(GraphError::type_mismatch("a route needs a non-empty path"));
        }
        if weight.is_nan() {
            return Err(GraphError::type_mismatch("a route weight must be a number"));
        }
        Ok(Route { path, weight })
    }

    /// Snapshot a visitor stack. The stack always holds the start node, and
    /// the summed weight is kept as is, even when opposite infinities make
    /// it NaN.
    fn from_stack<P>(stack: &[&Node<P>], weight: f64) -> Self {
        Route {
            path: stack.iter().map(|node| node.id().to_string()).collect(),
            weight,
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// First node of the route. Paths are non-empty by construction.
    pub fn head(&self) -> &str {
        &self.path[0]
    }

    /// Last node of the route
    pub fn tail(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    /// Number of nodes in the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always false: routes are never empty
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.path.iter().any(|step| step == id)
    }

    fn matches(&self, ids: &[impl AsRef<str>]) -> bool {
        self.path.len() == ids.len()
            && self
                .path
                .iter()
                .zip(ids)
                .all(|(step, id)| step == id.as_ref())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight {})", self.path.join(" -> "), self.weight)
    }
}

impl<P> Graph<P> {
    /// Enumerate routes starting at `query.from`.
    ///
    /// Without a destination every path prefix found by the stacked visitor
    /// is returned, not only maximal paths. With `query.to`, only routes
    /// ending there are kept, and a missing endpoint yields no routes. The
    /// length filter, when set, must match the route's node count exactly.
    #[tracing::instrument(skip(self, query), fields(from = ?query.from, to = ?query.to))]
    pub fn routes(&self, query: &RouteQuery) -> Result<Vec<Route>> {
        let Some(from) = query.from.as_deref() else {
            bail_invalid!("route query", "a source node is required");
        };
        let start = Instant::now();
        let mut found = Vec::new();

        match query.to.as_deref() {
            None => stacked(self, from, |_, stack, weight| {
                if query.filter.accepts(stack.len()) {
                    found.push(Route::from_stack(stack, weight));
                }
            })?,
            Some(to) => {
                if !self.has_node(from) || !self.has_node(to) {
                    debug!("route_endpoint_missing");
                    return Ok(Vec::new());
                }
                stacked(self, from, |node, stack, weight| {
                    if node.id() == to && query.filter.accepts(stack.len()) {
                        found.push(Route::from_stack(stack, weight));
                    }
                })?
            }
        }

        trace_time!(start, "routes", count = found.len());
        Ok(found)
    }

    /// Find the route visiting exactly `ids`, in order.
    ///
    /// Returns `None` when the head is not in the graph or the chain is not
    /// a route of the graph. An empty `ids` is an invalid argument.
    pub fn find_route(&self, ids: &[impl AsRef<str>]) -> Result<Option<Route>> {
        let Some(head): Option<&str> = ids.first().map(|id| id.as_ref()) else {
            bail_invalid!("route ids", "at least one node id is required");
        };
        if !self.has_node(head) {
            return Ok(None);
        }

        let query = RouteQuery::starting_at(head).with_length(ids.len());
        Ok(self
            .routes(&query)?
            .into_iter()
            .find(|route| route.matches(ids)))
    }

    /// Whether every consecutive pair of the route is still an outgoing
    /// adjacency in this graph. Single-node routes never match.
    pub fn has_route(&self, route: &Route) -> bool {
        let Some(mut current) = self.node(route.head()) else {
            return false;
        };
        if route.len() < 2 {
            return false;
        }

        for step in route.path().iter().skip(1) {
            match self
                .adjacents_of(current)
                .into_iter()
                .find(|adjacent| adjacent.id() == step)
            {
                Some(next) => current = next,
                None => return false,
            }
        }
        true
    }
}
