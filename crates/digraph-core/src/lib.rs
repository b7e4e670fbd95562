//! Digraph Core Library
//!
//! An in-memory directed graph: nodes keyed by string id, weighted edges
//! deduplicated by their endpoints, structural change notifications, and
//! traversal visitors (depth-first, breadth-first, simple-path enumeration)
//! with route queries built on top of them.

pub mod edge;
pub mod error;
pub mod events;
pub mod graph;
pub mod logging;
pub mod node;
pub mod options;
pub mod route;
pub mod visitor;

pub use edge::Edge;
pub use error::{GraphError, Result};
pub use events::{EventKind, GraphEvent, ListenerId};
pub use graph::Graph;
pub use node::{Node, NodeRef, Payload};
pub use options::{EdgeOptions, RouteFilter, RouteQuery};
pub use route::Route;
