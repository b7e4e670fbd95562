//! CLI commands for digraph

pub mod dispatch;
pub mod routes;
pub mod stats;
pub mod traverse;
