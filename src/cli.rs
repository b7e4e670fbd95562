//! CLI argument parsing for digraph
//!
//! Global flags describe the graph (`--edge`, `--node`) and the output
//! (`--format`, `--quiet`, `--verbose`, logging); subcommands pick the query.

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};
use digraph_core::EdgeOptions;

/// Digraph - traverse a directed graph described on the command line
#[derive(Parser, Debug)]
#[command(name = "digraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge as SOURCE>TARGET or SOURCE>TARGET:WEIGHT (repeatable)
    #[arg(long = "edge", global = true, value_parser = parse_edge_spec)]
    pub edges: Vec<EdgeSpec>,

    /// Isolated node id (repeatable)
    #[arg(long = "node", global = true)]
    pub nodes: Vec<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `digraph_core=trace`)
    #[arg(long, global = true, env = "DIGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Depth-first walk from a node
    Dfs {
        /// Start node id
        start: String,
    },

    /// Breadth-first walk from a node, level by level
    Bfs {
        /// Start node id
        start: String,
    },

    /// Enumerate simple routes leaving a node
    Routes {
        /// Head node id
        from: String,

        /// Only routes ending at this node
        #[arg(long)]
        to: Option<String>,

        /// Only routes with exactly this many nodes
        #[arg(long)]
        length: Option<usize>,
    },

    /// Look up the route visiting exactly these nodes in order
    FindRoute {
        /// Node ids, head first
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Summarize the graph
    Stats,
}

/// Output format for digraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One `--edge` argument
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub options: EdgeOptions,
}

/// Parse `SOURCE>TARGET[:WEIGHT]`
fn parse_edge_spec(s: &str) -> Result<EdgeSpec, String> {
    let (source, rest) = s
        .split_once('>')
        .ok_or_else(|| format!("expected SOURCE>TARGET[:WEIGHT], got '{}'", s))?;
    let (target, weight) = match rest.rsplit_once(':') {
        Some((target, weight)) => {
            let weight = weight
                .parse::<f64>()
                .map_err(|e| format!("invalid weight '{}': {}", weight, e))?;
            (target, weight)
        }
        None => (rest, 0.0),
    };
    if source.is_empty() || target.is_empty() {
        return Err(format!("edge '{}' needs both a source and a target", s));
    }
    Ok(EdgeSpec {
        source: source.to_string(),
        target: target.to_string(),
        options: EdgeOptions::weighted(weight),
    })
}
