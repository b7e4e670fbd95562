//! `digraph routes` and `digraph find-route`

use digraph_core::bail_usage;
use digraph_core::error::Result;
use digraph_core::{Graph, Route, RouteQuery};

use crate::cli::{Cli, OutputFormat};

/// Execute `digraph routes`
pub fn execute_routes(
    cli: &Cli,
    graph: &Graph,
    from: &str,
    to: Option<&str>,
    length: Option<usize>,
) -> Result<()> {
    let mut query = RouteQuery::starting_at(from);
    if let Some(to) = to {
        query = query.to(to);
    }
    if let Some(length) = length {
        if length == 0 {
            bail_usage!("--length must be at least 1");
        }
        query = query.with_length(length);
    }

    let routes = graph.routes(&query)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "length": length,
                "routes": routes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for route in &routes {
                println!("{}", route);
            }
            if !cli.quiet {
                println!("Found {} route(s)", routes.len());
            }
        }
    }
    Ok(())
}

/// Execute `digraph find-route`
pub fn execute_find_route(cli: &Cli, graph: &Graph, ids: &[String]) -> Result<()> {
    let route = graph.find_route(ids)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "ids": ids,
                "found": route.is_some(),
                "route": route,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_found(cli, route.as_ref(), ids),
    }
    Ok(())
}

fn print_found(cli: &Cli, route: Option<&Route>, ids: &[String]) {
    match route {
        Some(route) => println!("{}", route),
        None if !cli.quiet => println!("No route through {}", ids.join(" -> ")),
        None => {}
    }
}
