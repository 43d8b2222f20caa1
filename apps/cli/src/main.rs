// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FloorPath CLI - wayfinding queries over merged venue graphs.
//!
//! # Commands
//!
//! - `floorpath route <START> <END>` - print the human-readable itinerary
//! - `floorpath tokens <START> <END>` - print the feature-token sequence
//! - `floorpath dataset --out FILE` - write training lines for all room pairs
//!
//! Start and end accept a node id first, then fall back to exact
//! display-name lookup (first match in document order, the way the survey
//! tooling resolves names). An unreachable destination prints `no path
//! found` and exits 0: that is an answer, not a failure. Unresolvable
//! locations and malformed documents exit non-zero.
//!
//! `--graph` points at the merged document (default `merged_graph.json`);
//! `RUST_LOG` controls log verbosity.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use floorpath_core::{Graph, NodeId};
use floorpath_route::{dataset_lines, encode, format_path, shortest_path};

#[derive(Parser)]
#[command(name = "floorpath", version, about = "Indoor wayfinding over merged venue graphs")]
struct Cli {
    /// Path to the merged graph document.
    #[arg(long, global = true, default_value = "merged_graph.json")]
    graph: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the itinerary between two locations (node id or exact name).
    Route { start: String, end: String },
    /// Print the feature-token sequence between two locations.
    Tokens { start: String, end: String },
    /// Write sequence-model training lines for every connected room pair.
    Dataset {
        /// Output file path.
        #[arg(long)]
        out: PathBuf,
        /// Overwrite the output file if it already exists.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let graph = load_graph(&cli.graph)?;

    match cli.command {
        Commands::Route { start, end } => route(&graph, &start, &end),
        Commands::Tokens { start, end } => tokens(&graph, &start, &end),
        Commands::Dataset { out, force } => dataset(&graph, &out, force),
    }
}

fn load_graph(path: &Path) -> Result<Graph> {
    let started = Instant::now();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading graph document {}", path.display()))?;
    let graph = Graph::from_json(&text)
        .with_context(|| format!("loading graph document {}", path.display()))?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "graph loaded"
    );
    Ok(graph)
}

/// Resolves user input to a node id: exact id first, then the first
/// document-order match on display name.
fn resolve(graph: &Graph, query: &str) -> Result<NodeId> {
    let as_id = NodeId::new(query);
    if graph.contains(&as_id) {
        return Ok(as_id);
    }
    match graph.resolve_name(query).first() {
        Some(node) => Ok(node.id.clone()),
        None => bail!("no node with id or name {query:?}"),
    }
}

fn solve(graph: &Graph, start: &str, end: &str) -> Result<Vec<NodeId>> {
    let start_id = resolve(graph, start)?;
    let end_id = resolve(graph, end)?;
    let started = Instant::now();
    let path = shortest_path(graph, &start_id, &end_id)?;
    tracing::debug!(
        start = %start_id,
        end = %end_id,
        path_len = path.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "route solved"
    );
    Ok(path)
}

fn route(graph: &Graph, start: &str, end: &str) -> Result<()> {
    let path = solve(graph, start, end)?;
    if path.is_empty() {
        println!("no path found");
        return Ok(());
    }
    println!("{}", format_path(graph, &path)?);
    Ok(())
}

fn tokens(graph: &Graph, start: &str, end: &str) -> Result<()> {
    let path = solve(graph, start, end)?;
    if path.is_empty() {
        println!("no path found");
        return Ok(());
    }
    println!("{}", encode(graph, &path)?.join(" "));
    Ok(())
}

fn dataset(graph: &Graph, out: &Path, force: bool) -> Result<()> {
    if out.exists() && !force {
        bail!("{} already exists (pass --force to overwrite)", out.display());
    }

    let started = Instant::now();
    let lines = dataset_lines(graph)?;
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;

    tracing::info!(
        lines = lines.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "dataset written"
    );
    println!("wrote {} lines to {}", lines.len(), out.display());
    Ok(())
}
