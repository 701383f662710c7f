//! Training binary: clean a transaction export, discretize the value
//! feature, build the global graph, and persist the snapshot artifact.

use anyhow::ensure;
use clap::Parser;
use leaserank::config::Config;
use leaserank::graph::TransactionGraph;
use leaserank::persistence::GraphSnapshot;
use leaserank::{features, ingest};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "train", about = "Build a leaserank snapshot from a CSV export", version)]
struct Args {
    /// CSV transaction export to ingest
    #[arg(long)]
    input: PathBuf,

    /// Path to the YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snapshot output path (overrides the configured path)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let mut records = ingest::load_records(&args.input)?;
    ensure!(
        !records.is_empty(),
        "no usable records in '{}'",
        args.input.display()
    );

    let boundaries = features::value_bin_boundaries(&records, &config.binning);
    features::assign_value_bins(&mut records, &boundaries);

    let graph = TransactionGraph::build(&records);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "transaction graph built"
    );

    let snapshot = GraphSnapshot::new(records, graph, boundaries);
    let output = args.output.unwrap_or(config.snapshot_path);
    snapshot.save(&output)?;

    info!(path = %output.display(), "training complete");
    Ok(())
}
