//! Serving binary: load the trained snapshot and answer queries over HTTP.

use anyhow::Context;
use clap::Parser;
use leaserank::config::Config;
use leaserank::http::HttpServer;
use leaserank::persistence::GraphSnapshot;
use leaserank::recommend::Recommender;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "leaserank", about = "Lessor recommendation service", version)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snapshot file to serve (overrides the configured path)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// HTTP port (overrides the configured port)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.http.port = port;
    }
    let snapshot_path = args.snapshot.unwrap_or_else(|| config.snapshot_path.clone());

    info!("leaserank v{}", leaserank::version());

    let snapshot = GraphSnapshot::load(&snapshot_path).with_context(|| {
        format!(
            "cannot load snapshot '{}'; run the train binary first",
            snapshot_path.display()
        )
    })?;

    let recommender = Arc::new(Recommender::new(
        Arc::new(snapshot),
        config.ranking.clone(),
        config.cache_capacity,
    ));

    let server = HttpServer::new(recommender, &config.http);
    server.start().await?;
    Ok(())
}
