//! Animal MCP server binary entry point.
//!
//! Resolves configuration (defaults, TOML file, `PORT`, CLI flags),
//! loads the animal catalog before accepting requests, and serves the
//! MCP endpoint over streamable HTTP with graceful shutdown on ctrl-c.

use anyhow::Result;
use clap::Parser;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use zcore::{Animal, Catalog, ServiceConfig};
use zootour_animals::AnimalService;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA: &str = "apps/animals/data/zoo_animals.json";

/// Zoo animal MCP server
#[derive(Debug, Parser)]
#[command(name = "zootour-animals", version, about)]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the JSON record source
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut config = ServiceConfig::new(DEFAULT_PORT, DEFAULT_DATA);
    if let Some(path) = &args.config {
        config = config.merge_file(path)?;
        tracing::info!("loaded configuration from {}", path.display());
    }
    config = config.merge_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data) = args.data {
        config.data = data;
    }

    // Build the catalog before the listener accepts anything; load
    // failures degrade to an empty catalog rather than a crash.
    let catalog: Arc<Catalog<Animal>> = Arc::new(zcore::load_or_empty(&config.data));
    if catalog.is_empty() {
        tracing::warn!("serving an empty animal catalog");
    }

    let service = StreamableHttpService::new(
        move || Ok(AnimalService::new(catalog.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let app = axum::Router::new().nest_service("/mcp", service);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("animal MCP server listening on {bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("animal MCP server shut down");
    Ok(())
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("received shutdown signal");
}
