//! Show MCP server binary entry point.
//!
//! Same startup sequence as the animal server: resolve configuration,
//! load the catalog before accepting requests, serve the MCP endpoint
//! over streamable HTTP until ctrl-c. Defaults to port 8081 so both
//! deployments can share a host.

use anyhow::Result;
use clap::Parser;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use zcore::{Catalog, ServiceConfig, Show};
use zootour_shows::ShowService;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_DATA: &str = "apps/shows/data/zoo_shows.json";

/// Zoo show MCP server
#[derive(Debug, Parser)]
#[command(name = "zootour-shows", version, about)]
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

    let catalog: Arc<Catalog<Show>> = Arc::new(zcore::load_or_empty(&config.data));
    if catalog.is_empty() {
        tracing::warn!("serving an empty show catalog");
    }

    let service = StreamableHttpService::new(
        move || Ok(ShowService::new(catalog.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let app = axum::Router::new().nest_service("/mcp", service);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("show MCP server listening on {bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("show MCP server shut down");
    Ok(())
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("received shutdown signal");
}
