//! Vitrine API server.
//!
//! Serves the storefront JSON API over an in-memory catalog seeded at
//! startup. Nothing is persisted across restarts.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitrine_api::{api_router, AppState};

/// Vitrine storefront API server
#[derive(Parser)]
#[command(name = "vitrine-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let state = Arc::new(AppState::with_sample_catalog());
    tracing::info!(products = state.catalog.len(), "catalog seeded");

    let app = api_router(state);
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "vitrine API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
