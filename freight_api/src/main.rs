mod cities;
mod config;
mod error;
mod map;
mod route;
mod routes;
mod state;

use crate::config::Config;
use crate::routes::app;
use crate::state::AppState;
use anyhow::Context;
use axum::serve;
use freight_routing::{Dataset, Graph};
use std::sync::Arc;
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = Config::from_env()?;

    // A broken dataset aborts startup, there is nothing to serve without it
    let dataset = Dataset::from_file(&config.data_path)
        .with_context(|| format!("Cannot load dataset {}", config.data_path.display()))?;
    let graph = Graph::from_dataset(&dataset)
        .with_context(|| format!("Cannot build graph from {}", config.data_path.display()))?;

    let state = Arc::new(AppState { graph });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    serve(listener, app(state)).await?;

    Ok(())
}
