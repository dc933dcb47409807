mod routes;
mod state;

use anyhow::{Context, Result};
use campus_core::bookmarks::DataDirLock;
use campus_core::config::CampusConfig;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("campus_server=info".parse()?)
                .add_directive("campus_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CampusConfig::load().context("Failed to load configuration")?;

    // One owner per data directory; the lock is released on exit
    let lock = DataDirLock::acquire(&config.data_path())?;
    tracing::debug!(lock = %lock.path().display(), "Holding data directory");

    let state = AppState::new(&config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::app(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.bind, config.port))?;
    tracing::info!(%addr, "campus-server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
