//! HTTP front end for single-file English detection.
//!
//! - `routes`: request handlers (`GET /`, `POST /detect`, static assets)
//! - `batch`: per-upload detection on the blocking pool
//! - `error`: error type and its JSON response mapping

mod batch;
mod error;
mod routes;

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use batch::{NO_ENGLISH_TEXT, Upload, detect_uploads};
pub use error::{MessageBody, ServerError, ServerResult};

use crate::core::Dialect;

/// Upper bound on a whole `/detect` request body.
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory serving `index.html` and the other static assets.
    pub static_dir: PathBuf,
    /// Dialect used to parse uploads.
    pub dialect: Dialect,
    /// Time allowed for each uploaded file.
    pub detect_timeout: Duration,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/detect", post(routes::detect))
        .fallback(routes::static_asset)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(Arc::new(state))
}

pub async fn start(port: u16, state: AppState) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        static_dir = %state.static_dir.display(),
        dialect = %state.dialect,
        "Server running on port {}",
        port
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Blocking entry point used by the `serve` command.
pub fn run_server(port: u16, state: AppState) -> Result<()> {
    init_tracing();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?
        .block_on(start(port, state))
}

/// `RUST_LOG` wins; otherwise log at `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
