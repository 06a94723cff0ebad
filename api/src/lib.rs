//! StreamPulse API Server
//!
//! This crate provides the HTTP/WebSocket server for the StreamPulse
//! live-streaming analytics demo. It serves point-in-time reads over REST
//! and fans periodic viewer updates out to WebSocket subscribers.
//!
//! # Architecture
//!
//! The server is built on Axum and Tokio, providing:
//! - REST API for stream listing, lookup, creation, login, and stats
//! - An analytics surface: per-video reports, event tracking, batch jobs
//! - A WebSocket push channel (`INITIAL_DATA`, `VIEWER_UPDATE`, `NEW_STREAM`)
//! - A single periodic tick task that mutates the in-memory store,
//!   invalidates the snapshot cache, and broadcasts the fresh snapshot
//!
//! # Example
//!
//! ```no_run
//! use api::run_server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_server().await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod broadcast;
mod config;
mod routes;
mod state;
mod ticker;

pub use config::Config;
pub use state::AppState;
pub use ticker::{spawn_ticker, tick_once};

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Runs the StreamPulse API server.
///
/// Initializes the server with configuration from environment variables and
/// starts listening for incoming connections, handling graceful shutdown on
/// SIGTERM/SIGINT.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_server() -> Result<()> {
    let config = Config::from_env()?;
    run_server_with_config(config).await
}

/// Runs the StreamPulse API server with the provided configuration.
///
/// This is useful for testing or when you want to provide configuration
/// programmatically. Seeds the store with demo data and spawns the periodic
/// tick task before serving.
///
/// # Errors
///
/// Returns an error if:
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_server_with_config(config: Config) -> Result<()> {
    let addr = config.socket_addr();

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "StreamPulse API server starting"
    );

    let state = AppState::with_demo_data(&config);
    let ticker = spawn_ticker(state.clone(), config.tick_interval);

    let app = create_router(state);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    ticker.abort();
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Creates the main application router with all routes and middleware.
///
/// Does not spawn the tick task; callers that want live updates must do so
/// themselves. This keeps router tests deterministic.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::video_routes(state.clone()))
        .merge(routes::auth_routes(state.clone()))
        .merge(routes::stats_routes(state.clone()))
        .merge(routes::analytics_routes(state.clone()))
        .merge(routes::ws_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Waits for a shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
