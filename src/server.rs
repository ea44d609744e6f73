//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with the API endpoints and static fallback
//! - Middleware stack (body limit, timeout, CORS, logging)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{key, process};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Two API routes plus a static fallback:
/// - `GET /api/key` - configured API key
/// - `POST /api/process-pdf` - single-file upload and extraction
/// - everything else is served from the configured static directory
///
/// The body limit caps the whole multipart request at the upload ceiling plus
/// framing slack; the per-file limit is enforced exactly in the acceptor.
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/api/key", get(key::api_key))
        .route("/api/process-pdf", post(process::process_file))
        .layer(DefaultBodyLimit::max(state.config.body_limit()))
        .fallback_service(static_files)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.timeout_secs),
        ))
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the docdrop HTTP server
///
/// Initializes logging, builds the router, binds the configured TCP address,
/// and serves until SIGTERM or Ctrl+C.
///
/// # Example
///
/// ```rust,no_run
/// use docdrop::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     docdrop::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    // Create server state
    let state = Arc::new(ServerState::new(config.clone()));

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting docdrop server on http://{addr}");
    tracing::info!(
        "Max upload: {}MB, timeout: {}s, static dir: {}",
        config.max_upload_size_mb,
        config.timeout_secs,
        config.static_dir
    );
    tracing::info!(
        "PDF processing: {}",
        if config.pdf_enabled { "enabled" } else { "disabled" }
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
