// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use kbdesk_core::{ChatBackend, KbdeskError};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers::{self, AgentInfo};

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Answers chat messages.
    pub backend: Arc<dyn ChatBackend>,
    /// Served as-is by GET /agents.
    pub agents: Arc<Vec<AgentInfo>>,
}

impl GatewayState {
    pub fn new(backend: Arc<dyn ChatBackend>, agents: Vec<AgentInfo>) -> Self {
        Self {
            backend,
            agents: Arc::new(agents),
        }
    }
}

/// Gateway server configuration (mirrors `ServerConfig` from kbdesk-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Frontend build directory. Ignored when it does not exist.
    pub static_dir: Option<PathBuf>,
}

/// Build the application router.
///
/// API routes take precedence; any other path falls through to the static
/// frontend when `static_dir` exists.
pub fn build_router(state: GatewayState, static_dir: Option<&std::path::Path>) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::get_health))
        .route("/chat", post(handlers::post_chat))
        .route("/agents", get(handlers::get_agents))
        .with_state(state);

    match static_dir {
        Some(dir) if dir.is_dir() => {
            info!(dir = %dir.display(), "serving static frontend");
            app = app.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => warn!(dir = %dir.display(), "static directory not found, frontend disabled"),
        None => {}
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves:
/// - GET /health
/// - POST /chat
/// - GET /agents
/// - everything else from the static directory, if present
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), KbdeskError> {
    let app = build_router(state, config.static_dir.as_deref());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| KbdeskError::Channel {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| KbdeskError::Channel {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
