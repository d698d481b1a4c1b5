//! HTTP API for wayfind
//!
//! Routes:
//!   GET /healthz
//!   GET /api/rooms
//!   GET /api/rooms/:id
//!   GET /api/graph
//!   GET /api/search?q=query
//!   GET /api/route?from=node1&to=node2

mod handlers;
mod middleware;
mod response;

pub use response::ApiError;

use crate::config::ServerConfig;
use crate::graph::WayfindEngine;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<WayfindEngine>,
    pub config: Arc<ServerConfig>,
    request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(engine: Arc<WayfindEngine>, config: ServerConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route("/api/rooms", get(handlers::rooms_handler))
        .route("/api/rooms/:id", get(handlers::room_handler))
        .route("/api/graph", get(handlers::graph_handler))
        .route("/api/search", get(handlers::search_handler))
        .route("/api/route", get(handlers::route_handler))
        .layer(from_fn_with_state(state.clone(), middleware::timeout_middleware))
        .layer(from_fn_with_state(state.clone(), middleware::cors_middleware))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing_middleware,
        ))
        .with_state(state)
}

/// Bind `config.bind` and serve until ctrl-c
pub async fn serve(engine: Arc<WayfindEngine>, config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    let addr = listener.local_addr()?;
    let app = build_router(AppState::new(engine, config));

    tracing::info!(%addr, "wayfind listening");
    for endpoint in [
        "GET /healthz",
        "GET /api/rooms",
        "GET /api/rooms/:id",
        "GET /api/graph",
        "GET /api/search?q=query",
        "GET /api/route?from=node1&to=node2",
    ] {
        tracing::debug!(endpoint, "route registered");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("shutdown signal received"),
                Err(e) => {
                    tracing::error!("failed to listen for shutdown signal: {e}");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
}
