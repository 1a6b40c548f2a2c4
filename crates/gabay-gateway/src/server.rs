// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use gabay_config::{GatewayConfig, SearchConfig};
use gabay_core::GabayError;

use crate::handlers;
use crate::pipeline::{ProviderChainBuilder, SearchResolver};

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Builds the per-request provider chain.
    pub chain: Arc<dyn ProviderChainBuilder>,
    /// Resolves the per-request search backend, if any.
    pub search: Arc<dyn SearchResolver>,
    /// Enrichment defaults (allow-lists, resource cap).
    pub search_config: SearchConfig,
}

/// Builds the gateway router. Unmatched methods on a matched path get
/// axum's automatic 405.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/roadmaps", post(handlers::post_roadmaps))
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves:
/// - POST /v1/roadmaps
/// - GET /health
pub async fn start_server(config: &GatewayConfig, state: GatewayState) -> Result<(), GabayError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GabayError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| GabayError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
