// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /v1/roadmaps and GET /health.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use gabay_core::{GabayError, GenerationPreferences, Milestone};

use crate::pipeline;
use crate::server::GatewayState;

/// Request body for POST /v1/roadmaps.
#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    /// Free-text category, e.g. "IT".
    #[serde(default)]
    pub category: String,
    /// Free-text course, e.g. "Networking".
    #[serde(default)]
    pub course: String,
    /// Per-request generation options.
    #[serde(default)]
    pub preferences: GenerationPreferences,
}

/// Response body for POST /v1/roadmaps.
#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub milestones: Vec<Milestone>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// POST /v1/roadmaps
///
/// Validates input, runs the generation pipeline, and returns the
/// milestone list. Generated responses are never cacheable.
pub async fn post_roadmaps(
    State(state): State<GatewayState>,
    Json(body): Json<RoadmapRequest>,
) -> Response {
    let category = body.category.trim();
    let course = body.course.trim();
    if category.is_empty() || course.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing category or course");
    }

    let providers = state.chain.build(&body.preferences);
    let search = state.search.resolve(&body.preferences);

    let result = pipeline::generate(
        &providers,
        search.as_deref(),
        &state.search_config,
        category,
        course,
        &body.preferences,
    )
    .await;

    match result {
        Ok(milestones) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, "no-store")],
            Json(RoadmapResponse { milestones }),
        )
            .into_response(),
        Err(GabayError::Provider { .. }) => {
            error_response(StatusCode::BAD_GATEWAY, "AI generation failed")
        }
        Err(other) => {
            error!(error = %other, "generation pipeline failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
