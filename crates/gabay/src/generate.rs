// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `gabay generate` command implementation.
//!
//! Drives one generation request through the orchestrator against a
//! running gateway and prints the resulting roadmap as JSON.

use std::sync::Arc;

use gabay_client::Orchestrator;
use gabay_config::GabayConfig;
use gabay_core::{GabayError, GenerationPreferences, StaticIdentity};
use gabay_store::RoadmapStore;
use tracing::info;

/// Runs the `gabay generate` command.
pub async fn run_generate(
    config: GabayConfig,
    category: &str,
    course: &str,
    free_only: bool,
    max_resources: Option<usize>,
) -> Result<(), GabayError> {
    let store = match (&config.store.rest_url, &config.store.service_key) {
        (Some(rest_url), Some(service_key)) => {
            Some(RoadmapStore::new(rest_url.clone(), service_key)?)
        }
        _ => None,
    };
    let identity = Arc::new(StaticIdentity(config.store.user_id.clone()));

    let orchestrator = Orchestrator::new(config.gateway.client_url(), store, identity)?;

    let preferences = GenerationPreferences {
        free_only,
        max_resources,
        ..GenerationPreferences::default()
    };

    info!(category, course, "requesting roadmap");
    let roadmap = orchestrator
        .generate_with(category, course, &preferences)
        .await?;

    let rendered = serde_json::to_string_pretty(&roadmap)
        .map_err(|e| GabayError::Internal(format!("failed to render roadmap: {e}")))?;
    println!("{rendered}");

    Ok(())
}
