// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `gabay serve` command implementation.
//!
//! Starts the generation gateway with the provider chain and search
//! enrichment wired from configuration.

use std::sync::Arc;

use gabay_config::GabayConfig;
use gabay_core::GabayError;
use gabay_gateway::{ConfigChainBuilder, ConfigSearchResolver, GatewayState};
use tracing::{info, warn};

/// Runs the `gabay serve` command.
pub async fn run_serve(config: GabayConfig) -> Result<(), GabayError> {
    info!("starting gabay serve");

    if config.openai.api_key.is_none() && config.gemini.api_key.is_none() {
        warn!("no provider credentials configured; requests without per-request keys will fail");
    }
    if config.search.api_key.is_none() {
        info!("no search credential configured; enrichment disabled by default");
    }

    let state = GatewayState {
        chain: Arc::new(ConfigChainBuilder {
            openai: config.openai.clone(),
            gemini: config.gemini.clone(),
        }),
        search: Arc::new(ConfigSearchResolver {
            search: config.search.clone(),
        }),
        search_config: config.search.clone(),
    };

    gabay_gateway::start_server(&config.gateway, state).await
}
