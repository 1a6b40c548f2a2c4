// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider chain execution and post-processing.
//!
//! Providers are tried in order, one attempt each. Parsing, salvage, and
//! normalization live here rather than per provider, so a provider whose
//! call succeeds but whose output is structurally invalid falls through
//! to the next provider exactly like a network failure would.

use std::sync::Arc;

use gabay_core::{
    normalize_milestones, parse_lenient, GabayError, GenerationPreferences, Milestone,
    RoadmapProvider, SearchBackend,
};
use gabay_config::{GeminiConfig, OpenAiConfig, SearchConfig};
use gabay_gemini::GeminiClient;
use gabay_openai::OpenAiClient;
use gabay_search::{enrich_milestone, SearchApiClient};
use tracing::{info, warn};

use crate::prompt;

/// Bounds on the per-milestone resource cap.
const MIN_RESOURCES: usize = 2;
const MAX_RESOURCES: usize = 5;

/// Builds the ordered provider chain for one request.
///
/// A seam for tests: the production implementation resolves credentials
/// from server config with request preferences as overrides.
pub trait ProviderChainBuilder: Send + Sync {
    fn build(&self, prefs: &GenerationPreferences) -> Vec<Arc<dyn RoadmapProvider>>;
}

/// Resolves the optional search backend for one request.
pub trait SearchResolver: Send + Sync {
    fn resolve(&self, prefs: &GenerationPreferences) -> Option<Arc<dyn SearchBackend>>;
}

/// Production chain builder: OpenAI first, Gemini as fallback, each
/// included only when a credential is resolvable.
pub struct ConfigChainBuilder {
    pub openai: OpenAiConfig,
    pub gemini: GeminiConfig,
}

impl ProviderChainBuilder for ConfigChainBuilder {
    fn build(&self, prefs: &GenerationPreferences) -> Vec<Arc<dyn RoadmapProvider>> {
        let mut chain: Vec<Arc<dyn RoadmapProvider>> = Vec::new();

        let openai_key = prefs
            .openai_api_key
            .clone()
            .or_else(|| self.openai.api_key.clone());
        if let Some(key) = openai_key {
            match OpenAiClient::new(&key, self.openai.model.clone()) {
                Ok(client) => chain.push(Arc::new(client)),
                Err(error) => warn!(error = %error, "skipping openai provider"),
            }
        }

        let gemini_key = prefs
            .gemini_api_key
            .clone()
            .or_else(|| self.gemini.api_key.clone());
        if let Some(key) = gemini_key {
            match GeminiClient::new(key, self.gemini.model.clone()) {
                Ok(client) => chain.push(Arc::new(client)),
                Err(error) => warn!(error = %error, "skipping gemini provider"),
            }
        }

        chain
    }
}

/// Production search resolver backed by SearchApi.
pub struct ConfigSearchResolver {
    pub search: SearchConfig,
}

impl SearchResolver for ConfigSearchResolver {
    fn resolve(&self, prefs: &GenerationPreferences) -> Option<Arc<dyn SearchBackend>> {
        let key = prefs
            .search_api_key
            .clone()
            .or_else(|| self.search.api_key.clone())?;
        match SearchApiClient::new(key) {
            Ok(client) => Some(Arc::new(client)),
            Err(error) => {
                warn!(error = %error, "skipping search enrichment");
                None
            }
        }
    }
}

/// Enrichment allow-list for one request: explicit override first, then
/// the free-only list when requested, then the default allow-list.
pub fn resolve_domains(config: &SearchConfig, prefs: &GenerationPreferences) -> Vec<String> {
    if let Some(domains) = &prefs.allowed_domains {
        if !domains.is_empty() {
            return domains.clone();
        }
    }
    if prefs.free_only {
        return config.free_domains.clone();
    }
    config.allowed_domains.clone()
}

/// Per-milestone resource cap for one request, clamped to [2, 5].
pub fn resolve_max_resources(config: &SearchConfig, prefs: &GenerationPreferences) -> usize {
    prefs
        .max_resources
        .unwrap_or(config.max_resources)
        .clamp(MIN_RESOURCES, MAX_RESOURCES)
}

/// Runs the provider chain and normalizes the first structurally valid
/// output. Exactly one attempt per provider; per-provider diagnostics
/// are logged here and never surfaced to the caller.
pub async fn run_chain(
    providers: &[Arc<dyn RoadmapProvider>],
    category: &str,
    course: &str,
    domains: &[String],
) -> Result<Vec<Milestone>, GabayError> {
    if providers.is_empty() {
        return Err(GabayError::provider("no generation providers configured"));
    }

    let request = prompt::build_request(category, course, domains);

    for provider in providers {
        let text = match provider.generate(&request).await {
            Ok(text) => text,
            Err(error) => {
                warn!(provider = provider.name(), error = %error, "provider call failed");
                continue;
            }
        };

        let Some(value) = parse_lenient(&text) else {
            warn!(provider = provider.name(), "provider output was not JSON");
            continue;
        };

        match normalize_milestones(&value) {
            Ok(milestones) => {
                info!(
                    provider = provider.name(),
                    milestones = milestones.len(),
                    "roadmap generated"
                );
                return Ok(milestones);
            }
            Err(error) => {
                warn!(provider = provider.name(), error = %error, "provider output invalid");
            }
        }
    }

    Err(GabayError::provider("all generation providers failed"))
}

/// Full pipeline for one request: provider chain, then best-effort
/// search enrichment over every milestone when a backend is resolvable.
pub async fn generate(
    providers: &[Arc<dyn RoadmapProvider>],
    search: Option<&dyn SearchBackend>,
    config: &SearchConfig,
    category: &str,
    course: &str,
    prefs: &GenerationPreferences,
) -> Result<Vec<Milestone>, GabayError> {
    let domains = resolve_domains(config, prefs);
    let max_resources = resolve_max_resources(config, prefs);

    let mut milestones = run_chain(providers, category, course, &domains).await?;

    if let Some(backend) = search {
        for milestone in &mut milestones {
            enrich_milestone(backend, milestone, &domains, max_resources).await;
        }
    } else {
        // No search backend: placeholder links from the model still
        // never reach the caller.
        for milestone in &mut milestones {
            milestone
                .resources
                .retain(|r| !gabay_search::is_placeholder_url(&r.url));
        }
    }

    Ok(milestones)
}
