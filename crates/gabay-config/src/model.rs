// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Gabay roadmap service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so unrecognized keys
//! are rejected at startup with an actionable diagnostic.

use serde::{Deserialize, Serialize};

/// Top-level Gabay configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; provider and search credentials default to unset, which
/// disables the corresponding provider or the enrichment stage.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GabayConfig {
    /// Service identity and logging.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Generation gateway HTTP server settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// OpenAI provider settings (Provider A).
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Gemini provider settings (Provider B).
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Search enrichment settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Remote store settings for roadmap persistence.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

/// Generation gateway HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL the CLI orchestrator targets. Defaults to the bind address.
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            url: None,
        }
    }
}

impl GatewayConfig {
    /// The URL the orchestrator should call, honoring an explicit override.
    pub fn client_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }
}

/// OpenAI provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key. `None` disables the provider unless overridden per request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_openai_model")]
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_openai_model(),
        }
    }
}

/// Gemini provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key. `None` disables the provider unless overridden per request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
        }
    }
}

/// Search enrichment configuration.
///
/// The domain lists are configuration data, not logic: course platforms
/// change URL structures over time, so both lists are expected to drift
/// and should be reviewed periodically rather than encoded more deeply.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// SearchApi key. `None` disables enrichment unless a request supplies one.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Resource cap per milestone. Valid range is [2, 5].
    #[serde(default = "default_max_resources")]
    pub max_resources: usize,

    /// Default allow-list of trusted source domains.
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,

    /// Allow-list used when a request asks for free resources only.
    #[serde(default = "default_free_domains")]
    pub free_domains: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            max_resources: default_max_resources(),
            allowed_domains: default_allowed_domains(),
            free_domains: default_free_domains(),
        }
    }
}

/// Remote store configuration (PostgREST-style endpoint).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Base REST URL, e.g. `https://project.supabase.co/rest/v1`.
    /// `None` disables persistence entirely.
    #[serde(default)]
    pub rest_url: Option<String>,

    /// Service key sent as `apikey` / bearer token.
    #[serde(default)]
    pub service_key: Option<String>,

    /// User id the CLI orchestrator persists roadmaps under.
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_service_name() -> String {
    "gabay".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_max_resources() -> usize {
    3
}

fn default_allowed_domains() -> Vec<String> {
    [
        "freecodecamp.org",
        "coursera.org",
        "edx.org",
        "developer.mozilla.org",
        "w3schools.com",
        "khanacademy.org",
        "udemy.com",
        "geeksforgeeks.org",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_free_domains() -> Vec<String> {
    [
        "freecodecamp.org",
        "developer.mozilla.org",
        "w3schools.com",
        "khanacademy.org",
        "geeksforgeeks.org",
        "theodinproject.com",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = GabayConfig::default();
        assert_eq!(config.service.name, "gabay");
        assert_eq!(config.gateway.port, 8787);
        assert_eq!(config.search.max_resources, 3);
        assert!(config.openai.api_key.is_none());
        assert!(config.gemini.api_key.is_none());
        assert!(config.store.rest_url.is_none());
        assert!(!config.search.allowed_domains.is_empty());
        assert!(!config.search.free_domains.is_empty());
    }

    #[test]
    fn client_url_defaults_to_bind_address() {
        let gw = GatewayConfig::default();
        assert_eq!(gw.client_url(), "http://127.0.0.1:8787");
    }

    #[test]
    fn client_url_honors_override() {
        let gw = GatewayConfig {
            url: Some("https://gabay.example.net".to_string()),
            ..GatewayConfig::default()
        };
        assert_eq!(gw.client_url(), "https://gabay.example.net");
    }

    #[test]
    fn free_domains_are_a_subset_of_sane_hosts() {
        for domain in default_free_domains() {
            assert!(!domain.contains('/'), "bare hosts only: {domain}");
        }
    }
}
