// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints serde attributes cannot express, such
//! as the resource-cap range and well-formed endpoint URLs.

use crate::diagnostic::ConfigError;
use crate::model::GabayConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects all violations rather than failing fast.
pub fn validate_config(config: &GabayConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.service.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.service.log_level
            ),
        });
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    }

    if config.gateway.port == 0 {
        errors.push(ConfigError::Validation {
            message: "gateway.port must be non-zero".to_string(),
        });
    }

    if !(2..=5).contains(&config.search.max_resources) {
        errors.push(ConfigError::Validation {
            message: format!(
                "search.max_resources must be between 2 and 5, got {}",
                config.search.max_resources
            ),
        });
    }

    if config.search.allowed_domains.is_empty() {
        errors.push(ConfigError::Validation {
            message: "search.allowed_domains must not be empty".to_string(),
        });
    }

    for (list, name) in [
        (&config.search.allowed_domains, "search.allowed_domains"),
        (&config.search.free_domains, "search.free_domains"),
    ] {
        for (i, domain) in list.iter().enumerate() {
            if domain.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("{name}[{i}] must not be empty"),
                });
            }
        }
    }

    if let Some(url) = &config.store.rest_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(ConfigError::Validation {
                message: format!("store.rest_url must be an http(s) URL, got `{url}`"),
            });
        }
    }

    if config.store.rest_url.is_some() && config.store.service_key.is_none() {
        errors.push(ConfigError::Validation {
            message: "store.service_key is required when store.rest_url is set".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
