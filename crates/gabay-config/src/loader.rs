// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./gabay.toml` > `~/.config/gabay/gabay.toml`
//! > `/etc/gabay/gabay.toml`, with environment variable overrides via the
//! `GABAY_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::GabayConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/gabay/gabay.toml` (system-wide)
/// 3. `~/.config/gabay/gabay.toml` (user XDG config)
/// 4. `./gabay.toml` (local directory)
/// 5. `GABAY_*` environment variables
pub fn load_config() -> Result<GabayConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<GabayConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GabayConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<GabayConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GabayConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading (exposed for diagnostics).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(GabayConfig::default()))
        .merge(Toml::file("/etc/gabay/gabay.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("gabay/gabay.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("gabay.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names
/// contain underscores: `GABAY_OPENAI_API_KEY` must map to
/// `openai.api_key`, not `openai.api.key`.
fn env_provider() -> Env {
    const SECTIONS: &[&str] = &["service", "gateway", "openai", "gemini", "search", "store"];

    Env::prefixed("GABAY_").map(|key| {
        let key_str = key.as_str();
        for section in SECTIONS {
            // Anchor at the start: `store_service_key` must become
            // `store.service_key`, untouched past the section name.
            if let Some(rest) = key_str.strip_prefix(&format!("{section}_")) {
                return format!("{section}.{rest}").into();
            }
        }
        key_str.into()
    })
}
