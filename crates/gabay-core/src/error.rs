// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Gabay roadmap service.

use thiserror::Error;

/// The primary error type used across all Gabay crates.
#[derive(Debug, Error)]
pub enum GabayError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Request input was rejected before any external call was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// AI provider errors (missing credential, network failure, non-2xx response,
    /// unparsable or structurally invalid output).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Search backend errors (network failure, non-2xx response, malformed payload).
    #[error("search error: {message}")]
    Search {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Persistence boundary errors (insert or update against the remote store).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A generation for the same (category, course) pair is already running.
    #[error("generation already in flight for `{category}` / `{course}`")]
    InFlight { category: String, course: String },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GabayError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a search error without an underlying source.
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search {
            message: message.into(),
            source: None,
        }
    }
}
