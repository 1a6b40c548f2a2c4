// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search backend trait used by the resource enrichment engine.

use async_trait::async_trait;

use crate::error::GabayError;
use crate::types::SearchHit;

/// A web-search backend scoped to a single domain per call.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Runs `query` restricted to `domain` and returns organic results.
    async fn search(&self, query: &str, domain: &str) -> Result<Vec<SearchHit>, GabayError>;
}
