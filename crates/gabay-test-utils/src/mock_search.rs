// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock search backend for deterministic enrichment testing.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use gabay_core::{GabayError, SearchBackend, SearchHit};

/// Shorthand constructor for a search hit with an empty snippet.
pub fn hit(title: &str, link: &str) -> SearchHit {
    SearchHit {
        title: title.to_string(),
        link: link.to_string(),
        snippet: String::new(),
    }
}

/// A mock search backend serving canned hits per domain.
///
/// Domains without canned hits return an empty result set; domains
/// marked failing return a search error. Every call is recorded as a
/// `(query, domain)` pair for assertions.
#[derive(Default)]
pub struct MockSearch {
    hits: HashMap<String, Vec<SearchHit>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the given hits for `domain`.
    pub fn hits(mut self, domain: &str, hits: Vec<SearchHit>) -> Self {
        self.hits.insert(domain.to_string(), hits);
        self
    }

    /// Fail every search against `domain`.
    pub fn failing(mut self, domain: &str) -> Self {
        self.failing.insert(domain.to_string());
        self
    }

    /// Calls received so far as `(query, domain)` pairs, in order.
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl SearchBackend for MockSearch {
    async fn search(&self, query: &str, domain: &str) -> Result<Vec<SearchHit>, GabayError> {
        self.calls
            .lock()
            .await
            .push((query.to_string(), domain.to_string()));
        if self.failing.contains(domain) {
            return Err(GabayError::search(format!(
                "mock failure for domain {domain}"
            )));
        }
        Ok(self.hits.get(domain).cloned().unwrap_or_default())
    }
}
