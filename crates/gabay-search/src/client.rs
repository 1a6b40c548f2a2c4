// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the SearchApi web-search backend.
//!
//! One scoped query per call: `q = "{query} site:{domain}"`. Search calls
//! are idempotent GETs, so unlike generation calls they retry once on a
//! transient error after a short delay.

use std::time::Duration;

use async_trait::async_trait;
use gabay_core::{GabayError, SearchBackend, SearchHit};
use serde::Deserialize;
use tracing::{debug, warn};

/// Base URL for the SearchApi endpoint.
const API_BASE_URL: &str = "https://www.searchapi.io/api/v1/search";

/// Deadline for one search round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause before the single retry.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Response envelope; only the organic results are consumed.
#[derive(Debug, Deserialize)]
struct SearchApiResponse {
    #[serde(default)]
    organic_results: Vec<SearchHit>,
}

/// HTTP client for SearchApi communication.
#[derive(Debug, Clone)]
pub struct SearchApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SearchApiClient {
    /// Creates a new search client.
    pub fn new(api_key: String) -> Result<Self, GabayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GabayError::Search {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    async fn search_once(&self, query: &str, domain: &str) -> Result<Vec<SearchHit>, GabayError> {
        let scoped = format!("{query} site:{domain}");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("engine", "google"),
                ("q", scoped.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GabayError::Search {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, domain, "search response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GabayError::search(format!(
                "search API returned {status}: {body}"
            )));
        }

        let parsed: SearchApiResponse =
            response.json().await.map_err(|e| GabayError::Search {
                message: format!("failed to parse search response: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(parsed.organic_results)
    }
}

#[async_trait]
impl SearchBackend for SearchApiClient {
    async fn search(&self, query: &str, domain: &str) -> Result<Vec<SearchHit>, GabayError> {
        match self.search_once(query, domain).await {
            Ok(hits) => Ok(hits),
            Err(first) => {
                warn!(domain, error = %first, "search failed, retrying once");
                tokio::time::sleep(RETRY_DELAY).await;
                self.search_once(query, domain).await
            }
        }
    }
}
