// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! Provides [`GeminiClient`], which implements [`RoadmapProvider`] with
//! the same one-attempt contract as the OpenAI adapter: failures fall
//! through to the next provider rather than retrying here.

use std::time::Duration;

use async_trait::async_trait;
use gabay_core::{GabayError, GenerationRequest, RoadmapProvider};
use tracing::debug;

use crate::types::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig,
};

/// Base URL for the Gemini API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Explicit deadline for a generation round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for Gemini API communication.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini API client. The key is passed as a query
    /// parameter per the Gemini API convention.
    pub fn new(api_key: String, model: String) -> Result<Self, GabayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GabayError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<String, GabayError> {
        let body = GenerateContentRequest {
            system_instruction: Some(Content::text(None, request.system_prompt.clone())),
            contents: vec![Content::text(Some("user"), request.user_prompt.clone())],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json".to_string(),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GabayError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "generateContent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!("Gemini API error: {}", api_err.error.message),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(GabayError::provider(message));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| GabayError::Provider {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| GabayError::provider("API response contained no candidates"))
    }
}

#[async_trait]
impl RoadmapProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GabayError> {
        self.complete(request).await
    }
}
