// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI Chat Completions API.
//!
//! Provides [`OpenAiClient`], which implements [`RoadmapProvider`]. Each
//! request gets exactly one attempt -- generation calls are never retried,
//! so a failed or unparsable response falls through to the next provider
//! in the chain instead.

use std::time::Duration;

use async_trait::async_trait;
use gabay_core::{GabayError, GenerationRequest, RoadmapProvider};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// Base URL for the OpenAI API.
const API_BASE_URL: &str = "https://api.openai.com/v1";

/// Explicit deadline for a generation round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for OpenAI API communication.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI API client.
    pub fn new(api_key: &str, model: String) -> Result<Self, GabayError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| GabayError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GabayError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
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
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user_prompt.clone(),
                },
            ],
            temperature: request.temperature,
            response_format: Some(ResponseFormat::json_object()),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| GabayError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!("OpenAI API error: {}", api_err.error.message),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(GabayError::provider(message));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| GabayError::Provider {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GabayError::provider("API response contained no choices"))
    }
}

#[async_trait]
impl RoadmapProvider for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GabayError> {
        self.complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OpenAiClient {
        OpenAiClient::new("sk-test", "gpt-4o-mini".into())
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn test_request() -> GenerationRequest {
        GenerationRequest {
            system_prompt: "Emit JSON.".into(),
            user_prompt: "Category: IT, Course: Networking".into(),
            temperature: 0.4,
        }
    }

    #[tokio::test]
    async fn generate_returns_message_content() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "{\"milestones\":[]}"},
                 "finish_reason": "stop"}
            ]
        });

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "response_format": {"type": "json_object"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let text = client.generate(&test_request()).await.unwrap();
        assert_eq!(text, "{\"milestones\":[]}");
    }

    #[tokio::test]
    async fn generate_fails_without_retry_on_500() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"message": "server exploded", "type": "server_error"}
        });

        // A generation call must issue exactly one request.
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(&error_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("server exploded"), "got: {err}");
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("no choices"), "got: {err}");
    }

    #[tokio::test]
    async fn non_json_error_body_is_surfaced_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("401"), "got: {err}");
    }
}
