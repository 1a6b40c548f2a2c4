// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generation provider for deterministic testing.
//!
//! `MockProvider` implements `RoadmapProvider` with pre-configured
//! outcomes, enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use gabay_core::{GabayError, GenerationRequest, RoadmapProvider};

/// A mock generation provider that returns pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty,
/// a default `{"milestones":[]}` text is returned. Each call is also
/// recorded so tests can assert on prompts and call counts.
pub struct MockProvider {
    name: String,
    outcomes: Mutex<VecDeque<Result<String, GabayError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockProvider {
    /// Create a new mock provider with an empty outcome queue.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful generation returning the given text.
    pub fn succeeding_with(self, text: &str) -> Self {
        self.push_outcome(Ok(text.to_string()));
        self
    }

    /// Queue a failed generation with the given provider error message.
    pub fn failing_with(self, message: &str) -> Self {
        self.push_outcome(Err(GabayError::provider(message)));
        self
    }

    /// Add an outcome to the end of the queue.
    pub fn push_outcome(&self, outcome: Result<String, GabayError>) {
        self.outcomes
            .lock()
            .expect("outcome queue poisoned")
            .push_back(outcome);
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Number of generate calls received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("request log poisoned").len()
    }
}

#[async_trait]
impl RoadmapProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GabayError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());
        self.outcomes
            .lock()
            .expect("outcome queue poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(r#"{"milestones":[]}"#.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            system_prompt: "Emit JSON.".into(),
            user_prompt: "Category: IT, Course: Networking".into(),
            temperature: 0.4,
        }
    }

    #[tokio::test]
    async fn outcomes_returned_in_order() {
        let provider = MockProvider::new("mock")
            .succeeding_with("first")
            .failing_with("boom");

        assert_eq!(provider.generate(&request()).await.unwrap(), "first");
        assert!(provider.generate(&request()).await.is_err());
        // Queue exhausted, falls back to the default empty tree
        assert_eq!(
            provider.generate(&request()).await.unwrap(),
            r#"{"milestones":[]}"#
        );
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn requests_are_recorded() {
        let provider = MockProvider::new("mock").succeeding_with("{}");
        provider.generate(&request()).await.unwrap();

        let seen = provider.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].user_prompt, "Category: IT, Course: Networking");
    }
}
