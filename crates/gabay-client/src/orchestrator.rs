// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation orchestrator over the gateway HTTP API.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gabay_core::{
    compute_progress, is_completed, GabayError, GenerationPreferences, IdentityProvider,
    Milestone, Roadmap,
};
use gabay_store::RoadmapStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Deadline for the gateway round trip. Wider than the gateway's own
/// provider deadline so the server-side timeout fires first.
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(150);

#[derive(Debug, Serialize)]
struct GatewayRequest<'a> {
    category: &'a str,
    course: &'a str,
    preferences: &'a GenerationPreferences,
}

#[derive(Debug, Deserialize)]
struct GatewayResponse {
    milestones: Vec<Milestone>,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    error: String,
}

/// Removes the in-flight key on drop, so a panicking or failing request
/// never leaves its (category, course) pair blocked.
struct FlightGuard {
    flights: Arc<Mutex<HashSet<(String, String)>>>,
    key: (String, String),
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        if let Ok(mut flights) = self.flights.lock() {
            flights.remove(&self.key);
        }
    }
}

/// Client-side orchestrator for roadmap generation.
pub struct Orchestrator {
    client: reqwest::Client,
    gateway_url: String,
    store: Option<RoadmapStore>,
    identity: Arc<dyn IdentityProvider>,
    in_flight: Arc<Mutex<HashSet<(String, String)>>>,
}

impl Orchestrator {
    /// Creates an orchestrator targeting `gateway_url`. Persistence is
    /// skipped entirely when `store` is `None`.
    pub fn new(
        gateway_url: String,
        store: Option<RoadmapStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Result<Self, GabayError> {
        let client = reqwest::Client::builder()
            .timeout(GATEWAY_TIMEOUT)
            .build()
            .map_err(|e| GabayError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
            store,
            identity,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        })
    }

    /// Generates a roadmap with default preferences.
    pub async fn generate(&self, category: &str, course: &str) -> Result<Roadmap, GabayError> {
        self.generate_with(category, course, &GenerationPreferences::default())
            .await
    }

    /// Generates a roadmap for the given inputs.
    ///
    /// Exactly one gateway call per invocation, no automatic retry.
    /// Concurrent calls for the same (category, course) pair are rejected
    /// with [`GabayError::InFlight`] rather than duplicated. On success a
    /// best-effort persistence write runs when an identity is available;
    /// its failure never fails the operation.
    pub async fn generate_with(
        &self,
        category: &str,
        course: &str,
        preferences: &GenerationPreferences,
    ) -> Result<Roadmap, GabayError> {
        let category = category.trim();
        let course = course.trim();
        if category.is_empty() || course.is_empty() {
            return Err(GabayError::InvalidInput(
                "category and course are required".to_string(),
            ));
        }

        let _guard = self.acquire_flight(category, course)?;

        let milestones = self.call_gateway(category, course, preferences).await?;
        let progress = compute_progress(&milestones);
        let mut roadmap = Roadmap {
            id: None,
            category: category.to_string(),
            course: course.to_string(),
            milestones,
            progress,
            is_completed: is_completed(&progress),
        };

        if let (Some(store), Some(user_id)) = (&self.store, self.identity.current_user()) {
            let id = store
                .create(&user_id, category, course, &roadmap.milestones)
                .await;
            debug!(roadmap_id = %id, "roadmap saved");
            roadmap.id = Some(id);
        }

        Ok(roadmap)
    }

    fn acquire_flight(&self, category: &str, course: &str) -> Result<FlightGuard, GabayError> {
        let key = (category.to_string(), course.to_string());
        let mut flights = self
            .in_flight
            .lock()
            .map_err(|_| GabayError::Internal("in-flight set poisoned".to_string()))?;
        if !flights.insert(key.clone()) {
            return Err(GabayError::InFlight {
                category: key.0,
                course: key.1,
            });
        }
        Ok(FlightGuard {
            flights: self.in_flight.clone(),
            key,
        })
    }

    async fn call_gateway(
        &self,
        category: &str,
        course: &str,
        preferences: &GenerationPreferences,
    ) -> Result<Vec<Milestone>, GabayError> {
        let body = GatewayRequest {
            category,
            course,
            preferences,
        };

        let response = self
            .client
            .post(format!("{}/v1/roadmaps", self.gateway_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GabayError::Timeout {
                        duration: GATEWAY_TIMEOUT,
                    }
                } else {
                    GabayError::provider(format!("gateway request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<GatewayErrorBody>(&text) {
                Ok(body) => body.error,
                Err(_) => format!("gateway returned {status}"),
            };
            warn!(status = %status, message, "generation rejected");
            if status.as_u16() == 400 {
                return Err(GabayError::InvalidInput(message));
            }
            return Err(GabayError::provider(message));
        }

        let parsed: GatewayResponse =
            response.json().await.map_err(|e| {
                GabayError::provider(format!("malformed gateway response: {e}"))
            })?;
        Ok(parsed.milestones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gabay_core::StaticIdentity;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn milestone_body() -> serde_json::Value {
        serde_json::json!({
            "milestones": [{
                "id": "milestone-1",
                "title": "Basics",
                "overview": "",
                "skills": [],
                "timeframe": "Month 1",
                "resources": [
                    {"type": "ARTICLE", "title": "Intro", "url": "https://edx.org/intro"}
                ],
                "tasks": [
                    {"id": "milestone-1-task-1", "title": "Read", "description": "",
                     "duration": "1 hour", "completed": false}
                ]
            }]
        })
    }

    fn anonymous(gateway: &MockServer) -> Orchestrator {
        Orchestrator::new(gateway.uri(), None, Arc::new(StaticIdentity(None))).unwrap()
    }

    #[tokio::test]
    async fn successful_generation_builds_a_roadmap() {
        let gateway = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/roadmaps"))
            .and(body_partial_json(
                serde_json::json!({"category": "IT", "course": "Networking"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(milestone_body()))
            .expect(1)
            .mount(&gateway)
            .await;

        let roadmap = anonymous(&gateway)
            .generate("IT", "Networking")
            .await
            .unwrap();

        assert!(roadmap.id.is_none());
        assert_eq!(roadmap.category, "IT");
        assert_eq!(roadmap.milestones.len(), 1);
        assert_eq!(roadmap.progress.total_tasks, 1);
        assert_eq!(roadmap.progress.completed_tasks, 0);
        assert!(!roadmap.is_completed);
    }

    #[tokio::test]
    async fn empty_input_is_rejected_without_a_network_call() {
        let gateway = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&gateway)
            .await;

        let err = anonymous(&gateway).generate("IT", "  ").await.unwrap_err();
        assert!(matches!(err, GabayError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn gateway_error_body_is_surfaced() {
        let gateway = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/roadmaps"))
            .respond_with(
                ResponseTemplate::new(502)
                    .set_body_json(serde_json::json!({"error": "AI generation failed"})),
            )
            .mount(&gateway)
            .await;

        let err = anonymous(&gateway)
            .generate("IT", "Networking")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "provider error: AI generation failed");
    }

    #[tokio::test]
    async fn concurrent_duplicate_request_is_rejected() {
        let gateway = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/roadmaps"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(milestone_body())
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&gateway)
            .await;

        let orchestrator = Arc::new(anonymous(&gateway));
        let first = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.generate("IT", "Networking").await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        let err = orchestrator
            .generate("IT", "Networking")
            .await
            .unwrap_err();
        assert!(matches!(err, GabayError::InFlight { .. }));

        // A different pair is not blocked.
        assert!(orchestrator.generate("IT", "Databases").await.is_ok());

        first.await.unwrap().unwrap();

        // The pair is usable again once the first request finishes.
        assert!(orchestrator.generate("IT", "Networking").await.is_ok());
    }

    #[tokio::test]
    async fn persistence_failure_still_yields_a_local_id() {
        let gateway = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/roadmaps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(milestone_body()))
            .mount(&gateway)
            .await;

        let store_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/roadmaps"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&store_server)
            .await;

        let store = RoadmapStore::new(store_server.uri(), "svc-key").unwrap();
        let orchestrator = Orchestrator::new(
            gateway.uri(),
            Some(store),
            Arc::new(StaticIdentity(Some("user-1".into()))),
        )
        .unwrap();

        let roadmap = orchestrator.generate("IT", "Networking").await.unwrap();
        let id = roadmap.id.expect("fallback id assigned");
        let (millis, suffix) = id.split_once('-').expect("id has a dash");
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn remote_id_is_attached_when_persistence_succeeds() {
        let gateway = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/roadmaps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(milestone_body()))
            .mount(&gateway)
            .await;

        let store_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/roadmaps"))
            .and(body_partial_json(serde_json::json!({"user_id": "user-1"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!([{"id": "rm-7"}])),
            )
            .mount(&store_server)
            .await;

        let store = RoadmapStore::new(store_server.uri(), "svc-key").unwrap();
        let orchestrator = Orchestrator::new(
            gateway.uri(),
            Some(store),
            Arc::new(StaticIdentity(Some("user-1".into()))),
        )
        .unwrap();

        let roadmap = orchestrator.generate("IT", "Networking").await.unwrap();
        assert_eq!(roadmap.id.as_deref(), Some("rm-7"));
    }
}
