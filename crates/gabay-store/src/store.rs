// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the roadmap table behind a PostgREST-style REST layer.

use std::time::Duration;

use gabay_core::{compute_progress, is_completed, GabayError, Milestone};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Deadline for one persistence round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Locally generated pseudo-unique id, `{millis}-{6 alphanumeric}`.
/// Used when the remote insert fails so the roadmap stays usable.
pub fn fallback_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{}-{suffix}", chrono::Utc::now().timestamp_millis())
}

/// Row shape for the roadmaps table. Progress columns are a snapshot
/// derived from the milestone tree at write time.
#[derive(Debug, Serialize)]
struct RoadmapRow<'a> {
    user_id: &'a str,
    category: &'a str,
    course: &'a str,
    milestones: &'a [Milestone],
    total_tasks: usize,
    completed_tasks: usize,
    progress_pct: u32,
    current_milestone_index: usize,
    is_completed: bool,
}

/// Progress-only columns for an update.
#[derive(Debug, Serialize)]
struct ProgressPatch<'a> {
    milestones: &'a [Milestone],
    total_tasks: usize,
    completed_tasks: usize,
    progress_pct: u32,
    current_milestone_index: usize,
    is_completed: bool,
}

#[derive(Debug, Deserialize)]
struct InsertedRow {
    id: String,
}

/// HTTP client for the persistence boundary.
#[derive(Debug, Clone)]
pub struct RoadmapStore {
    client: reqwest::Client,
    rest_url: String,
}

impl RoadmapStore {
    /// Creates a new store client against `rest_url` (the REST base, e.g.
    /// `https://myproject.supabase.co/rest/v1`), authenticating every
    /// request with the service key.
    pub fn new(rest_url: String, service_key: &str) -> Result<Self, GabayError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth = reqwest::header::HeaderValue::from_str(&format!("Bearer {service_key}"))
            .map_err(|e| GabayError::Config(format!("invalid store service key: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);
        let mut apikey = reqwest::header::HeaderValue::from_str(service_key)
            .map_err(|e| GabayError::Config(format!("invalid store service key: {e}")))?;
        apikey.set_sensitive(true);
        headers.insert("apikey", apikey);

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| GabayError::Storage {
                source: Box::new(e),
            })?;

        Ok(Self {
            client,
            rest_url: rest_url.trim_end_matches('/').to_string(),
        })
    }

    /// Inserts a new roadmap row with a progress snapshot and returns its
    /// id. Never fails: any persistence error is logged and a locally
    /// generated [`fallback_id`] is returned instead.
    pub async fn create(
        &self,
        user_id: &str,
        category: &str,
        course: &str,
        milestones: &[Milestone],
    ) -> String {
        let progress = compute_progress(milestones);
        let row = RoadmapRow {
            user_id,
            category,
            course,
            milestones,
            total_tasks: progress.total_tasks,
            completed_tasks: progress.completed_tasks,
            progress_pct: progress.progress_pct,
            current_milestone_index: progress.current_milestone_index,
            is_completed: is_completed(&progress),
        };

        match self.insert(&row).await {
            Ok(id) => {
                debug!(roadmap_id = %id, "roadmap persisted");
                id
            }
            Err(error) => {
                warn!(error = %error, "roadmap insert failed, using local id");
                fallback_id()
            }
        }
    }

    /// Writes the current progress snapshot for an existing roadmap.
    /// Fire-and-forget: failures are logged and swallowed.
    pub async fn update_progress(&self, roadmap_id: &str, milestones: &[Milestone]) {
        let progress = compute_progress(milestones);
        let patch = ProgressPatch {
            milestones,
            total_tasks: progress.total_tasks,
            completed_tasks: progress.completed_tasks,
            progress_pct: progress.progress_pct,
            current_milestone_index: progress.current_milestone_index,
            is_completed: is_completed(&progress),
        };

        let result = self
            .client
            .patch(format!("{}/roadmaps", self.rest_url))
            .query(&[("id", format!("eq.{roadmap_id}"))])
            .json(&patch)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!(roadmap_id, "progress persisted");
            }
            Ok(response) => {
                warn!(roadmap_id, status = %response.status(), "progress update rejected");
            }
            Err(error) => {
                warn!(roadmap_id, error = %error, "progress update failed");
            }
        }
    }

    async fn insert(&self, row: &RoadmapRow<'_>) -> Result<String, GabayError> {
        let response = self
            .client
            .post(format!("{}/roadmaps", self.rest_url))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(|e| GabayError::Storage {
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GabayError::Storage {
                source: format!("store returned {status}: {body}").into(),
            });
        }

        let rows: Vec<InsertedRow> =
            response.json().await.map_err(|e| GabayError::Storage {
                source: Box::new(e),
            })?;
        rows.into_iter()
            .next()
            .map(|r| r.id)
            .ok_or_else(|| GabayError::Storage {
                source: "insert returned no rows".into(),
            })
    }
}
