// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Gabay workspace.
//!
//! Wire-facing structs use camelCase field names to match the gateway's
//! JSON contract; enum values for resource kinds serialize as
//! `"COURSE"` / `"ARTICLE"`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classification of an external learning resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Course,
    Article,
}

/// A link to an external learning asset attached to a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource classification.
    #[serde(rename = "type")]
    pub kind: ResourceType,
    /// Display title.
    pub title: String,
    /// Short description or search snippet.
    #[serde(default)]
    pub description: String,
    /// Link target. Never a placeholder-domain URL in a finalized milestone.
    pub url: String,
}

/// Atomic unit of work within a milestone, togglable by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text estimate, e.g. "1.5 hours".
    pub duration: String,
    /// Mutated only by direct user action, never by regeneration.
    #[serde(default)]
    pub completed: bool,
}

/// One stage of a roadmap. Order within the roadmap is semantically
/// meaningful -- milestones form a linear learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    /// 1-2 sentence summary.
    #[serde(default)]
    pub overview: String,
    /// Short skill labels covered by this milestone.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text range, e.g. "Month 3-4".
    pub timeframe: String,
    pub resources: Vec<Resource>,
    pub tasks: Vec<Task>,
}

/// Progress statistics derived from a milestone tree.
///
/// Always recomputed from the tree via [`crate::progress::compute_progress`],
/// never maintained incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Rounded percentage in [0, 100]; 0 when there are no tasks.
    pub progress_pct: u32,
    /// Index of the first milestone with an incomplete task, or the last
    /// index when everything is complete.
    pub current_milestone_index: usize,
}

/// The top-level generated artifact for one user request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Assigned by the persistence layer once saved; `None` for ephemeral
    /// roadmaps that were never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-text requester input, used verbatim in generation and search.
    pub category: String,
    pub course: String,
    pub milestones: Vec<Milestone>,
    pub progress: Progress,
    pub is_completed: bool,
}

/// Per-request generation options accepted by the gateway.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationPreferences {
    /// Override key for search enrichment.
    pub search_api_key: Option<String>,
    /// Restrict enrichment to the free-resource domain allow-list.
    pub free_only: bool,
    /// Resource cap per milestone, clamped to [2, 5].
    pub max_resources: Option<usize>,
    /// Explicit override of the enrichment allow-list.
    pub allowed_domains: Option<Vec<String>>,
    /// Per-request override of provider credentials.
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

/// Prompt bundle handed to a [`crate::traits::RoadmapProvider`].
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    /// Low temperature for determinism-leaning output.
    pub temperature: f64,
}

/// A single organic result from the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_serializes_screaming() {
        let json = serde_json::to_string(&ResourceType::Course).unwrap();
        assert_eq!(json, "\"COURSE\"");
        let back: ResourceType = serde_json::from_str("\"ARTICLE\"").unwrap();
        assert_eq!(back, ResourceType::Article);
    }

    #[test]
    fn resource_type_display_round_trip() {
        use std::str::FromStr;
        for kind in [ResourceType::Course, ResourceType::Article] {
            let s = kind.to_string();
            assert_eq!(ResourceType::from_str(&s).unwrap(), kind);
        }
    }

    #[test]
    fn resource_serializes_kind_as_type() {
        let r = Resource {
            kind: ResourceType::Article,
            title: "Intro".into(),
            description: String::new(),
            url: "https://developer.mozilla.org/x".into(),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "ARTICLE");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn progress_uses_camel_case() {
        let p = Progress {
            total_tasks: 12,
            completed_tasks: 5,
            progress_pct: 42,
            current_milestone_index: 1,
        };
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["totalTasks"], 12);
        assert_eq!(json["progressPct"], 42);
        assert_eq!(json["currentMilestoneIndex"], 1);
    }

    #[test]
    fn preferences_deserialize_from_wire_names() {
        let json = r#"{
            "searchApiKey": "sk",
            "freeOnly": true,
            "maxResources": 4,
            "allowedDomains": ["freecodecamp.org"],
            "openaiApiKey": "oa",
            "geminiApiKey": "gm"
        }"#;
        let prefs: GenerationPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.search_api_key.as_deref(), Some("sk"));
        assert!(prefs.free_only);
        assert_eq!(prefs.max_resources, Some(4));
        assert_eq!(prefs.allowed_domains.as_deref().unwrap().len(), 1);
    }

    #[test]
    fn preferences_default_when_fields_absent() {
        let prefs: GenerationPreferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.search_api_key.is_none());
        assert!(!prefs.free_only);
        assert!(prefs.max_resources.is_none());
    }

    #[test]
    fn task_completed_defaults_false() {
        let json = r#"{"id": "t1", "title": "Read", "duration": "1 hour"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.completed);
        assert!(task.description.is_empty());
    }

    #[test]
    fn roadmap_omits_absent_id() {
        let roadmap = Roadmap {
            id: None,
            category: "IT".into(),
            course: "Networking".into(),
            milestones: vec![],
            progress: Progress {
                total_tasks: 0,
                completed_tasks: 0,
                progress_pct: 0,
                current_milestone_index: 0,
            },
            is_completed: false,
        };
        let json = serde_json::to_value(&roadmap).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["isCompleted"], false);
    }
}
