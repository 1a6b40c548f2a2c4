// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Normalization of provider payloads into the canonical milestone shape.
//!
//! Providers are prompted for an exact schema but drift in practice:
//! missing ids, absent timeframes, unknown resource types. Normalization
//! fills positional defaults instead of rejecting the payload; only a
//! missing or empty milestone list is treated as structurally invalid,
//! which triggers fallback to the next provider.

use serde_json::Value;

use crate::error::GabayError;
use crate::types::{Milestone, Resource, ResourceType, Task};

/// Normalize a raw provider payload into canonical milestones.
///
/// Accepts either `{"milestones": [...]}` or a bare top-level array.
/// Returns an error when no non-empty milestone array is present.
pub fn normalize_milestones(payload: &Value) -> Result<Vec<Milestone>, GabayError> {
    let raw = payload
        .get("milestones")
        .and_then(Value::as_array)
        .or_else(|| payload.as_array())
        .ok_or_else(|| GabayError::provider("payload has no milestones array"))?;

    if raw.is_empty() {
        return Err(GabayError::provider("payload has an empty milestones array"));
    }

    Ok(raw
        .iter()
        .enumerate()
        .map(|(i, value)| normalize_milestone(value, i))
        .collect())
}

fn normalize_milestone(value: &Value, index: usize) -> Milestone {
    let id = str_field(value, "id").unwrap_or_else(|| format!("milestone-{}", index + 1));
    let title =
        str_field(value, "title").unwrap_or_else(|| format!("Milestone {}", index + 1));
    let timeframe =
        str_field(value, "timeframe").unwrap_or_else(|| format!("Month {}", index + 1));

    let skills = value
        .get("skills")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let tasks = value
        .get("tasks")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .enumerate()
                .map(|(j, t)| normalize_task(t, &id, j))
                .collect()
        })
        .unwrap_or_default();

    let resources = value
        .get("resources")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(normalize_resource).collect())
        .unwrap_or_default();

    Milestone {
        id,
        title,
        overview: str_field(value, "overview").unwrap_or_default(),
        skills,
        timeframe,
        resources,
        tasks,
    }
}

fn normalize_task(value: &Value, milestone_id: &str, index: usize) -> Task {
    Task {
        id: str_field(value, "id")
            .unwrap_or_else(|| format!("{milestone_id}-task-{}", index + 1)),
        title: str_field(value, "title").unwrap_or_else(|| format!("Task {}", index + 1)),
        description: str_field(value, "description").unwrap_or_default(),
        duration: str_field(value, "duration").unwrap_or_else(|| "1 hour".to_string()),
        // Freshly generated tasks are always incomplete; completion is a
        // user action, not a model output.
        completed: false,
    }
}

/// Resources without a usable URL are dropped; unknown types coerce to COURSE.
fn normalize_resource(value: &Value) -> Option<Resource> {
    let url = str_field(value, "url").filter(|u| !u.trim().is_empty())?;
    let kind = match str_field(value, "type").as_deref() {
        Some(t) if t.eq_ignore_ascii_case("article") => ResourceType::Article,
        _ => ResourceType::Course,
    };
    Some(Resource {
        kind,
        title: str_field(value, "title").unwrap_or_else(|| url.clone()),
        description: str_field(value, "description").unwrap_or_default(),
        url,
    })
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
