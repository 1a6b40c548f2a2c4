// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed generation prompts.
//!
//! The system prompt pins the output contract: exactly 6 milestones,
//! exactly 3 tasks each, at least 2 resources per milestone with one
//! COURSE and one ARTICLE, sourced only from the configured allow-list.

use gabay_core::GenerationRequest;

/// Low temperature for determinism-leaning output.
pub const TEMPERATURE: f64 = 0.4;

/// Builds the prompt bundle for one generation call.
pub fn build_request(category: &str, course: &str, domains: &[String]) -> GenerationRequest {
    let domain_list = domains.join(", ");
    let system_prompt = format!(
        "You are a curriculum designer. Produce a learning roadmap as a single \
JSON object with this exact shape and nothing else:\n\
{{\"milestones\": [{{\"id\": string, \"title\": string, \"overview\": string, \
\"skills\": [string], \"timeframe\": string, \
\"resources\": [{{\"type\": \"COURSE\"|\"ARTICLE\", \"title\": string, \
\"description\": string, \"url\": string}}], \
\"tasks\": [{{\"id\": string, \"title\": string, \"description\": string, \
\"duration\": string, \"completed\": false}}]}}]}}\n\
Rules:\n\
- Exactly 6 milestones, ordered as a linear learning path.\n\
- Exactly 3 tasks per milestone, every task with \"completed\": false.\n\
- At least 2 resources per milestone, including one COURSE and one ARTICLE.\n\
- Resource URLs must be live pages on these domains only: {domain_list}.\n\
- Output raw JSON with no markdown fences or commentary."
    );

    GenerationRequest {
        system_prompt,
        user_prompt: format!("Category: {category}\nCourse: {course}"),
        temperature: TEMPERATURE,
    }
}
