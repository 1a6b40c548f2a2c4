// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource enrichment engine.
//!
//! For each milestone, issues one scoped search per allow-listed domain
//! (sequentially, bounding outbound request rate), classifies hits as
//! COURSE or ARTICLE, and merges them with the AI-suggested resources up
//! to the configured cap. Enrichment is strictly best-effort: a failed
//! domain is skipped and never aborts generation.
//!
//! The host patterns below are heuristics over current platform URL
//! structures and will drift as platforms change; review them
//! periodically instead of building logic around them.

use gabay_core::{Milestone, Resource, ResourceType, SearchBackend, SearchHit};
use tracing::warn;

/// Domain emitted by generation scaffolding for made-up links. Resources
/// on this domain never survive into a finalized milestone.
pub const PLACEHOLDER_DOMAIN: &str = "example.com";

/// Hosts that always classify as COURSE.
const COURSE_HOSTS: &[&str] = &["coursera.org", "edx.org", "udacity.com", "udemy.com"];

/// Title/URL keywords that indicate a course.
const COURSE_KEYWORDS: &[&str] = &["course", "learn", "specialization"];

/// True when `url` points at the placeholder domain (or a subdomain).
pub fn is_placeholder_url(url: &str) -> bool {
    match host_of(url) {
        Some(host) => {
            host == PLACEHOLDER_DOMAIN || host.ends_with(&format!(".{PLACEHOLDER_DOMAIN}"))
        }
        None => false,
    }
}

/// Lowercased host of a URL, with any `www.` prefix and port stripped.
fn host_of(url: &str) -> Option<String> {
    let rest = url.split("://").nth(1).unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next()?.split(':').next()?;
    let host = host.trim().to_ascii_lowercase();
    if host.is_empty() {
        return None;
    }
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

/// Classify a search hit as COURSE or ARTICLE.
fn classify(hit: &SearchHit) -> ResourceType {
    if let Some(host) = host_of(&hit.link) {
        if COURSE_HOSTS
            .iter()
            .any(|d| host == *d || host.ends_with(&format!(".{d}")))
        {
            return ResourceType::Course;
        }
        // freeCodeCamp hosts both articles and its curriculum; only the
        // /learn path is a course.
        if host.ends_with("freecodecamp.org") && hit.link.contains("/learn") {
            return ResourceType::Course;
        }
    }
    let haystack = format!("{} {}", hit.title, hit.link).to_lowercase();
    if COURSE_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        ResourceType::Course
    } else {
        ResourceType::Article
    }
}

fn hit_to_resource(hit: SearchHit, kind: ResourceType) -> Resource {
    let title = if hit.title.trim().is_empty() {
        hit.link.clone()
    } else {
        hit.title
    };
    Resource {
        kind,
        title,
        description: hit.snippet,
        url: hit.link,
    }
}

/// Enrich one milestone's resources in place.
///
/// Searches `{title} {first skill}` against each domain in order until
/// the candidate pool reaches `max_resources`, then merges
/// diversity-first: one COURSE and one ARTICLE when obtainable, the rest
/// filled from the leftover pool and finally from the AI-suggested
/// resources, deduplicated by URL and capped at `max_resources`.
pub async fn enrich_milestone(
    backend: &dyn SearchBackend,
    milestone: &mut Milestone,
    domains: &[String],
    max_resources: usize,
) {
    let query = match milestone.skills.first() {
        Some(skill) => format!("{} {skill}", milestone.title),
        None => milestone.title.clone(),
    };

    let mut courses: Vec<Resource> = Vec::new();
    let mut articles: Vec<Resource> = Vec::new();

    for domain in domains {
        if courses.len() + articles.len() >= max_resources {
            break;
        }
        match backend.search(&query, domain).await {
            Ok(hits) => {
                for hit in hits {
                    if is_placeholder_url(&hit.link) {
                        continue;
                    }
                    let kind = classify(&hit);
                    let list = match kind {
                        ResourceType::Course => &mut courses,
                        ResourceType::Article => &mut articles,
                    };
                    if list.iter().any(|r| r.url == hit.link) {
                        continue;
                    }
                    list.push(hit_to_resource(hit, kind));
                }
            }
            Err(error) => {
                warn!(domain, error = %error, "domain search failed, skipping");
            }
        }
    }

    let mut merged: Vec<Resource> = Vec::with_capacity(max_resources);
    let push_unique = |merged: &mut Vec<Resource>, candidate: &Resource| {
        if merged.len() < max_resources && !merged.iter().any(|r| r.url == candidate.url) {
            merged.push(candidate.clone());
        }
    };

    // Type diversity first: the leading course and article, when present.
    if let Some(course) = courses.first() {
        push_unique(&mut merged, course);
    }
    if let Some(article) = articles.first() {
        push_unique(&mut merged, article);
    }
    for candidate in courses.iter().skip(1).chain(articles.iter().skip(1)) {
        push_unique(&mut merged, candidate);
    }

    // AI-suggested resources fill any remaining slots, placeholders dropped.
    for original in &milestone.resources {
        if is_placeholder_url(&original.url) {
            continue;
        }
        push_unique(&mut merged, original);
    }

    milestone.resources = merged;
}
