// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Salvage of a JSON object embedded in free-text model output.
//!
//! Some providers wrap their JSON in prose or markdown fences despite
//! being asked for structured output. Rather than regex brace matching,
//! this is a string-aware scanner: it tracks brace depth but ignores
//! braces inside JSON string literals and their escape sequences.

use serde_json::Value;

/// Extract the first balanced top-level JSON object from `text`.
///
/// Returns the matched slice, or `None` when no balanced object exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse `text` as JSON, falling back to the embedded-object scanner.
pub fn parse_lenient(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }
    extract_json_object(text).and_then(|slice| serde_json::from_str(slice).ok())
}
