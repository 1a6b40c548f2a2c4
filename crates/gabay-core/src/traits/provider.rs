// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for AI text-generation services.

use async_trait::async_trait;

use crate::error::GabayError;
use crate::types::GenerationRequest;

/// Adapter for an AI provider that can draft a roadmap.
///
/// Providers are tried in configuration order by the generation pipeline;
/// each gets exactly one attempt per request. A provider returns the raw
/// model output as text -- JSON parsing, salvage, and normalization live
/// in one place downstream, so adding a provider never duplicates them.
#[async_trait]
pub trait RoadmapProvider: Send + Sync {
    /// Short identifier used in logs (e.g. "openai", "gemini").
    fn name(&self) -> &str;

    /// Sends the generation prompt and returns the raw model output.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GabayError>;
}
