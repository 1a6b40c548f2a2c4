// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Gabay roadmap service.
//!
//! Provides the domain model (roadmaps, milestones, tasks, resources),
//! the shared error type, the adapter traits implemented by provider and
//! search crates, and the pure pieces of the generation pipeline:
//! progress computation, JSON salvage, and payload normalization.

pub mod error;
pub mod normalize;
pub mod progress;
pub mod salvage;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::GabayError;
pub use normalize::normalize_milestones;
pub use progress::{compute_progress, is_completed};
pub use salvage::parse_lenient;
pub use traits::{IdentityProvider, RoadmapProvider, SearchBackend, StaticIdentity};
pub use types::{
    GenerationPreferences, GenerationRequest, Milestone, Progress, Resource, ResourceType,
    Roadmap, SearchHit, Task,
};
