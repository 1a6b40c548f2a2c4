// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort roadmap persistence over a PostgREST-style endpoint.
//!
//! Persistence is a side channel of generation, never its gatekeeper:
//! [`RoadmapStore::create`] always yields a usable id (remote when the
//! insert lands, locally generated otherwise) and
//! [`RoadmapStore::update_progress`] swallows failures entirely so that
//! task toggles never block on network latency.

pub mod store;

pub use store::{fallback_id, RoadmapStore};
