// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search-backed resource enrichment for generated roadmaps.
//!
//! The [`client`] module talks to the SearchApi backend; the [`enrich`]
//! module classifies and merges results into milestone resources.

pub mod client;
pub mod enrich;

pub use client::SearchApiClient;
pub use enrich::{enrich_milestone, is_placeholder_url};
