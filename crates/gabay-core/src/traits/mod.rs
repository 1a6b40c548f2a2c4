// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits implemented by the provider, search, and identity crates.

pub mod identity;
pub mod provider;
pub mod search;

pub use identity::{IdentityProvider, StaticIdentity};
pub use provider::RoadmapProvider;
pub use search::SearchBackend;
