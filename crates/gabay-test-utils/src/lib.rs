// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Gabay integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without external services.
//!
//! # Components
//!
//! - [`MockProvider`] - Mock generation provider with a FIFO outcome queue
//! - [`MockSearch`] - Mock search backend with per-domain canned hits

pub mod mock_provider;
pub mod mock_search;

pub use mock_provider::MockProvider;
pub use mock_search::{hit, MockSearch};
