// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Roadmap generation gateway.
//!
//! Receives a generation request over HTTP, runs the provider chain
//! (primary, then fallback), normalizes the model output into the
//! canonical milestone shape, optionally enriches resources via web
//! search, and returns the finished milestone list.
//!
//! # Modules
//!
//! - [`server`] - axum router, shared state, and the serve loop
//! - [`handlers`] - HTTP request handlers and wire types
//! - [`pipeline`] - provider chain execution, parsing, enrichment
//! - [`prompt`] - fixed generation prompts

pub mod handlers;
pub mod pipeline;
pub mod prompt;
pub mod server;

pub use pipeline::{ConfigChainBuilder, ConfigSearchResolver, ProviderChainBuilder, SearchResolver};
pub use server::{router, start_server, GatewayState};
