// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request orchestrator for roadmap generation.
//!
//! Drives one generation request end to end: input validation, a
//! single-flight guard per (category, course) pair, the gateway call,
//! and a best-effort persistence write when a user identity is present.

pub mod orchestrator;

pub use orchestrator::Orchestrator;
