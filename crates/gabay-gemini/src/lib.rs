// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini provider adapter (Provider B in the generation chain).

pub mod client;
pub mod types;

pub use client::GeminiClient;
