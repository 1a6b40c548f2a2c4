// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI provider adapter (Provider A in the generation chain).

pub mod client;
pub mod types;

pub use client::OpenAiClient;
