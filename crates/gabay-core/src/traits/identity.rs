// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auth-state provider injected into the request orchestrator.

/// Resolves the active user identity for persistence.
///
/// Injected explicitly rather than read from process-wide state, so the
/// orchestrator has no hidden dependency on an auth singleton.
pub trait IdentityProvider: Send + Sync {
    /// The current user id, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<String>;
}

/// A fixed identity, resolved once at startup (e.g. from configuration).
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<String>);

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<String> {
        self.0.clone()
    }
}
