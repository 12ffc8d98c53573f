//! Stubbed role sessions and role-gated navigation.
//!
//! Signing in assigns a role without verifying any credential; there is no
//! persistence. The guard decides whether a role may enter `/admin`,
//! `/manager`, or `/profile`, and where to send it otherwise.

mod guard;
mod role;
pub mod router;

pub use guard::{authorize, landing_path, RouteAccess, LOGIN_PATH};
pub use role::{Role, UnknownRole};
pub use router::session_router;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current viewer state handed explicitly to resolvers and guards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Session {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn guest() -> Self {
        Self::default()
    }

    /// Assign `role` to the session. Signing in as `Guest` yields a guest session.
    pub fn sign_in(role: Role, now: DateTime<Utc>) -> Self {
        if !role.is_authenticated() {
            return Self::guest();
        }

        tracing::debug!(role = %role, "session signed in");
        Self {
            role,
            signed_in_at: Some(now),
        }
    }

    pub fn sign_out(&mut self) {
        *self = Self::guest();
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_authenticated()
    }

    /// Route the session should land on after signing in.
    pub fn landing_path(&self) -> &'static str {
        landing_path(self.role)
    }

    pub fn authorize(&self, path: &str) -> RouteAccess {
        authorize(self.role, path)
    }
}
