use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of the viewer driving notice selection and route gating.
///
/// `Guest` is the explicit "nobody signed in" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    User,
    Manager,
    Admin,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    pub const fn is_authenticated(self) -> bool {
        !matches!(self, Role::Guest)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "user" | "student" | "bachelor" => Ok(Role::User),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}' (expected guest, user, manager, or admin)")]
pub struct UnknownRole(pub String);
