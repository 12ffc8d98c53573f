use super::role::Role;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Outcome of checking a navigation target against the viewer's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allowed,
    Redirect { to: &'static str },
}

impl RouteAccess {
    pub fn is_allowed(self) -> bool {
        matches!(self, RouteAccess::Allowed)
    }

    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            RouteAccess::Allowed => None,
            RouteAccess::Redirect { to } => Some(to),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Requirement {
    Exactly(Role),
    AnyAuthenticated,
}

impl Requirement {
    fn satisfied_by(self, role: Role) -> bool {
        match self {
            Requirement::Exactly(required) => role == required,
            Requirement::AnyAuthenticated => role.is_authenticated(),
        }
    }
}

const PROTECTED_SECTIONS: &[(&str, Requirement)] = &[
    ("/admin", Requirement::Exactly(Role::Admin)),
    ("/manager", Requirement::Exactly(Role::Manager)),
    ("/profile", Requirement::AnyAuthenticated),
];

/// Where a role lands right after signing in.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Manager => "/manager",
        Role::User => "/profile",
        Role::Guest => HOME_PATH,
    }
}

/// Decide whether `role` may open `path`.
///
/// Guests are sent to the login page; signed-in roles lacking access go home.
pub fn authorize(role: Role, path: &str) -> RouteAccess {
    let requirement = PROTECTED_SECTIONS
        .iter()
        .find(|(prefix, _)| within_section(path, prefix))
        .map(|(_, requirement)| *requirement);

    match requirement {
        None => RouteAccess::Allowed,
        Some(requirement) if requirement.satisfied_by(role) => RouteAccess::Allowed,
        Some(_) if !role.is_authenticated() => RouteAccess::Redirect { to: LOGIN_PATH },
        Some(_) => RouteAccess::Redirect { to: HOME_PATH },
    }
}

fn within_section(path: &str, prefix: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
