use super::domain::{Audience, Notice};
use crate::session::Role;

impl Notice {
    /// Whether this notice belongs on the marquee for `viewer`.
    ///
    /// Only global notices take part. Admins fall through to the student
    /// branch and never see manager-only notices.
    pub fn is_relevant_to(&self, viewer: Role) -> bool {
        if !self.is_global {
            return false;
        }

        if self.audience == Audience::Both {
            return true;
        }

        match viewer {
            Role::Guest => self.audience == Audience::User,
            Role::Manager => self.audience == Audience::Manager,
            Role::User | Role::Admin => self.audience == Audience::User,
        }
    }
}

/// Order-preserving selection of the notices `viewer` should see.
pub fn select_relevant_notices(notices: &[Notice], viewer: Role) -> Vec<&Notice> {
    notices
        .iter()
        .filter(|notice| notice.is_relevant_to(viewer))
        .collect()
}
