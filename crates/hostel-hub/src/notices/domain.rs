use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for broadcast notices.
///
/// Seeds and clients may send numeric ids; they are kept in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawNoticeId", into = "String")]
pub struct NoticeId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoticeId {
    Text(String),
    Number(i64),
}

impl From<RawNoticeId> for NoticeId {
    fn from(value: RawNoticeId) -> Self {
        match value {
            RawNoticeId::Text(text) => NoticeId(text),
            RawNoticeId::Number(number) => NoticeId(number.to_string()),
        }
    }
}

impl From<NoticeId> for String {
    fn from(value: NoticeId) -> Self {
        value.0
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Viewer segment a notice is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    User,
    Manager,
    Both,
}

impl Audience {
    pub const fn label(self) -> &'static str {
        match self {
            Audience::User => "user",
            Audience::Manager => "manager",
            Audience::Both => "both",
        }
    }
}

impl FromStr for Audience {
    type Err = UnknownAudience;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Audience::User),
            "manager" => Ok(Audience::Manager),
            "both" => Ok(Audience::Both),
            _ => Err(UnknownAudience(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown audience '{0}' (expected user, manager, or both)")]
pub struct UnknownAudience(pub String);

/// Announcement broadcast on the notice marquee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub content: String,
    pub is_global: bool,
    pub audience: Audience,
}

/// Unsaved notice submitted from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
    #[serde(default = "default_global")]
    pub is_global: bool,
    pub audience: Audience,
}

fn default_global() -> bool {
    true
}

impl NoticeDraft {
    pub(crate) fn into_notice(self, id: NoticeId) -> Notice {
        Notice {
            id,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            is_global: self.is_global,
            audience: self.audience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notice_ids_accept_numbers_and_serialize_as_text() {
        let notice: Notice = serde_json::from_value(json!({
            "id": 42,
            "title": "Water outage",
            "content": "Block B has no water until 4pm.",
            "is_global": true,
            "audience": "user",
        }))
        .expect("notice parses");

        assert_eq!(notice.id, NoticeId("42".to_string()));
        assert_eq!(
            serde_json::to_value(&notice).expect("serializes")["id"],
            json!("42")
        );
    }

    #[test]
    fn audience_parses_only_its_three_labels() {
        assert_eq!("Both".parse::<Audience>(), Ok(Audience::Both));
        assert_eq!(" USER ".parse::<Audience>(), Ok(Audience::User));
        assert_eq!("manager".parse::<Audience>(), Ok(Audience::Manager));

        for unknown in ["all", "student", "admins", ""] {
            assert_eq!(
                unknown.parse::<Audience>(),
                Err(UnknownAudience(unknown.to_string()))
            );
        }
    }

    #[test]
    fn drafts_default_to_global_and_trim_text() {
        let draft: NoticeDraft = serde_json::from_value(json!({
            "title": "  Rent due ",
            "content": " Pay by Friday. ",
            "audience": "manager",
        }))
        .expect("draft parses");

        let notice = draft.into_notice(NoticeId("n-1".to_string()));
        assert!(notice.is_global);
        assert_eq!(notice.title, "Rent due");
        assert_eq!(notice.content, "Pay by Friday.");
    }
}
