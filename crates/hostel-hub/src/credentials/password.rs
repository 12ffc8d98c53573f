use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Literal fragments that mark a password as guessable wherever they appear.
const COMMON_PATTERNS: &[&str] = &[
    "12345678", "87654321", "01234567", "76543210", "abcdefgh", "hgfedcba", "password",
];

/// Reason a password candidate was refused, surfaced verbatim to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRejection {
    TooShort,
    RepeatedCharacter,
    CommonPattern,
    SequentialDigits,
}

impl PasswordRejection {
    pub const fn message(self) -> &'static str {
        match self {
            PasswordRejection::TooShort => "Password must be at least 8 characters long.",
            PasswordRejection::RepeatedCharacter => {
                "Password cannot be a single repeated character."
            }
            PasswordRejection::CommonPattern => {
                "Password is too weak: it contains a common pattern."
            }
            PasswordRejection::SequentialDigits => {
                "Password cannot be a sequence of consecutive digits."
            }
        }
    }
}

/// Result of checking a password candidate against the strength rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordAssessment {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip)]
    rejection: Option<PasswordRejection>,
}

impl PasswordAssessment {
    fn accepted() -> Self {
        Self {
            valid: true,
            reason: None,
            rejection: None,
        }
    }

    fn rejected(rejection: PasswordRejection) -> Self {
        Self {
            valid: false,
            reason: Some(rejection.message().to_string()),
            rejection: Some(rejection),
        }
    }

    pub fn rejection(&self) -> Option<PasswordRejection> {
        self.rejection
    }
}

impl From<Option<PasswordRejection>> for PasswordAssessment {
    fn from(value: Option<PasswordRejection>) -> Self {
        value.map_or_else(Self::accepted, Self::rejected)
    }
}

/// Apply the strength rules in order; the first failing rule decides.
pub fn evaluate_password_strength(candidate: &str) -> PasswordAssessment {
    first_rejection(candidate).into()
}

pub(crate) fn first_rejection(candidate: &str) -> Option<PasswordRejection> {
    if candidate.chars().count() < MIN_PASSWORD_LENGTH {
        return Some(PasswordRejection::TooShort);
    }

    if is_single_repeated_character(candidate) {
        return Some(PasswordRejection::RepeatedCharacter);
    }

    if contains_common_pattern(candidate) {
        return Some(PasswordRejection::CommonPattern);
    }

    if is_sequential_digits(candidate) {
        return Some(PasswordRejection::SequentialDigits);
    }

    None
}

fn is_single_repeated_character(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) => chars.all(|ch| ch == first),
        None => false,
    }
}

fn contains_common_pattern(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    COMMON_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

/// Digits only, each step exactly +1 throughout or exactly -1 throughout.
fn is_sequential_digits(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() < MIN_PASSWORD_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let ascending = bytes.windows(2).all(|pair| pair[1] == pair[0] + 1);
    let descending = bytes.windows(2).all(|pair| pair[0] == pair[1] + 1);
    ascending || descending
}
