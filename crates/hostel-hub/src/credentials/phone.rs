use std::sync::OnceLock;

use regex::Regex;

/// Optional `+88`/`88` country prefix, then an 11 digit local number `01[3-9]XXXXXXXX`.
const PHONE_PATTERN: &str = r"^(?:\+88|88)?01[3-9][0-9]{8}$";

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

/// Strip the separators people type between digit groups.
pub(crate) fn normalize_phone(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|ch| *ch != ' ' && *ch != '-')
        .collect()
}

/// Whether `candidate` is a mobile number after removing spaces and hyphens.
pub fn is_valid_phone_number(candidate: &str) -> bool {
    phone_pattern().is_match(&normalize_phone(candidate))
}
