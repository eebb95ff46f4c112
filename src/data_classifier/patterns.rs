use once_cell::sync::Lazy;
use regex::Regex;

use super::SensitiveDataType;

pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

// Exactly 3-3-4 digit groups, one optional separator between groups.
pub const PHONE_PATTERN: &str = r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b";

pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"));

/// Fixed detection order. The first matching pattern labels a column.
pub static PATTERN_REGISTRY: Lazy<[(SensitiveDataType, &'static Regex); 2]> = Lazy::new(|| {
    [
        (SensitiveDataType::Email, &*EMAIL_REGEX),
        (SensitiveDataType::Phone, &*PHONE_REGEX),
    ]
});
