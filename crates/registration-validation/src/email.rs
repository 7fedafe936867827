//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Something, '@', something, '.', something. Unanchored on purpose: the
// rule is a containment test, so "x a@b.c" is accepted.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Validates email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
