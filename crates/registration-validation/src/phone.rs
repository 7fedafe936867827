//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in an accepted phone number
pub const PHONE_DIGITS: usize = 10;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Exactly ten ASCII digits, nothing else
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
