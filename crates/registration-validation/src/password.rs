//! Password validation functions

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols accepted (and one of which is required) in a password
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Combined message for any failed password sub-rule
pub const PASSWORD_RULE_MESSAGE: &str = "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character";

/// Individual password sub-rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
    AllowedCharacters,
}

/// Outcome of every password sub-rule for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordReport {
    pub long_enough: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub allowed_only: bool,
}

impl PasswordReport {
    /// All sub-rules hold
    pub fn is_strong(&self) -> bool {
        self.missing().is_empty()
    }

    /// Sub-rules that failed, in check order
    pub fn missing(&self) -> Vec<PasswordRule> {
        [
            (self.long_enough, PasswordRule::MinLength),
            (self.has_lowercase, PasswordRule::Lowercase),
            (self.has_uppercase, PasswordRule::Uppercase),
            (self.has_digit, PasswordRule::Digit),
            (self.has_symbol, PasswordRule::Symbol),
            (self.allowed_only, PasswordRule::AllowedCharacters),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, rule)| rule)
        .collect()
    }
}

fn is_password_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(&c)
}

fn is_allowed_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_password_symbol(c)
}

/// Evaluates every sub-rule of the composite password policy.
///
/// Character classes are ASCII: `é` is neither a lowercase letter nor an
/// allowed character.
pub fn check_password(password: &str) -> PasswordReport {
    PasswordReport {
        long_enough: password.chars().count() >= MIN_PASSWORD_LENGTH,
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_symbol: password.chars().any(is_password_symbol),
        allowed_only: password.chars().all(is_allowed_password_char),
    }
}

/// Composite password rule
///
/// The error does not say which sub-rule failed; use [`check_password`]
/// for that.
pub fn validate_password(password: &str) -> Result<(), String> {
    check_password(password)
        .is_strong()
        .then_some(())
        .ok_or_else(|| PASSWORD_RULE_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password() {
        assert!(validate_password("Abcd123@").is_ok());
        assert!(validate_password("Secure$Pass1").is_ok());
        assert!(validate_password("xY9!xY9!").is_ok());
    }

    #[test]
    fn test_weak_password() {
        assert!(validate_password("abcd1234").is_err());
        assert!(validate_password("ABCD123@").is_err());
        assert!(validate_password("Abcdefg@").is_err());
        assert!(validate_password("Abcd1234").is_err());
        assert!(validate_password("Ab1@").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_disallowed_characters() {
        // '#' is not in the symbol set, space is not allowed at all
        assert!(validate_password("Abcd123@#").is_err());
        assert!(validate_password("Abcd 123@").is_err());
        assert!(validate_password("Abcdé123@").is_err());
    }

    #[test]
    fn test_message_is_combined() {
        assert_eq!(
            validate_password("abcd1234").unwrap_err(),
            PASSWORD_RULE_MESSAGE
        );
        assert_eq!(
            validate_password("ABCD123@").unwrap_err(),
            PASSWORD_RULE_MESSAGE
        );
    }

    #[test]
    fn test_report_lists_missing_rules() {
        let report = check_password("abcd1234");
        assert_eq!(
            report.missing(),
            vec![PasswordRule::Uppercase, PasswordRule::Symbol]
        );

        let report = check_password("Ab1@ Ab1@");
        assert_eq!(report.missing(), vec![PasswordRule::AllowedCharacters]);

        assert!(check_password("Abcd123@").missing().is_empty());
    }
}
