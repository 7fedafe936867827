// File: src/validation.rs
// Purpose: The registration validator and its result type

use std::collections::BTreeMap;
use std::fmt;

use registration_validation::{
    equals, has_image_extension, is_present, is_valid_email, is_valid_phone, validate_min_length,
    validate_password,
};
use serde::Serialize;

use crate::field::Field;
use crate::input::RegistrationInput;

/// Trait for types that can be validated
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with one message per failing field
    fn validate(&self) -> Result<(), ValidationResult>;
}

/// One failing field and the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Field name to error message, for every field that fails its rule.
///
/// A field is present iff its value currently violates its rule; an empty
/// result means the form is valid. Serializes as a JSON object keyed by the
/// fields' wire names, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for a specific field
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Error for a field given by wire name; unknown names have no error
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        name.parse().ok().and_then(|field| self.get(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        self.iter()
            .map(|(field, message)| FieldError {
                field,
                message: message.to_string(),
            })
            .collect()
    }

    /// Convert into a Result (Err when any field failed)
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn insert(&mut self, field: Field, message: String) {
        self.errors.insert(field, message);
    }
}

impl IntoIterator for ValidationResult {
    type Item = (Field, String);
    type IntoIter = std::collections::btree_map::IntoIter<Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Validate every field of `values`.
///
/// All fields are checked on every call; only confirmPassword looks at
/// another field. Pure: no I/O, never panics.
pub fn validate(values: &RegistrationInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    for field in Field::ALL {
        if let Some(message) = validate_field(field, values) {
            result.insert(field, message);
        }
    }

    result
}

/// Validate a single field of `values`, as done on change or blur.
pub fn validate_field(field: Field, values: &RegistrationInput) -> Option<String> {
    let outcome = match field {
        Field::Name => text_rule(field, values, |name| {
            validate_min_length(name, Field::NAME_MIN_LENGTH).is_ok()
        }),
        Field::Email => text_rule(field, values, is_valid_email),
        Field::Phone => text_rule(field, values, is_valid_phone),
        Field::Password => text_rule(field, values, |password| validate_password(password).is_ok()),
        Field::ConfirmPassword => {
            let password = values.password.as_deref().unwrap_or_default();
            text_rule(field, values, |confirm| equals(confirm, password))
        }
        Field::Dob | Field::Gender | Field::Address | Field::Country => {
            text_rule(field, values, |_| true)
        }
        Field::ProfilePicture => match &values.profile_picture {
            None => Err(field.required_message()),
            Some(picture) => {
                let accepted = picture.name.as_deref().is_some_and(has_image_extension);
                format_check(field, accepted)
            }
        },
        Field::AcceptTerms => {
            if values.accept_terms {
                Ok(())
            } else {
                Err(field.required_message())
            }
        }
    };

    outcome.err().map(str::to_string)
}

/// Required check, then the field's shape rule on the present value
fn text_rule(
    field: Field,
    values: &RegistrationInput,
    rule: impl FnOnce(&str) -> bool,
) -> Result<(), &'static str> {
    match values.text(field).filter(|v| is_present(v)) {
        None => Err(field.required_message()),
        Some(v) => format_check(field, rule(v)),
    }
}

fn format_check(field: Field, accepted: bool) -> Result<(), &'static str> {
    if accepted {
        Ok(())
    } else {
        Err(field.format_message().unwrap_or(field.required_message()))
    }
}

impl Validate for RegistrationInput {
    fn validate(&self) -> Result<(), ValidationResult> {
        validate(self).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProfilePicture;
    use pretty_assertions::assert_eq;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            dob: Some("2000-01-01".to_string()),
            gender: Some("female".to_string()),
            password: Some("Abcd123@".to_string()),
            confirm_password: Some("Abcd123@".to_string()),
            address: Some("1 Main St".to_string()),
            country: Some("canada".to_string()),
            profile_picture: Some(ProfilePicture::named("me.png")),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        let result = validate(&valid_input());
        assert!(result.is_valid());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_empty_input_reports_every_required_message() {
        let result = validate(&RegistrationInput::default());
        assert_eq!(result.len(), Field::ALL.len());
        for field in Field::ALL {
            assert_eq!(result.get(field), Some(field.required_message()));
        }
    }

    #[test]
    fn test_empty_strings_are_not_provided() {
        let input = RegistrationInput {
            name: Some(String::new()),
            gender: Some(String::new()),
            ..valid_input()
        };
        let result = validate(&input);
        assert_eq!(result.get(Field::Name), Some("Name is required"));
        assert_eq!(result.get(Field::Gender), Some("Please select a gender"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let input = RegistrationInput {
            address: Some(" ".to_string()),
            ..valid_input()
        };
        assert!(validate(&input).is_valid());
    }

    #[test]
    fn test_confirm_without_password() {
        let input = RegistrationInput {
            password: None,
            confirm_password: Some("Abcd123@".to_string()),
            ..valid_input()
        };
        let result = validate(&input);
        assert_eq!(result.get(Field::Password), Some("Password is required"));
        assert_eq!(result.get(Field::ConfirmPassword), Some("Passwords do not match"));
    }

    #[test]
    fn test_matching_weak_confirmation_not_reported() {
        let input = RegistrationInput {
            password: Some("weak".to_string()),
            confirm_password: Some("weak".to_string()),
            ..valid_input()
        };
        let result = validate(&input);
        assert!(result.get(Field::Password).is_some());
        assert_eq!(result.get(Field::ConfirmPassword), None);
    }

    #[test]
    fn test_picture_without_name_is_a_format_error() {
        let input = RegistrationInput {
            profile_picture: Some(ProfilePicture::default()),
            ..valid_input()
        };
        assert_eq!(
            validate_field(Field::ProfilePicture, &input).as_deref(),
            Some("Only image files (jpg, jpeg, png, gif) are allowed")
        );
    }

    #[test]
    fn test_mislabeled_file_passes() {
        let input = RegistrationInput {
            profile_picture: Some(ProfilePicture {
                name: Some("notes.png".to_string()),
                mime_type: Some("text/plain".to_string()),
                size: Some(12),
            }),
            ..valid_input()
        };
        assert_eq!(validate_field(Field::ProfilePicture, &input), None);
    }

    #[test]
    fn test_validate_trait() {
        assert!(valid_input().validate().is_ok());

        let errors = RegistrationInput::default().validate().unwrap_err();
        assert_eq!(errors.len(), 11);
    }

    #[test]
    fn test_result_accessors() {
        let input = RegistrationInput {
            name: Some("Al".to_string()),
            email: Some("abc".to_string()),
            ..valid_input()
        };
        let result = validate(&input);

        assert_eq!(result.get_by_name("email"), Some("Invalid email format"));
        assert_eq!(result.get_by_name("nope"), None);
        assert_eq!(result.fields().collect::<Vec<_>>(), vec![Field::Name, Field::Email]);
        assert_eq!(
            result.field_errors()[0].to_string(),
            "name: Name must be at least 3 letters"
        );
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let input = RegistrationInput {
            confirm_password: Some("other".to_string()),
            accept_terms: false,
            ..valid_input()
        };
        let json = serde_json::to_value(validate(&input)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "confirmPassword": "Passwords do not match",
                "acceptTerms": "You must accept the terms and conditions"
            })
        );
    }
}
