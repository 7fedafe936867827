// File: src/input.rs
// Purpose: Candidate values for the registration form, decoded leniently
//
// Values arrive from a browser form, a JSON file or a JS object, so any key
// may be missing, null or of the wrong shape. Decoding never fails: a value
// that cannot be read as the field's type is treated as "not provided" and
// the validator reports the required message for it.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::field::Field;

/// Reference to a selected file. Only `name` is ever validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePicture {
    pub name: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
}

impl ProfilePicture {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn extension(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(registration_validation::file_extension)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                name: map.get("name").and_then(Value::as_str).map(str::to_string),
                mime_type: map.get("type").and_then(Value::as_str).map(str::to_string),
                size: map.get("size").and_then(Value::as_u64),
            }),
            Value::String(name) if !name.is_empty() => Some(Self::named(name)),
            _ => None,
        }
    }
}

/// The values of one registration form session.
///
/// Created empty when the form mounts, filled field by field, and handed to
/// the validator on every submit attempt.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationInput {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dob: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub password: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub confirm_password: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient_file")]
    pub profile_picture: Option<ProfilePicture>,
    #[serde(deserialize_with = "lenient_checkbox")]
    pub accept_terms: bool,
}

impl RegistrationInput {
    /// Decode from any JSON value. Non-object values give the empty input.
    pub fn from_json_value(value: Value) -> Self {
        if !value.is_object() {
            tracing::debug!("registration values are not an object; treating as empty");
            return Self::default();
        }

        // Every field decoder accepts any JSON value.
        serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::debug!("could not decode registration values: {}", err);
            Self::default()
        })
    }

    /// Current text of a text or select field; `None` for the file and
    /// checkbox fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Dob => &self.dob,
            Field::Gender => &self.gender,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Address => &self.address,
            Field::Country => &self.country,
            Field::ProfilePicture | Field::AcceptTerms => return None,
        };
        value.as_deref()
    }

    /// Decode from JSON text. Only malformed JSON is an error.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_json_value(value))
    }
}

// Passwords never reach logs.
impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(secret: &Option<String>) -> Option<&'static str> {
            secret.as_ref().map(|_| "********")
        }

        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("dob", &self.dob)
            .field("gender", &self.gender)
            .field("password", &mask(&self.password))
            .field("confirm_password", &mask(&self.confirm_password))
            .field("address", &self.address)
            .field("country", &self.country)
            .field("profile_picture", &self.profile_picture)
            .field("accept_terms", &self.accept_terms)
            .finish()
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        // Zero is an empty entry, like an untouched numeric input
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn checkbox_from_value(value: Value) -> bool {
    match value {
        Value::Bool(checked) => checked,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.to_ascii_lowercase().as_str(), "true" | "on" | "yes" | "1"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(text_from_value)
}

fn lenient_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(checkbox_from_value)
}

fn lenient_file<'de, D>(deserializer: D) -> Result<Option<ProfilePicture>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(ProfilePicture::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_keys_are_not_provided() {
        let input = RegistrationInput::from_json_value(json!({}));
        assert_eq!(input, RegistrationInput::default());
    }

    #[test]
    fn test_non_object_is_empty_input() {
        for value in [json!(null), json!(42), json!("name"), json!([1, 2])] {
            assert_eq!(RegistrationInput::from_json_value(value), RegistrationInput::default());
        }
    }

    #[test]
    fn test_text_coercion() {
        let input = RegistrationInput::from_json_value(json!({
            "name": "Alice",
            "phone": 5551234567u64,
            "email": null,
            "address": { "line1": "1 Main St" },
            "country": ["usa"],
            "gender": false,
            "dob": "",
            "password": 0
        }));

        assert_eq!(input.name.as_deref(), Some("Alice"));
        assert_eq!(input.phone.as_deref(), Some("5551234567"));
        assert_eq!(input.email, None);
        assert_eq!(input.address, None);
        assert_eq!(input.country, None);
        assert_eq!(input.gender, None);
        assert_eq!(input.password, None);
        // Empty strings are kept; presence is decided by the validator
        assert_eq!(input.dob.as_deref(), Some(""));
    }

    #[test]
    fn test_checkbox_coercion() {
        let checked = |v: Value| RegistrationInput::from_json_value(json!({ "acceptTerms": v })).accept_terms;

        assert!(checked(json!(true)));
        assert!(checked(json!("on")));
        assert!(checked(json!("TRUE")));
        assert!(checked(json!(1)));
        assert!(!checked(json!(false)));
        assert!(!checked(json!("false")));
        assert!(!checked(json!("")));
        assert!(!checked(json!(0)));
        assert!(!checked(json!(null)));
    }

    #[test]
    fn test_profile_picture_shapes() {
        let picture = |v: Value| {
            RegistrationInput::from_json_value(json!({ "profilePicture": v })).profile_picture
        };

        assert_eq!(
            picture(json!({ "name": "p.jpg", "type": "image/jpeg", "size": 2048 })),
            Some(ProfilePicture {
                name: Some("p.jpg".to_string()),
                mime_type: Some("image/jpeg".to_string()),
                size: Some(2048),
            })
        );
        assert_eq!(picture(json!("avatar.png")), Some(ProfilePicture::named("avatar.png")));
        assert_eq!(picture(json!({})), Some(ProfilePicture::default()));
        assert_eq!(picture(json!("")), None);
        assert_eq!(picture(json!(null)), None);
        assert_eq!(picture(json!(7)), None);
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        assert!(RegistrationInput::from_json_str("{ not json").is_err());
        assert!(RegistrationInput::from_json_str(r#"{"name":"Bob"}"#).is_ok());
    }

    #[test]
    fn test_debug_masks_passwords() {
        let input = RegistrationInput {
            name: Some("Bob".to_string()),
            password: Some("Abcd123@".to_string()),
            confirm_password: Some("Abcd123@".to_string()),
            ..Default::default()
        };

        let rendered = format!("{:?}", input);
        assert!(!rendered.contains("Abcd123@"));
        assert!(rendered.contains("********"));
        assert!(rendered.contains("Bob"));
    }

    #[test]
    fn test_extension_of_picture() {
        assert_eq!(ProfilePicture::named("me.JPEG").extension(), Some("JPEG"));
        assert_eq!(ProfilePicture::default().extension(), None);
    }
}
