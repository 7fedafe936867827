// File: src/field.rs
// Purpose: The eleven registration fields and their static metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A registration form field, declared in form order.
///
/// The derived `Ord` follows declaration order, so maps keyed by `Field`
/// iterate the way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Dob,
    Gender,
    Password,
    ConfirmPassword,
    Address,
    Country,
    ProfilePicture,
    AcceptTerms,
}

/// How a field is entered in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
    Password,
    TextArea,
    Select,
    File,
    Checkbox,
}

impl InputKind {
    /// HTML `type` attribute, for kinds rendered as `<input>`
    pub fn html_type(self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Date => Some("date"),
            InputKind::Password => Some("password"),
            InputKind::File => Some("file"),
            InputKind::Checkbox => Some("checkbox"),
            InputKind::TextArea | InputKind::Select => None,
        }
    }
}

impl Field {
    /// Every field in form order
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Dob,
        Field::Gender,
        Field::Password,
        Field::ConfirmPassword,
        Field::Address,
        Field::Country,
        Field::ProfilePicture,
        Field::AcceptTerms,
    ];

    /// Minimum name length, in characters
    pub const NAME_MIN_LENGTH: usize = 3;

    /// Wire name used in submitted values and error maps
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Dob => "dob",
            Field::Gender => "gender",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Address => "address",
            Field::Country => "country",
            Field::ProfilePicture => "profilePicture",
            Field::AcceptTerms => "acceptTerms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Dob => "Date of Birth",
            Field::Gender => "Gender",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Address => "Address",
            Field::Country => "Select Your Country",
            Field::ProfilePicture => "Profile Picture",
            Field::AcceptTerms => "I accept the terms and conditions",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::Name | Field::Phone => InputKind::Text,
            Field::Email => InputKind::Email,
            Field::Dob => InputKind::Date,
            Field::Gender | Field::Country => InputKind::Select,
            Field::Password | Field::ConfirmPassword => InputKind::Password,
            Field::Address => InputKind::TextArea,
            Field::ProfilePicture => InputKind::File,
            Field::AcceptTerms => InputKind::Checkbox,
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Enter your name"),
            Field::Email => Some("Enter your email"),
            Field::Phone => Some("Enter your phone number"),
            Field::Password => Some("Enter your password"),
            Field::ConfirmPassword => Some("Confirm your password"),
            Field::Address => Some("Enter your address"),
            Field::Gender => Some("Select Gender"),
            Field::Country => Some("Select Country"),
            Field::Dob | Field::ProfilePicture | Field::AcceptTerms => None,
        }
    }

    /// Message shown when the field has no value
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Phone => "Phone number is required",
            Field::Dob => "Date of Birth is required",
            Field::Gender => "Please select a gender",
            Field::Password => "Password is required",
            Field::ConfirmPassword => "Please confirm your password",
            Field::Address => "Address is required",
            Field::Country => "Please select your country",
            Field::ProfilePicture => "Profile picture is required",
            Field::AcceptTerms => "You must accept the terms and conditions",
        }
    }

    /// Message shown when a present value fails the field's shape rule.
    ///
    /// `None` for presence-only fields.
    pub fn format_message(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Name must be at least 3 letters"),
            Field::Email => Some("Invalid email format"),
            Field::Phone => Some("Phone number must be exactly 10 digits"),
            Field::Password => Some(registration_validation::PASSWORD_RULE_MESSAGE),
            Field::ConfirmPassword => Some("Passwords do not match"),
            Field::ProfilePicture => Some("Only image files (jpg, jpeg, png, gif) are allowed"),
            Field::Dob | Field::Gender | Field::Address | Field::Country | Field::AcceptTerms => {
                None
            }
        }
    }

    /// Wire names of all fields, in form order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = "confirm_password".parse::<Field>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref name) if name == "confirm_password"));
    }

    #[test]
    fn test_order_follows_form_layout() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
        assert_eq!(Field::names()[6], "confirmPassword");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&Field::ProfilePicture).unwrap(),
            r#""profilePicture""#
        );
        let field: Field = serde_json::from_str(r#""acceptTerms""#).unwrap();
        assert_eq!(field, Field::AcceptTerms);
    }

    #[test]
    fn test_presence_only_fields_have_no_format_message() {
        for field in [Field::Dob, Field::Gender, Field::Address, Field::Country, Field::AcceptTerms] {
            assert!(field.format_message().is_none(), "{}", field);
        }
    }
}
