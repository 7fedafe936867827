// File: src/form_field.rs
// Purpose: Per-field HTML5 attributes and client-side rule descriptions

use std::collections::BTreeMap;

use registration_validation::{IMAGE_EXTENSIONS, PHONE_DIGITS};
use serde_json::{json, Value};

use crate::field::Field;
use crate::input::RegistrationInput;

/// Metadata for a form field including HTML5 and client-side validation attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    /// HTML5 native attributes (e.g., "required", "minlength", "type")
    pub html5_attrs: BTreeMap<String, String>,
    /// JSON string for data-validate attribute (client-side WASM validation)
    pub data_validate: String,
    /// Field label for display
    pub label: String,
}

impl FieldAttrs {
    pub fn for_field(field: Field) -> Self {
        let mut html5_attrs = BTreeMap::new();
        let mut insert = |key: &str, value: String| {
            html5_attrs.insert(key.to_string(), value);
        };

        if let Some(ty) = field.input_kind().html_type() {
            insert("type", ty.to_string());
        }
        insert("required", String::new());
        if let Some(placeholder) = field.placeholder() {
            insert("placeholder", placeholder.to_string());
        }

        let mut rules = json!({ "required": true });
        match field {
            Field::Name => {
                insert("minlength", Field::NAME_MIN_LENGTH.to_string());
                rules["minLength"] = json!(Field::NAME_MIN_LENGTH);
            }
            Field::Email => rules["email"] = Value::Bool(true),
            Field::Phone => {
                insert("pattern", format!("[0-9]{{{}}}", PHONE_DIGITS));
                insert("maxlength", PHONE_DIGITS.to_string());
                rules["phone"] = Value::Bool(true);
            }
            Field::Password => rules["password"] = json!("strong"),
            Field::ConfirmPassword => rules["equalsField"] = json!(Field::Password.name()),
            Field::ProfilePicture => {
                let accept = IMAGE_EXTENSIONS
                    .iter()
                    .map(|ext| format!(".{}", ext))
                    .collect::<Vec<_>>()
                    .join(",");
                insert("accept", accept);
                rules["imageFile"] = Value::Bool(true);
            }
            Field::AcceptTerms => rules["checked"] = Value::Bool(true),
            Field::Dob | Field::Gender | Field::Address | Field::Country => {}
        }

        if let Some(message) = field.format_message() {
            rules["message"] = json!(message);
        }

        Self {
            html5_attrs,
            data_validate: rules.to_string(),
            label: field.label().to_string(),
        }
    }

    /// Value of an HTML5 attribute; `Some("")` for boolean attributes
    pub fn html5(&self, name: &str) -> Option<&str> {
        self.html5_attrs.get(name).map(String::as_str)
    }

    /// Render HTML5 attributes as a string
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for forms that describe their fields to a renderer
pub trait FormField {
    /// Get field attributes for the specified field name
    fn field_attrs(&self, field_name: &str) -> FieldAttrs;

    /// Get all field names
    fn field_names(&self) -> Vec<&'static str>;
}

impl FormField for RegistrationInput {
    fn field_attrs(&self, field_name: &str) -> FieldAttrs {
        field_name
            .parse()
            .map(FieldAttrs::for_field)
            .unwrap_or_default()
    }

    fn field_names(&self) -> Vec<&'static str> {
        Field::names()
    }
}
