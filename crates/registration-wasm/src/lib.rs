//! Registration Validation WASM
//!
//! WebAssembly bindings for the registration form. The browser runs the same
//! validator as the server, so messages shown while typing match the ones a
//! submission would produce.

use registration_form::{
    Field, FormConfig, FormError, ProfilePicture, RegistrationForm, RegistrationInput,
    SubmitHandler, SubmitOutcome, ValidationResult,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Reply to `submitRegistration`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub errors: ValidationResult,
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Accepted { message } => Self {
                ok: true,
                message: Some(message),
                errors: ValidationResult::default(),
            },
            SubmitOutcome::Rejected(errors) => Self {
                ok: false,
                message: None,
                errors,
            },
        }
    }
}

/// Logs accepted values (passwords masked) to the browser console
struct ConsoleSubmitHandler;

impl SubmitHandler for ConsoleSubmitHandler {
    fn on_success(&self, values: &RegistrationInput) {
        web_sys::console::log_1(&JsValue::from_str(&format!("{:?}", values)));
    }
}

// Maps must cross the boundary as plain objects, not JS `Map`s.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}

/// Errors for one field, as the list shape the form scripts expect
pub fn field_errors(
    field_name: &str,
    values: &RegistrationInput,
) -> Result<Vec<ValidationError>, FormError> {
    let field: Field = field_name.parse()?;

    Ok(registration_form::validate_field(field, values)
        .map(|message| ValidationError {
            field: field.name().to_string(),
            message,
        })
        .into_iter()
        .collect())
}

/// A `File` chosen through `<input type="file">`.
///
/// Its `name` lives on the prototype, so generic deserialization sees an
/// empty object; read it explicitly.
fn selected_file(values: &JsValue) -> Option<ProfilePicture> {
    let picture = js_sys::Reflect::get(values, &JsValue::from_str("profilePicture")).ok()?;
    let file = picture.dyn_ref::<web_sys::File>()?;

    Some(ProfilePicture {
        name: Some(file.name()),
        mime_type: Some(file.type_()),
        size: Some(file.size() as u64),
    })
}

/// Read form values from JS. Never fails; unreadable values count as empty.
fn read_values(values: &JsValue) -> RegistrationInput {
    let json: serde_json::Value =
        serde_wasm_bindgen::from_value(values.clone()).unwrap_or(serde_json::Value::Null);

    let mut input = RegistrationInput::from_json_value(json);
    if let Some(file) = selected_file(values) {
        input.profile_picture = Some(file);
    }
    input
}

/// Validate all fields
///
/// # Returns
/// Object mapping field name to message; empty when the form is valid
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateRegistration({ name: 'Al', email: 'a@b.co' });
/// // errors.name === 'Name must be at least 3 letters'
/// ```
#[wasm_bindgen(js_name = validateRegistration)]
pub fn validate_registration(values: JsValue) -> Result<JsValue, JsValue> {
    let input = read_values(&values);
    to_js(&registration_form::validate(&input))
}

/// Validate a single field (on change / blur)
///
/// # Returns
/// Array with zero or one `{ field, message }` entries
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let input = read_values(&values);
    let errors = field_errors(field_name, &input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&errors)
}

/// Validate and, when valid, log the values and return the acknowledgement
#[wasm_bindgen(js_name = submitRegistration)]
pub fn submit_registration(values: JsValue) -> Result<JsValue, JsValue> {
    let input = read_values(&values);
    let form = RegistrationForm::with_handler(FormConfig::default(), ConsoleSubmitHandler);
    to_js(&SubmitResponse::from(form.submit(&input)))
}

/// Field wire names in form order
#[wasm_bindgen(js_name = fieldNames)]
pub fn field_names() -> Result<JsValue, JsValue> {
    to_js(&Field::names())
}
