//! # registration-form
//!
//! The registration form as a library: the eleven fields, lenient decoding of
//! submitted values, the validator, field metadata for renderers, Maud
//! rendering and the submission flow.
//!
//! ## Quick Start
//!
//! ```rust
//! use registration_form::{validate, Field, RegistrationInput};
//!
//! let values = RegistrationInput::from_json_str(r#"{"name": "Al"}"#).unwrap();
//! let errors = validate(&values);
//!
//! assert_eq!(errors.get(Field::Name), Some("Name must be at least 3 letters"));
//! assert_eq!(errors.get(Field::Email), Some("Email is required"));
//! ```
//!
//! `validate` never fails and never panics: every problem is an entry in the
//! returned [`ValidationResult`], and an empty result means the form is valid.

pub mod config;
pub mod error;
pub mod field;
pub mod form_field;
pub mod input;
pub mod render;
pub mod submit;
pub mod validation;

pub use config::{FormConfig, SelectOption};
pub use error::{FormError, Result};
pub use field::{Field, InputKind};
pub use form_field::{FieldAttrs, FormField};
pub use input::{ProfilePicture, RegistrationInput};
pub use submit::{LogSubmitHandler, RegistrationForm, SubmitHandler, SubmitOutcome};
pub use validation::{validate, validate_field, FieldError, Validate, ValidationResult};

// Re-export the rule functions for custom validators
pub use registration_validation as rules;
