// File: src/submit.rs
// Purpose: Submission flow around the validator
//
// The validator is pure; this is where the side effects live. A submit
// attempt runs the validator, stops when anything failed, and otherwise
// hands the values to a SubmitHandler.

use crate::config::FormConfig;
use crate::input::RegistrationInput;
use crate::validation::{validate, ValidationResult};

/// Receives values that passed validation
pub trait SubmitHandler {
    fn on_success(&self, values: &RegistrationInput);
}

/// Records accepted values (passwords masked) through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn on_success(&self, values: &RegistrationInput) {
        let picture_extension = values
            .profile_picture
            .as_ref()
            .and_then(|picture| picture.extension());

        tracing::info!(
            ?picture_extension,
            "registration submitted: {:?}",
            values
        );
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; `message` is the acknowledgement to show
    Accepted { message: String },
    /// Submission blocked; show each message next to its field
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    /// Errors of a rejected attempt; empty when accepted
    pub fn errors(&self) -> ValidationResult {
        match self {
            SubmitOutcome::Accepted { .. } => ValidationResult::default(),
            SubmitOutcome::Rejected(errors) => errors.clone(),
        }
    }
}

/// A registration form instance: configuration plus the success handler.
pub struct RegistrationForm<H = LogSubmitHandler> {
    config: FormConfig,
    handler: H,
}

impl RegistrationForm<LogSubmitHandler> {
    pub fn new(config: FormConfig) -> Self {
        Self::with_handler(config, LogSubmitHandler)
    }
}

impl Default for RegistrationForm<LogSubmitHandler> {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl<H: SubmitHandler> RegistrationForm<H> {
    pub fn with_handler(config: FormConfig, handler: H) -> Self {
        Self { config, handler }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Validate on demand without submitting
    pub fn check(&self, values: &RegistrationInput) -> ValidationResult {
        validate(values)
    }

    /// One submit attempt. The handler runs only when validation passes.
    pub fn submit(&self, values: &RegistrationInput) -> SubmitOutcome {
        let errors = validate(values);

        if errors.has_errors() {
            let fields: Vec<_> = errors.fields().collect();
            tracing::debug!(failed = errors.len(), ?fields, "registration rejected");
            return SubmitOutcome::Rejected(errors);
        }

        self.handler.on_success(values);

        SubmitOutcome::Accepted {
            message: self.config.success_message.clone(),
        }
    }
}
