pub mod fields;
pub mod render;
pub mod submit;
pub mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use registration_form::{FormConfig, RegistrationInput, ValidationResult};

/// Exit status for a form that failed validation
pub const INVALID: u8 = 1;

/// Read form values from a JSON file
pub fn load_values(path: &Path) -> Result<RegistrationInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {:?}", path))?;

    let input = RegistrationInput::from_json_str(&content)
        .with_context(|| format!("Failed to parse values file: {:?}", path))?;

    tracing::debug!(?path, "loaded form values");
    Ok(input)
}

/// Load the given config file, or ./registration.toml when none is given
pub fn load_config(path: Option<&Path>) -> Result<FormConfig> {
    let config = match path {
        Some(path) => FormConfig::load(path),
        None => FormConfig::load_default(),
    };
    config.context("Failed to load form configuration")
}

pub fn print_errors(errors: &ValidationResult) {
    for (field, message) in errors.iter() {
        println!("  {} {}", format!("{:<18}", field.label()).bold(), message.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::process::ExitCode;
    use tempfile::NamedTempFile;

    const VALID_VALUES: &str = r#"{
        "name": "Alice", "email": "a@b.com", "phone": "5551234567",
        "dob": "2000-01-01", "gender": "female", "password": "Abcd123@",
        "confirmPassword": "Abcd123@", "address": "1 Main St", "country": "uk",
        "profilePicture": { "name": "alice.png" }, "acceptTerms": true
    }"#;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_values() {
        let file = temp_file(r#"{"name": "Alice", "acceptTerms": "on"}"#);
        let input = load_values(file.path()).unwrap();

        assert_eq!(input.name.as_deref(), Some("Alice"));
        assert!(input.accept_terms);
    }

    #[test]
    fn test_load_values_rejects_malformed_json() {
        let file = temp_file("{ not json");
        let err = load_values(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse values file"));
    }

    #[test]
    fn test_load_values_missing_file() {
        let err = load_values(Path::new("/nonexistent/values.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read values file"));
    }

    #[test]
    fn test_load_config_from_file() {
        let file = temp_file("success_message = \"Thanks!\"\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.success_message, "Thanks!");
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let file = temp_file("title = [");
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_validate_exit_codes() {
        let valid = temp_file(VALID_VALUES);
        let empty = temp_file("{}");

        assert_eq!(validate::execute(valid.path(), None, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(validate::execute(valid.path(), None, true).unwrap(), ExitCode::SUCCESS);
        assert_eq!(validate::execute(empty.path(), None, false).unwrap(), ExitCode::from(INVALID));
        assert_eq!(validate::execute(empty.path(), None, true).unwrap(), ExitCode::from(INVALID));
    }

    #[test]
    fn test_validate_single_field_exit_codes() {
        let values = temp_file(r#"{"name": "Al", "email": "a@b.com"}"#);

        assert_eq!(
            validate::execute(values.path(), Some("email"), false).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(
            validate::execute(values.path(), Some("name"), false).unwrap(),
            ExitCode::from(INVALID)
        );
        assert!(validate::execute(values.path(), Some("nickname"), false).is_err());
    }

    #[test]
    fn test_submit_exit_codes() {
        let config = temp_file("");
        let valid = temp_file(VALID_VALUES);
        let rejected = temp_file(r#"{"name": "Alice"}"#);

        assert_eq!(
            submit::execute(valid.path(), Some(config.path())).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(
            submit::execute(rejected.path(), Some(config.path())).unwrap(),
            ExitCode::from(INVALID)
        );
    }
}
