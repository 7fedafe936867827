// File: src/config.rs
// Purpose: Form configuration parsing from registration.toml

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "registration.toml";

/// One `<option>` of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Presentation settings for the registration form.
///
/// Select options only feed rendering; the validator accepts any non-empty
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    #[serde(default = "default_success_message")]
    pub success_message: String,

    #[serde(default = "default_genders")]
    pub genders: Vec<SelectOption>,

    #[serde(default = "default_countries")]
    pub countries: Vec<SelectOption>,
}

// Default values
fn default_title() -> String {
    "Registration Form".to_string()
}

fn default_submit_label() -> String {
    "Register".to_string()
}

fn default_success_message() -> String {
    "Registration successful".to_string()
}

fn default_genders() -> Vec<SelectOption> {
    vec![
        SelectOption::new("male", "Male"),
        SelectOption::new("female", "Female"),
        SelectOption::new("other", "Other"),
    ]
}

fn default_countries() -> Vec<SelectOption> {
    vec![
        SelectOption::new("usa", "United States"),
        SelectOption::new("canada", "Canada"),
        SelectOption::new("uk", "United Kingdom"),
    ]
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit_label: default_submit_label(),
            success_message: default_success_message(),
            genders: default_genders(),
            countries: default_countries(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!("config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| FormError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from default path (./registration.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration text; empty text gives the defaults
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content)
    }
}
