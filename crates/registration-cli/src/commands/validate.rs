use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use registration_form::{validate, validate_field, Field};

use super::{load_values, print_errors, INVALID};

pub fn execute(values: &Path, field: Option<&str>, json: bool) -> Result<ExitCode> {
    let input = load_values(values)?;

    if let Some(name) = field {
        let field: Field = name.parse()?;
        let error = validate_field(field, &input);

        if json {
            println!("{}", serde_json::to_string_pretty(&error)?);
        } else {
            match &error {
                None => println!("{} {}", "✓".green(), field.label()),
                Some(message) => println!("{} {}: {}", "✗".red(), field.label().bold(), message.red()),
            }
        }

        return Ok(if error.is_none() { ExitCode::SUCCESS } else { ExitCode::from(INVALID) });
    }

    let errors = validate(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else if errors.is_valid() {
        println!("{}", "✓ All fields are valid".green().bold());
    } else {
        println!("{}", format!("✗ {} field(s) need attention", errors.len()).red().bold());
        print_errors(&errors);
    }

    Ok(if errors.is_valid() { ExitCode::SUCCESS } else { ExitCode::from(INVALID) })
}
