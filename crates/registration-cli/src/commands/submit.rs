use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use registration_form::{RegistrationForm, SubmitOutcome};

use super::{load_config, load_values, print_errors, INVALID};

pub fn execute(values: &Path, config: Option<&Path>) -> Result<ExitCode> {
    let input = load_values(values)?;
    let form = RegistrationForm::new(load_config(config)?);

    match form.submit(&input) {
        SubmitOutcome::Accepted { message } => {
            println!("{}", message.green().bold());
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Rejected(errors) => {
            println!("{}", "Submission blocked".yellow().bold());
            print_errors(&errors);
            Ok(ExitCode::from(INVALID))
        }
    }
}
