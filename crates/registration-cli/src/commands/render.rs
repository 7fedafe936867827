use std::path::Path;

use anyhow::Result;
use registration_form::render::{render_form, render_page};
use registration_form::{validate, RegistrationInput, ValidationResult};

use super::{load_config, load_values};

pub fn execute(values: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;

    // Without values the form is shown as on first load: empty, no errors
    let (input, errors) = match values {
        Some(path) => {
            let input = load_values(path)?;
            let errors = validate(&input);
            (input, errors)
        }
        None => (RegistrationInput::default(), ValidationResult::default()),
    };

    let page = render_page(&config, render_form(&config, &input, &errors));
    println!("{}", page.into_string());

    Ok(())
}
