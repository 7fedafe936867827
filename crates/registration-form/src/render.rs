// File: src/render.rs
// Purpose: HTML rendering of the registration form with Maud
//
// Each field group shows its label, its control and, when the last
// validation found a problem, the message in a `text-danger` div beneath it.

use maud::{html, Markup, DOCTYPE};

use crate::config::{FormConfig, SelectOption};
use crate::field::{Field, InputKind};
use crate::form_field::FieldAttrs;
use crate::input::RegistrationInput;
use crate::validation::ValidationResult;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Wrap a fragment in a complete HTML document
pub fn render_page(config: &FormConfig, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (config.title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
            }
            body { (body) }
        }
    }
}

/// The form, pre-filled with `values`, showing `errors` beneath their fields
pub fn render_form(
    config: &FormConfig,
    values: &RegistrationInput,
    errors: &ValidationResult,
) -> Markup {
    html! {
        div class="container w-50 mx-auto bg-white p-4 shadow-lg m-3"
            style="border-radius: 8px; border: 1px solid #ddd" {
            h2 class="text-center mb-4" { (config.title) }
            form method="post" enctype="multipart/form-data" novalidate[true] {
                @for field in Field::ALL {
                    (render_group(config, field, values, errors.get(field)))
                }
                button type="submit" class="btn btn-primary mt-3" { (config.submit_label) }
            }
        }
    }
}

/// Acknowledgement shown after an accepted submission
pub fn render_success(config: &FormConfig) -> Markup {
    html! {
        div class="alert alert-success" role="alert" { (config.success_message) }
    }
}

fn control_id(field: Field) -> String {
    format!("form-{}", field.name())
}

fn render_group(
    config: &FormConfig,
    field: Field,
    values: &RegistrationInput,
    error: Option<&str>,
) -> Markup {
    let id = control_id(field);

    html! {
        div class="form-group mb-3" {
            @if field.input_kind() == InputKind::Checkbox {
                input id=(id) type="checkbox" class="me-2" name=(field.name()) value="true"
                    checked[values.accept_terms];
                label for=(id) { (field.label()) }
            } @else {
                label class="form-label" for=(id) { (field.label()) }
                (render_control(config, field, values))
            }
            @if let Some(message) = error {
                div class="text-danger" { (message) }
            }
        }
    }
}

fn select_options(config: &FormConfig, field: Field) -> &[SelectOption] {
    match field {
        Field::Gender => config.genders.as_slice(),
        Field::Country => config.countries.as_slice(),
        _ => &[],
    }
}

fn render_control(config: &FormConfig, field: Field, values: &RegistrationInput) -> Markup {
    let attrs = FieldAttrs::for_field(field);
    let id = control_id(field);
    let name = field.name();
    let current = values.text(field).unwrap_or_default();

    match field.input_kind() {
        InputKind::Select => html! {
            select id=(id) name=(name) class="form-control" required[true]
                data-validate=(attrs.data_validate) {
                option value="" { (field.placeholder().unwrap_or_default()) }
                @for opt in select_options(config, field) {
                    option value=(opt.value) selected[opt.value == current] { (opt.label) }
                }
            }
        },
        InputKind::TextArea => html! {
            textarea id=(id) name=(name) class="form-control"
                placeholder=[attrs.html5("placeholder")] required[true]
                data-validate=(attrs.data_validate) { (current) }
        },
        InputKind::File => html! {
            input id=(id) type="file" name=(name) class="form-control"
                accept=[attrs.html5("accept")] required[true]
                data-validate=(attrs.data_validate);
        },
        // Secrets are never echoed back into the page
        InputKind::Password => html! {
            input id=(id) type="password" name=(name) class="form-control"
                placeholder=[attrs.html5("placeholder")] required[true]
                data-validate=(attrs.data_validate);
        },
        InputKind::Text | InputKind::Email | InputKind::Date | InputKind::Checkbox => html! {
            input id=(id) type=[attrs.html5("type")] name=(name) class="form-control"
                placeholder=[attrs.html5("placeholder")]
                minlength=[attrs.html5("minlength")]
                maxlength=[attrs.html5("maxlength")]
                pattern=[attrs.html5("pattern")]
                value=(current) required[true]
                data-validate=(attrs.data_validate);
        },
    }
}
