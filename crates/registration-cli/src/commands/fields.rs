use colored::Colorize;
use registration_form::{Field, FieldAttrs};

pub fn execute() {
    for field in Field::ALL {
        let attrs = FieldAttrs::for_field(field);
        println!(
            "{} {} {}",
            format!("{:<16}", field.name()).cyan(),
            format!("{:<34}", attrs.label),
            attrs.render_html5_attrs().dimmed()
        );
    }
}
