//! Plain-text rendering of the registration view for the terminal.

use std::fmt::Write;

use rf_core::registration::{FormView, RegistrationView};

pub fn render_text(view: &RegistrationView) -> String {
    match view {
        RegistrationView::Confirmation { headline } => format!("{headline}\n"),
        RegistrationView::Form(form) => render_form(form),
    }
}

fn render_form(form: &FormView) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", form.title);
    for message in &form.error_messages {
        let _ = writeln!(out, "! {message}");
    }
    let _ = writeln!(out, "{}", form.image_label);

    for input in &form.inputs {
        let value = if input.input_type == "password" {
            "*".repeat(input.value.chars().count())
        } else {
            input.value.clone()
        };
        let _ = write!(out, "{}: {value}", input.label);
        if let Some(hint) = input.hint {
            let _ = write!(out, " ({hint})");
        }
        out.push('\n');
    }

    for checkbox in &form.checkboxes {
        let mark = if checkbox.checked { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {}", checkbox.label);
    }

    if form.submit.is_loading {
        let _ = writeln!(out, "[ {} ... ]", form.submit.label);
    } else {
        let _ = writeln!(out, "[ {} ]", form.submit.label);
    }
    let link = &form.login_link;
    let _ = writeln!(out, "{} {} ({})", link.prompt, link.text, link.href);
    out
}
