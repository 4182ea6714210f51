use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rf_app::RegistrationForm;
use rf_core::ports::FileInputPort;
use rf_core::registration::{FormState, TextField};
use rf_infra::RegistrationConfig;
use tracing::{info, info_span, Instrument};

use crate::bootstrap::build_form;
use crate::cli::Cli;
use crate::render::render_text;

/// Values the terminal front end types into the form.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub checks: Vec<String>,
    pub image: Option<PathBuf>,
}

impl FormInput {
    fn text_values(&self) -> [(TextField, Option<&String>); 5] {
        [
            (TextField::FirstName, self.first_name.as_ref()),
            (TextField::LastName, self.last_name.as_ref()),
            (TextField::Email, self.email.as_ref()),
            (TextField::Password, self.password.as_ref()),
            (TextField::ConfirmPassword, self.confirm_password.as_ref()),
        ]
    }
}

pub async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = RegistrationConfig::load(cli.config.as_deref()).await?;
    cli.apply_overrides(&mut config);

    let runtime = build_form(&config)?;
    let state = submit_form(&runtime.form, runtime.file_input.as_ref(), &cli.form_input())
        .instrument(info_span!("cli.regform.submit"))
        .await?;

    let view = state.view();
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("serialize view failed")?
        );
    } else {
        print!("{}", render_text(&view));
    }

    Ok(if state.has_registered() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Fills the form through the field handlers, in the order a person would.
pub async fn fill_form(
    form: &RegistrationForm,
    file_input: &dyn FileInputPort,
    input: &FormInput,
) -> Result<()> {
    if let Some(path) = &input.image {
        let image = file_input
            .read_file(path)
            .await
            .with_context(|| format!("select profile picture failed: {}", path.display()))?;
        form.change_profile_image(image).await?;
    }

    for (field, value) in input.text_values() {
        if let Some(value) = value {
            form.change_text(field.as_str(), value.as_str()).await?;
        }
    }

    for name in &input.checks {
        form.change_checkbox(name, true).await?;
    }

    Ok(())
}

pub async fn submit_form(
    form: &RegistrationForm,
    file_input: &dyn FileInputPort,
    input: &FormInput,
) -> Result<FormState> {
    fill_form(form, file_input, input).await?;
    let state = form.submit().await;
    info!(
        registered = state.has_registered(),
        error_count = state.error_messages.len(),
        "registration form submitted"
    );
    Ok(state)
}
