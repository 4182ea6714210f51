//! # Dependency Injection / 依赖注入模块
//!
//! Builds the concrete adapters from the loaded config and injects them into
//! the form. Assembly only: no form logic lives here.

use std::sync::Arc;

use anyhow::Result;
use rf_app::RegistrationForm;
use rf_core::ports::{FileInputPort, FormEventPort, RegistrationPort};
use rf_infra::{FsFileInput, HttpRegistrationClient, RegistrationConfig, TracingFormEventPort};

/// The form together with the adapters the front end uses directly.
pub struct FormRuntime {
    pub form: RegistrationForm,
    pub file_input: Arc<dyn FileInputPort>,
}

/// Wires the production adapters.
pub fn build_form(config: &RegistrationConfig) -> Result<FormRuntime> {
    let registration: Arc<dyn RegistrationPort> =
        Arc::new(HttpRegistrationClient::from_config(config)?);
    let form_events: Arc<dyn FormEventPort> = Arc::new(TracingFormEventPort);

    tracing::info!(
        register_url = %config.register_url(),
        block_on_validation_errors = config.block_on_validation_errors,
        "registration form wired"
    );

    Ok(FormRuntime {
        form: RegistrationForm::new(registration, form_events, config.submission_policy()),
        file_input: Arc::new(FsFileInput::new()),
    })
}
