use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use rf_infra::RegistrationConfig;

use crate::app::FormInput;

#[derive(Debug, Parser)]
#[command(name = "regform")]
#[command(about = "Fill in and submit the account registration form", long_about = None)]
pub struct Cli {
    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation
    #[arg(long)]
    pub confirm_password: Option<String>,

    /// Tick a role checkbox; repeat to replay several clicks in order
    #[arg(
        long = "check",
        value_name = "CHECKBOX",
        value_parser = PossibleValuesParser::new(["is_candidate_user", "is_company_user"])
    )]
    pub checks: Vec<String>,

    /// Profile picture to upload
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Config file path (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the account service, overrides the config file
    #[arg(long)]
    pub api_url: Option<String>,

    /// Do not send the request when the form has validation errors
    #[arg(long)]
    pub block_on_validation_errors: bool,

    /// Print the final view as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Applies command line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut RegistrationConfig) {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if self.block_on_validation_errors {
            config.block_on_validation_errors = true;
        }
    }

    pub fn form_input(&self) -> FormInput {
        FormInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            checks: self.checks.clone(),
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_checks_in_order() {
        let cli = Cli::try_parse_from([
            "regform",
            "--email",
            "ada@example.com",
            "--check",
            "is_candidate_user",
            "--check",
            "is_company_user",
        ])
        .unwrap();

        assert_eq!(cli.email.as_deref(), Some("ada@example.com"));
        assert_eq!(cli.checks, vec!["is_candidate_user", "is_company_user"]);
        assert!(!cli.json);
    }

    #[test]
    fn rejects_unknown_checkbox() {
        let result = Cli::try_parse_from(["regform", "--check", "is_admin_user"]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "regform",
            "--api-url",
            "http://localhost:9999",
            "--block-on-validation-errors",
        ])
        .unwrap();
        let mut config = RegistrationConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.api_base_url, "http://localhost:9999");
        assert!(config.block_on_validation_errors);
    }

    #[test]
    fn missing_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["regform"]).unwrap();
        let mut config = RegistrationConfig {
            block_on_validation_errors: true,
            ..RegistrationConfig::default()
        };

        cli.apply_overrides(&mut config);

        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert!(config.block_on_validation_errors);
    }
}
