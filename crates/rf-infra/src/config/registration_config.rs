use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use rf_core::registration::SubmissionPolicy;
use serde::{Deserialize, Serialize};
use tokio::fs;

pub const CONFIG_PATH_ENV: &str = "REGFORM_CONFIG_PATH";
pub const API_BASE_URL_ENV: &str = "REGFORM_API_BASE_URL";
pub const BLOCK_ON_VALIDATION_ERRORS_ENV: &str = "REGFORM_BLOCK_ON_VALIDATION_ERRORS";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REGISTER_PATH: &str = "/api/users/register/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const CONFIG_DIR_NAME: &str = "regform";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for talking to the account service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub api_base_url: String,
    pub register_path: String,
    pub request_timeout_secs: u64,
    /// Skip the registration call when the draft has validation errors.
    pub block_on_validation_errors: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            block_on_validation_errors: false,
        }
    }
}

impl RegistrationConfig {
    /// Resolves the config file, loads it and applies environment overrides.
    pub async fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok();
        let path = resolve_config_path(explicit_path, lookup)?;
        tracing::debug!(path = %path.display(), "loading registration config");

        let mut config = Self::from_file(&path).await?;
        config.apply_env_overrides(lookup)?;
        Ok(config)
    }

    /// Reads a TOML config file.
    ///
    /// A missing or empty file yields the defaults; keys absent from the file
    /// keep their default values.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read registration config failed: {}", path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content)
            .with_context(|| format!("parse registration config failed: {}", path.display()))
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(API_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup(BLOCK_ON_VALIDATION_ERRORS_ENV) {
            self.block_on_validation_errors = parse_bool(&raw)
                .with_context(|| format!("invalid value for {BLOCK_ON_VALIDATION_ERRORS_ENV}"))?;
        }
        Ok(())
    }

    /// Full URL of the registration endpoint.
    pub fn register_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let path = self.register_path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn submission_policy(&self) -> SubmissionPolicy {
        SubmissionPolicy {
            block_on_validation_errors: self.block_on_validation_errors,
        }
    }
}

/// Picks the config file: explicit path, then `REGFORM_CONFIG_PATH`, then the
/// user config directory.
pub fn resolve_config_path(
    explicit_path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = lookup(CONFIG_PATH_ENV).filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let base_dir =
        dirs::config_dir().ok_or_else(|| anyhow!("Could not find config directory"))?;
    Ok(base_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
