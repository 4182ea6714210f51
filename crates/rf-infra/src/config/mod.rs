mod registration_config;

pub use registration_config::{
    resolve_config_path, RegistrationConfig, API_BASE_URL_ENV, BLOCK_ON_VALIDATION_ERRORS_ENV,
    CONFIG_PATH_ENV, DEFAULT_API_BASE_URL, DEFAULT_REGISTER_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
};
