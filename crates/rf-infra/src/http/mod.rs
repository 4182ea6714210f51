mod registration_client;

pub use registration_client::{parse_error_messages, HttpRegistrationClient};
