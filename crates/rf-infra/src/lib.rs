pub mod config;
pub mod events;
pub mod fs;
pub mod http;

pub use config::RegistrationConfig;
pub use events::TracingFormEventPort;
pub use fs::FsFileInput;
pub use http::HttpRegistrationClient;
