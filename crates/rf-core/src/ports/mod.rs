//! Port interfaces for the application layer
//!
//! Ports define the contract between the registration form use case and the
//! infrastructure implementations (HTTP client, file picker, UI sink). The
//! form logic stays independent of how a request is sent or a view is drawn.

pub mod file_input;
pub mod form_event_port;
pub mod registration;

pub use file_input::{FileInputError, FileInputPort};
pub use form_event_port::FormEventPort;
pub use registration::{
    RegistrationPort, RegistrationPortError, RegistrationResponse, ResponseStatus,
};
