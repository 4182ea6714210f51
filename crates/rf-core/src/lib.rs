//! # rf-core
//!
//! Core domain models and business logic for the registration form.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the draft, its validator, the multipart payload builder, the submission state
//! machine, the view model and the ports implemented by outer layers.

pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use registration::{
    FormState, ProfileImage, RegistrationDraft, RegistrationPayload, RegistrationView, Role,
    SubmissionPhase, SubmissionPolicy,
};
