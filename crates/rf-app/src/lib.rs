//! Registration form application layer
//!
//! This crate contains the form use case: it owns the form state, applies user
//! edits and drives the submission state machine against the injected ports.

pub mod usecases;

pub use usecases::{FormError, RegistrationForm};
