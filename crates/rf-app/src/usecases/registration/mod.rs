//! Registration use cases.
//!
//! This module exposes the registration form orchestrator.

mod context;
pub mod form;

pub use context::RegistrationContext;
pub use form::{FormError, RegistrationForm};
