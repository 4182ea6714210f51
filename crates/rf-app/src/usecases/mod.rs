//! Business logic use cases

pub mod registration;

pub use registration::{FormError, RegistrationForm};
