//! regform library
//!
//! Terminal front end for the registration form: CLI parsing, tracing
//! bootstrap, adapter wiring and text rendering.

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod render;

pub use app::{fill_form, run, submit_form, FormInput};
pub use cli::Cli;
