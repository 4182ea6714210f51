//! Registration domain module.
//!
//! This module defines the registration draft, its validation rules, the
//! submission state machine and the view rendered from the form state.

pub mod draft;
pub mod payload;
pub mod policy;
pub mod state;
pub mod state_machine;
pub mod validation;
pub mod view;

pub use draft::{FieldError, ProfileImage, RegistrationDraft, Role, RoleField, TextField};
pub use payload::{PartValue, PayloadPart, RegistrationPayload};
pub use policy::SubmissionPolicy;
pub use state::FormState;
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationStateMachine, SubmissionPhase, HTTP_CREATED,
};
pub use validation::{validate, ValidationError, MIN_PASSWORD_LEN};
pub use view::{CheckboxView, FormView, InputView, LinkView, RegistrationView, SubmitButtonView};
