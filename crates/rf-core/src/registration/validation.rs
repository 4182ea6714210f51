//! Client-side validation of a registration draft.

use crate::registration::draft::{RegistrationDraft, Role};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Validation failures shown above the form.
///
/// `Display` yields the exact message rendered to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Password must be atleast {min_len} characters long")]
    PasswordTooShort { min_len: usize },
    #[error("Passwords must match")]
    PasswordMismatch,
    #[error("Only one checkbox may be selected.")]
    RoleSelection,
}

/// Runs every check against the draft, in order, and returns all failures.
pub fn validate(draft: &RegistrationDraft) -> Vec<ValidationError> {
    let mut errors = check_password(draft);
    errors.extend(check_one_role_selected(draft));
    errors
}

/// Password policy.
///
/// The mismatch error is only reported together with the length error; a long
/// enough password that differs from its confirmation passes this check.
pub fn check_password(draft: &RegistrationDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(ValidationError::PasswordTooShort {
            min_len: MIN_PASSWORD_LEN,
        });

        if draft.password != draft.confirm_password {
            errors.push(ValidationError::PasswordMismatch);
        }
    }

    errors
}

/// Exactly one role checkbox must be checked.
pub fn check_one_role_selected(draft: &RegistrationDraft) -> Option<ValidationError> {
    match draft.role {
        Role::Unselected => Some(ValidationError::RoleSelection),
        Role::Candidate | Role::Company => None,
    }
}
