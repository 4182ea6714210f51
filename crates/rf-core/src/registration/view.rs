//! View model rendered from the form state.
//!
//! A front end draws either the form or the confirmation message from these
//! types; they carry every label and value it needs.

use serde::Serialize;

use crate::registration::draft::{RoleField, TextField};
use crate::registration::state::FormState;

pub const FORM_TITLE: &str = "Register";
pub const CONFIRMATION_HEADLINE: &str = "Confirm Your Email Address";
pub const IMAGE_NOT_UPLOADED_LABEL: &str = "Upload Profile Picture";
pub const IMAGE_UPLOADED_LABEL: &str = "Profile Picture Uploaded";
pub const PASSWORD_HINT: &str = "Must be atleast 8 characters long";
pub const SUBMIT_LABEL: &str = "Register";
pub const LOGIN_PROMPT: &str = "Already have an account?";
pub const LOGIN_TEXT: &str = "Login Here";
pub const LOGIN_HREF: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistrationView {
    Form(FormView),
    Confirmation { headline: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: String,
    pub error_messages: Vec<String>,
    pub image_label: String,
    pub inputs: Vec<InputView>,
    pub checkboxes: Vec<CheckboxView>,
    pub submit: SubmitButtonView,
    pub login_link: LinkView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub required: bool,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxView {
    pub name: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub prompt: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

impl RegistrationView {
    pub fn render(state: &FormState) -> Self {
        if state.has_registered() {
            return RegistrationView::Confirmation {
                headline: CONFIRMATION_HEADLINE.to_string(),
            };
        }

        let draft = &state.draft;
        let image_label = if draft.profile_image.is_some() {
            IMAGE_UPLOADED_LABEL
        } else {
            IMAGE_NOT_UPLOADED_LABEL
        };

        RegistrationView::Form(FormView {
            title: FORM_TITLE.to_string(),
            error_messages: state.error_messages.clone(),
            image_label: image_label.to_string(),
            inputs: TextField::ALL
                .into_iter()
                .map(|field| input_view(field, draft.text(field)))
                .collect(),
            checkboxes: RoleField::ALL
                .into_iter()
                .map(|field| CheckboxView {
                    name: field.as_str(),
                    label: checkbox_label(field),
                    checked: draft.is_checked(field),
                })
                .collect(),
            submit: SubmitButtonView {
                label: SUBMIT_LABEL,
                is_loading: state.is_submitting(),
            },
            login_link: LinkView {
                prompt: LOGIN_PROMPT,
                text: LOGIN_TEXT,
                href: LOGIN_HREF,
            },
        })
    }

    pub fn is_confirmation(&self) -> bool {
        matches!(self, RegistrationView::Confirmation { .. })
    }

    pub fn as_form(&self) -> Option<&FormView> {
        match self {
            RegistrationView::Form(form) => Some(form),
            RegistrationView::Confirmation { .. } => None,
        }
    }
}

impl FormView {
    pub fn input(&self, name: &str) -> Option<&InputView> {
        self.inputs.iter().find(|input| input.name == name)
    }

    pub fn checkbox(&self, name: &str) -> Option<&CheckboxView> {
        self.checkboxes.iter().find(|checkbox| checkbox.name == name)
    }
}

fn input_view(field: TextField, value: &str) -> InputView {
    let (label, input_type, required, hint) = match field {
        TextField::FirstName => ("First Name", "text", true, None),
        TextField::LastName => ("Last Name", "text", true, None),
        TextField::Email => ("Email", "email", true, None),
        TextField::Password => ("Password", "password", false, Some(PASSWORD_HINT)),
        TextField::ConfirmPassword => ("Confirm Password", "password", false, None),
    };

    InputView {
        name: field.as_str(),
        label,
        input_type,
        value: value.to_string(),
        required,
        hint,
    }
}

fn checkbox_label(field: RoleField) -> &'static str {
    match field {
        RoleField::Candidate => "Register as a candidate user",
        RoleField::Company => "Register as a company user",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::draft::ProfileImage;
    use crate::registration::state_machine::SubmissionPhase;

    #[test]
    fn registered_state_renders_confirmation_only() {
        let mut state = FormState::new();
        state.phase = SubmissionPhase::Registered;
        state.error_messages.push("stale".to_string());

        let view = state.view();

        assert_eq!(
            view,
            RegistrationView::Confirmation {
                headline: "Confirm Your Email Address".to_string()
            }
        );
        assert!(view.as_form().is_none());
    }

    #[test]
    fn form_view_reflects_draft_and_flags() {
        let mut state = FormState::new();
        state.draft.set_text(TextField::Email, "ada@example.com");
        state.draft.set_checkbox(RoleField::Candidate, true);
        state.error_messages = vec!["Passwords must match".to_string()];
        state.phase = SubmissionPhase::Submitting;

        let view = state.view();
        let form = view.as_form().expect("form view");

        assert_eq!(form.title, "Register");
        assert_eq!(form.error_messages, vec!["Passwords must match".to_string()]);
        assert_eq!(form.input("email").map(|i| i.value.as_str()), Some("ada@example.com"));
        assert_eq!(form.input("email").map(|i| i.input_type), Some("email"));
        assert_eq!(
            form.input("password").and_then(|i| i.hint),
            Some("Must be atleast 8 characters long")
        );
        assert_eq!(form.checkbox("is_candidate_user").map(|c| c.checked), Some(true));
        assert_eq!(form.checkbox("is_company_user").map(|c| c.checked), Some(false));
        assert!(form.submit.is_loading);
        assert_eq!(form.login_link.href, "/login");
    }

    #[test]
    fn image_label_switches_once_a_picture_is_chosen() {
        let mut state = FormState::new();
        let label = |state: &FormState| state.view().as_form().map(|f| f.image_label.clone());

        assert_eq!(label(&state).as_deref(), Some("Upload Profile Picture"));

        state
            .draft
            .set_profile_image(ProfileImage::new("me.jpg", vec![1u8]));
        assert_eq!(label(&state).as_deref(), Some("Profile Picture Uploaded"));
    }

    #[test]
    fn view_serializes_with_kind_tag() {
        let json = serde_json::to_value(FormState::new().view()).unwrap();

        assert_eq!(json["kind"], "form");
        assert_eq!(json["submit"]["is_loading"], false);
        assert_eq!(json["inputs"].as_array().map(Vec::len), Some(5));
    }
}
