use crate::registration::draft::RegistrationDraft;
use crate::registration::state_machine::SubmissionPhase;
use crate::registration::view::RegistrationView;

/// Full form state: the draft plus the transient UI flags.
///
/// 表单状态。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: RegistrationDraft,
    pub error_messages: Vec<String>,
    pub phase: SubmissionPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn has_registered(&self) -> bool {
        self.phase == SubmissionPhase::Registered
    }

    pub fn view(&self) -> RegistrationView {
        RegistrationView::render(self)
    }
}
