//! Registration submission state machine.
//!
//! Defines a pure state transition function for the submit flow of the form.

/// Status code returned by the registration endpoint on success.
pub const HTTP_CREATED: u16 = 201;

/// Submission phase of the form.
///
/// 表单提交阶段。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SubmissionPhase {
    /// The form is editable; previous messages may be shown.
    ///
    /// 可编辑。
    #[default]
    Editing,
    /// A submission is in flight.
    ///
    /// 提交中。
    Submitting,
    /// The account was created. Terminal.
    ///
    /// 注册完成。
    Registered,
}

/// Events that drive the submit flow.
///
/// 驱动提交流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationEvent {
    /// User submits the form.
    ///
    /// 用户提交表单。
    SubmitRequested,
    /// Validation finished; `blocked` when the policy refuses to send the draft.
    ///
    /// 校验完成。
    Validated { blocked: bool },
    /// The registration call returned a status code.
    ///
    /// 注册请求返回。
    RegistrationSettled { status: u16, messages: Vec<String> },
    /// The registration call could not complete.
    ///
    /// 注册请求失败。
    RegistrationFailed { reason: String },
}

impl RegistrationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationEvent::SubmitRequested => "SubmitRequested",
            RegistrationEvent::Validated { .. } => "Validated",
            RegistrationEvent::RegistrationSettled { .. } => "RegistrationSettled",
            RegistrationEvent::RegistrationFailed { .. } => "RegistrationFailed",
        }
    }
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationAction {
    /// Drop messages from the previous attempt.
    ///
    /// 清空错误信息。
    ClearErrors,
    /// Validate the draft and append its messages.
    ///
    /// 校验草稿。
    Validate,
    /// Build the payload and call the registration port.
    ///
    /// 发送注册请求。
    DispatchRegistration,
    /// Append messages describing a failed attempt.
    ///
    /// 追加错误信息。
    AppendErrors { messages: Vec<String> },
}

/// Pure registration state machine.
///
/// 纯状态机：不包含副作用。
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        phase: SubmissionPhase,
        event: RegistrationEvent,
    ) -> (SubmissionPhase, Vec<RegistrationAction>) {
        match (phase, event) {
            (SubmissionPhase::Editing, RegistrationEvent::SubmitRequested) => (
                SubmissionPhase::Submitting,
                vec![RegistrationAction::ClearErrors, RegistrationAction::Validate],
            ),
            (SubmissionPhase::Submitting, RegistrationEvent::Validated { blocked: false }) => (
                SubmissionPhase::Submitting,
                vec![RegistrationAction::DispatchRegistration],
            ),
            (SubmissionPhase::Submitting, RegistrationEvent::Validated { blocked: true }) => {
                (SubmissionPhase::Editing, Vec::new())
            }
            (SubmissionPhase::Submitting, RegistrationEvent::RegistrationSettled { status, .. })
                if status == HTTP_CREATED =>
            {
                (SubmissionPhase::Registered, Vec::new())
            }
            (
                SubmissionPhase::Submitting,
                RegistrationEvent::RegistrationSettled { status, messages },
            ) => {
                let messages = if messages.is_empty() {
                    vec![format!("Registration failed with status {status}")]
                } else {
                    messages
                };
                (
                    SubmissionPhase::Editing,
                    vec![RegistrationAction::AppendErrors { messages }],
                )
            }
            (SubmissionPhase::Submitting, RegistrationEvent::RegistrationFailed { reason }) => (
                SubmissionPhase::Editing,
                vec![RegistrationAction::AppendErrors {
                    messages: vec![format!("Registration request failed: {reason}")],
                }],
            ),
            (phase, _event) => (phase, Vec::new()),
        }
    }
}
