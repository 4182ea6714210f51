/// How the form treats validation failures on submit.
///
/// 提交策略。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmissionPolicy {
    /// When set, a draft with validation errors is not sent; the form returns
    /// to editing with the messages shown. Off by default: the request is
    /// dispatched regardless and the messages are shown alongside.
    pub block_on_validation_errors: bool,
}

impl SubmissionPolicy {
    pub fn blocking() -> Self {
        Self {
            block_on_validation_errors: true,
        }
    }
}
