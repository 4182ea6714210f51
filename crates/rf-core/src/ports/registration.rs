use async_trait::async_trait;
use thiserror::Error;

use crate::registration::payload::RegistrationPayload;
use crate::registration::state_machine::HTTP_CREATED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResponseStatus {
    pub code: u16,
}

/// Outcome of a registration call as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub status: ResponseStatus,
    /// Human-readable messages reported by the server, if any.
    pub messages: Vec<String>,
}

impl RegistrationResponse {
    pub fn new(code: u16) -> Self {
        Self {
            status: ResponseStatus { code },
            messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.messages = messages;
        self
    }

    pub fn is_created(&self) -> bool {
        self.status.code == HTTP_CREATED
    }
}

#[derive(Debug, Error)]
pub enum RegistrationPortError {
    #[error("registration request could not be built: {0}")]
    InvalidPayload(String),

    #[error("registration transport failed: {0}")]
    Transport(String),
}

/// Submits a registration payload to the account service.
#[async_trait]
pub trait RegistrationPort: Send + Sync {
    async fn register_user(
        &self,
        payload: RegistrationPayload,
    ) -> Result<RegistrationResponse, RegistrationPortError>;
}
