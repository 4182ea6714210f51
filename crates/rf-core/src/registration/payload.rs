//! Multipart payload built from a registration draft.
//!
//! The payload is transport-agnostic: adapters turn each [`PayloadPart`] into
//! their own multipart representation.

use bytes::Bytes;

use crate::registration::draft::RegistrationDraft;

pub const FIELD_IMAGE: &str = "image";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";
pub const FIELD_IS_CANDIDATE_USER: &str = "is_candidate_user";
pub const FIELD_IS_COMPANY_USER: &str = "is_company_user";

/// Value carried by a single multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        content_type: Option<String>,
        bytes: Bytes,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
    pub name: &'static str,
    pub value: PartValue,
}

impl PayloadPart {
    fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: PartValue::Text(value.into()),
        }
    }
}

/// Ordered multipart body of a registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationPayload {
    parts: Vec<PayloadPart>,
}

impl RegistrationPayload {
    /// Builds the payload from the current draft values. No validation happens here.
    ///
    /// Without a selected picture the `image` field is sent as an empty text
    /// value, so the field set is always the same.
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        let image = match &draft.profile_image {
            Some(image) => PayloadPart {
                name: FIELD_IMAGE,
                value: PartValue::File {
                    file_name: image.file_name.clone(),
                    content_type: image.content_type.clone(),
                    bytes: image.bytes.clone(),
                },
            },
            None => PayloadPart::text(FIELD_IMAGE, ""),
        };

        let parts = vec![
            image,
            PayloadPart::text(FIELD_FIRST_NAME, draft.first_name.as_str()),
            PayloadPart::text(FIELD_LAST_NAME, draft.last_name.as_str()),
            PayloadPart::text(FIELD_EMAIL, draft.email.as_str()),
            PayloadPart::text(FIELD_PASSWORD, draft.password.as_str()),
            PayloadPart::text(FIELD_CONFIRM_PASSWORD, draft.confirm_password.as_str()),
            PayloadPart::text(FIELD_IS_CANDIDATE_USER, draft.is_candidate_user().to_string()),
            PayloadPart::text(FIELD_IS_COMPANY_USER, draft.is_company_user().to_string()),
        ];

        Self { parts }
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<PayloadPart> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.parts.iter().map(|part| part.name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&PartValue> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| &part.value)
    }

    /// Returns the value of a text field, `None` for missing or file fields.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PartValue::Text(text) => Some(text.as_str()),
            PartValue::File { .. } => None,
        }
    }
}
