//! Registration draft.
//!
//! The in-progress form state and the field-level mutations applied to it.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

/// Account type selected on the form.
///
/// 注册账户类型。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No checkbox is checked.
    ///
    /// 未选择。
    #[default]
    Unselected,
    /// Registering as a candidate user.
    ///
    /// 求职者账户。
    Candidate,
    /// Registering as a company user.
    ///
    /// 企业账户。
    Company,
}

/// Errors raised when a field name does not belong to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown text field: {0}")]
    UnknownTextField(String),
    #[error("unknown checkbox: {0}")]
    UnknownCheckbox(String),
}

/// Text inputs of the form, addressed by their input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        TextField::FirstName,
        TextField::LastName,
        TextField::Email,
        TextField::Password,
        TextField::ConfirmPassword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextField::FirstName => "first_name",
            TextField::LastName => "last_name",
            TextField::Email => "email",
            TextField::Password => "password",
            TextField::ConfirmPassword => "confirm_password",
        }
    }
}

impl FromStr for TextField {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| FieldError::UnknownTextField(name.to_string()))
    }
}

/// Role checkboxes of the form, addressed by their input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleField {
    Candidate,
    Company,
}

impl RoleField {
    pub const ALL: [RoleField; 2] = [RoleField::Candidate, RoleField::Company];

    pub fn as_str(self) -> &'static str {
        match self {
            RoleField::Candidate => "is_candidate_user",
            RoleField::Company => "is_company_user",
        }
    }

    pub fn role(self) -> Role {
        match self {
            RoleField::Candidate => Role::Candidate,
            RoleField::Company => Role::Company,
        }
    }
}

impl FromStr for RoleField {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RoleField::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| FieldError::UnknownCheckbox(name.to_string()))
    }
}

/// A profile picture selected through the file input.
#[derive(Clone, PartialEq, Eq)]
pub struct ProfileImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ProfileImage {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ProfileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// In-progress registration form values.
///
/// 注册表单草稿。
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub profile_image: Option<ProfileImage>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::Password => &self.password,
            TextField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Stores the raw input value, unconditionally.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::Password => &mut self.password,
            TextField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Applies a checkbox change: both roles are reset, then the named one
    /// takes the checked value. Both steps happen in this single call.
    pub fn set_checkbox(&mut self, field: RoleField, checked: bool) {
        self.role = Role::Unselected;
        if checked {
            self.role = field.role();
        }
    }

    pub fn set_profile_image(&mut self, image: ProfileImage) {
        self.profile_image = Some(image);
    }

    pub fn is_candidate_user(&self) -> bool {
        self.role == Role::Candidate
    }

    pub fn is_company_user(&self) -> bool {
        self.role == Role::Company
    }

    pub fn is_checked(&self, field: RoleField) -> bool {
        self.role == field.role()
    }
}

impl fmt::Debug for RegistrationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDraft")
            .field("profile_image", &self.profile_image)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
