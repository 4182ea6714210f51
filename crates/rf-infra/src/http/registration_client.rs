//! reqwest-backed registration client.
//!
//! Sends the registration payload as a `multipart/form-data` POST and maps the
//! response into a [`RegistrationResponse`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use rf_core::ports::{RegistrationPort, RegistrationPortError, RegistrationResponse};
use rf_core::registration::{PartValue, RegistrationPayload, HTTP_CREATED};

use crate::config::RegistrationConfig;

pub struct HttpRegistrationClient {
    client: Client,
    register_url: String,
}

impl HttpRegistrationClient {
    pub fn new(client: Client, register_url: impl Into<String>) -> Self {
        Self {
            client,
            register_url: register_url.into(),
        }
    }

    pub fn from_config(config: &RegistrationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("build registration http client failed")?;
        Ok(Self::new(client, config.register_url()))
    }

    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

fn build_form(payload: RegistrationPayload) -> Result<Form, RegistrationPortError> {
    let mut form = Form::new();
    for part in payload.into_parts() {
        form = match part.value {
            PartValue::Text(text) => form.text(part.name, text),
            PartValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let mut file_part = Part::bytes(bytes.to_vec()).file_name(file_name);
                if let Some(content_type) = content_type {
                    file_part = file_part.mime_str(&content_type).map_err(|e| {
                        RegistrationPortError::InvalidPayload(format!(
                            "invalid content type {content_type:?} for {}: {e}",
                            part.name
                        ))
                    })?;
                }
                form.part(part.name, file_part)
            }
        };
    }
    Ok(form)
}

/// Extracts human-readable messages from an error response body.
///
/// Understands `errors` as a list of strings or as a map of field to
/// messages, plus `message` and `detail`. A bare field map is read like the
/// `errors` map. Anything else yields no messages.
pub fn parse_error_messages(body: &str) -> Vec<String> {
    let Ok(Value::Object(root)) = serde_json::from_str::<Value>(body) else {
        return Vec::new();
    };

    let mut messages = Vec::new();
    match root.get("errors") {
        Some(Value::Array(items)) => messages.extend(items.iter().filter_map(text_of)),
        Some(Value::Object(fields)) => collect_field_messages(fields, &mut messages),
        Some(Value::String(text)) => messages.push(text.clone()),
        _ => {}
    }
    for key in ["message", "detail"] {
        if let Some(text) = root.get(key).and_then(text_of) {
            messages.push(text);
        }
    }

    if messages.is_empty() {
        collect_field_messages(&root, &mut messages);
    }
    messages
}

fn text_of(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn collect_field_messages(fields: &serde_json::Map<String, Value>, messages: &mut Vec<String>) {
    for (field, value) in fields {
        match value {
            Value::Array(items) => messages.extend(
                items
                    .iter()
                    .filter_map(text_of)
                    .map(|text| format!("{field}: {text}")),
            ),
            Value::String(text) => messages.push(format!("{field}: {text}")),
            _ => {}
        }
    }
}

#[async_trait]
impl RegistrationPort for HttpRegistrationClient {
    async fn register_user(
        &self,
        payload: RegistrationPayload,
    ) -> Result<RegistrationResponse, RegistrationPortError> {
        let field_count = payload.len();
        let form = build_form(payload)?;
        debug!(url = %self.register_url, field_count, "sending registration request");

        let response = self
            .client
            .post(&self.register_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RegistrationPortError::Transport(e.to_string()))?;

        let code = response.status().as_u16();
        if code == HTTP_CREATED {
            return Ok(RegistrationResponse::new(code));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status = code, error = %e, "failed to read registration error body");
                String::new()
            }
        };
        let messages = parse_error_messages(&body);
        debug!(status = code, message_count = messages.len(), "registration rejected");
        Ok(RegistrationResponse::new(code).with_messages(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use rf_core::registration::{ProfileImage, RegistrationDraft, RoleField, TextField};
    use std::time::Duration;

    fn build_client(url: String) -> HttpRegistrationClient {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpRegistrationClient::new(client, format!("{url}/api/users/register/"))
    }

    fn filled_payload() -> RegistrationPayload {
        let mut draft = RegistrationDraft::new();
        draft.set_profile_image(
            ProfileImage::new("avatar.png", b"fake-png-bytes".to_vec())
                .with_content_type(Some("image/png".to_string())),
        );
        draft.set_text(TextField::FirstName, "Ada");
        draft.set_text(TextField::LastName, "Lovelace");
        draft.set_text(TextField::Email, "ada@example.com");
        draft.set_text(TextField::Password, "analytical");
        draft.set_text(TextField::ConfirmPassword, "analytical");
        draft.set_checkbox(RoleField::Company, true);
        RegistrationPayload::from_draft(&draft)
    }

    fn text_field(name: &str, value: &str) -> Matcher {
        Matcher::Regex(format!("name=\"{name}\"\r\n\r\n{value}\r\n"))
    }

    #[tokio::test]
    async fn posts_every_field_as_multipart() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/users/register/")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(
                    "name=\"image\"; filename=\"avatar.png\"\r\nContent-Type: image/png\r\n\r\nfake-png-bytes"
                        .to_string(),
                ),
                text_field("first_name", "Ada"),
                text_field("last_name", "Lovelace"),
                text_field("email", "ada@example.com"),
                text_field("password", "analytical"),
                text_field("confirm_password", "analytical"),
                text_field("is_candidate_user", "false"),
                text_field("is_company_user", "true"),
            ]))
            .with_status(201)
            .with_body("{\"id\": 7}")
            .create_async()
            .await;

        let response = build_client(server.url())
            .register_user(filled_payload())
            .await
            .expect("request should be sent");

        mock.assert_async().await;
        assert!(response.is_created());
        assert!(response.messages.is_empty());
    }

    #[tokio::test]
    async fn empty_image_is_sent_as_text_field() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/users/register/")
            .match_body(Matcher::Regex("name=\"image\"\r\n\r\n\r\n".to_string()))
            .with_status(201)
            .create_async()
            .await;

        let payload = RegistrationPayload::from_draft(&RegistrationDraft::new());
        let response = build_client(server.url())
            .register_user(payload)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_created());
    }

    #[tokio::test]
    async fn non_created_status_carries_server_messages() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/users/register/")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors": {"email": ["user with this email already exists."]}}"#)
            .create_async()
            .await;

        let response = build_client(server.url())
            .register_user(filled_payload())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status.code, 400);
        assert!(!response.is_created());
        assert_eq!(
            response.messages,
            vec!["email: user with this email already exists.".to_string()]
        );
    }

    #[tokio::test]
    async fn ok_status_is_not_treated_as_created() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/users/register/")
            .with_status(200)
            .with_body("<html>ok</html>")
            .create_async()
            .await;

        let response = build_client(server.url())
            .register_user(filled_payload())
            .await
            .unwrap();

        assert_eq!(response.status.code, 200);
        assert!(!response.is_created());
        assert!(response.messages.is_empty());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = build_client(url)
            .register_user(filled_payload())
            .await
            .unwrap_err();

        assert!(matches!(err, RegistrationPortError::Transport(_)));
    }

    #[tokio::test]
    async fn invalid_content_type_is_rejected_before_sending() {
        let mut draft = RegistrationDraft::new();
        draft.set_profile_image(
            ProfileImage::new("avatar.png", b"x".to_vec())
                .with_content_type(Some("not a mime".to_string())),
        );
        let client = build_client("http://127.0.0.1:9".to_string());

        let err = client
            .register_user(RegistrationPayload::from_draft(&draft))
            .await
            .unwrap_err();

        assert!(matches!(err, RegistrationPortError::InvalidPayload(_)));
    }

    #[test]
    fn from_config_targets_register_url() {
        let config = RegistrationConfig {
            api_base_url: "http://accounts.local/".to_string(),
            ..RegistrationConfig::default()
        };
        let client = HttpRegistrationClient::from_config(&config).unwrap();
        assert_eq!(client.register_url(), "http://accounts.local/api/users/register/");
    }

    #[test]
    fn parse_error_messages_reads_known_shapes() {
        assert_eq!(
            parse_error_messages(r#"{"errors": ["Email taken", 3, "Bad name"]}"#),
            vec!["Email taken".to_string(), "Bad name".to_string()]
        );
        assert_eq!(
            parse_error_messages(r#"{"message": "Service unavailable"}"#),
            vec!["Service unavailable".to_string()]
        );
        assert_eq!(
            parse_error_messages(r#"{"detail": "Not allowed"}"#),
            vec!["Not allowed".to_string()]
        );
        assert_eq!(
            parse_error_messages(r#"{"password": ["This password is too common."]}"#),
            vec!["password: This password is too common.".to_string()]
        );
    }

    #[test]
    fn parse_error_messages_ignores_unparsable_bodies() {
        assert!(parse_error_messages("").is_empty());
        assert!(parse_error_messages("<h1>Server Error</h1>").is_empty());
        assert!(parse_error_messages("[\"not an object\"]").is_empty());
        assert!(parse_error_messages(r#"{"id": 3}"#).is_empty());
    }
}
