use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::{mock, predicate::function};
use rf_app::RegistrationForm;
use rf_core::ports::{
    FormEventPort, RegistrationPort, RegistrationPortError, RegistrationResponse,
};
use rf_core::registration::{
    PartValue, ProfileImage, RegistrationPayload, RegistrationView, SubmissionPhase,
    SubmissionPolicy,
};

mock! {
    pub Registration {}

    #[async_trait]
    impl RegistrationPort for Registration {
        async fn register_user(
            &self,
            payload: RegistrationPayload,
        ) -> Result<RegistrationResponse, RegistrationPortError>;
    }
}

#[derive(Default)]
struct RecordingFormEvents {
    views: Mutex<Vec<RegistrationView>>,
}

#[async_trait]
impl FormEventPort for RecordingFormEvents {
    async fn emit_form_state_changed(&self, view: RegistrationView) {
        self.views.lock().unwrap().push(view);
    }
}

#[tokio::test]
async fn registration_flow_test_company_signup_reaches_confirmation() {
    let mut registration = MockRegistration::new();
    registration
        .expect_register_user()
        .with(function(|payload: &RegistrationPayload| {
            payload.field_names()
                == vec![
                    "image",
                    "first_name",
                    "last_name",
                    "email",
                    "password",
                    "confirm_password",
                    "is_candidate_user",
                    "is_company_user",
                ]
                && payload.text("is_candidate_user") == Some("false")
                && payload.text("is_company_user") == Some("true")
                && matches!(
                    payload.get("image"),
                    Some(PartValue::File { file_name, .. }) if file_name == "logo.png"
                )
        }))
        .times(1)
        .returning(|_| Ok(RegistrationResponse::new(201)));

    let events = Arc::new(RecordingFormEvents::default());
    let form = RegistrationForm::new(
        Arc::new(registration),
        events.clone(),
        SubmissionPolicy::default(),
    );

    form.change_profile_image(ProfileImage::new("logo.png", vec![0x89u8, b'P', b'N', b'G']))
        .await
        .expect("select image");
    form.change_text("first_name", "Grace").await.expect("first name");
    form.change_text("last_name", "Hopper").await.expect("last name");
    form.change_text("email", "grace@example.com")
        .await
        .expect("email");
    form.change_text("password", "compiler1").await.expect("password");
    form.change_text("confirm_password", "compiler1")
        .await
        .expect("confirm password");
    form.change_checkbox("is_candidate_user", true)
        .await
        .expect("candidate");
    form.change_checkbox("is_company_user", true)
        .await
        .expect("company");

    let state = form.submit().await;

    assert_eq!(state.phase, SubmissionPhase::Registered);
    assert!(state.error_messages.is_empty());
    assert_eq!(
        form.view().await,
        RegistrationView::Confirmation {
            headline: "Confirm Your Email Address".to_string(),
        }
    );

    let views = events.views.lock().unwrap();
    assert!(views.last().is_some_and(RegistrationView::is_confirmation));
}

#[tokio::test]
async fn registration_flow_test_rejected_signup_can_be_retried() {
    let mut registration = MockRegistration::new();
    let mut seq = mockall::Sequence::new();
    registration
        .expect_register_user()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(RegistrationResponse::new(400)
                .with_messages(vec!["email: Enter a valid email address.".to_string()]))
        });
    registration
        .expect_register_user()
        .with(function(|payload: &RegistrationPayload| {
            payload.text("email") == Some("grace@example.com")
        }))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(RegistrationResponse::new(201)));

    let form = RegistrationForm::new(
        Arc::new(registration),
        Arc::new(RecordingFormEvents::default()),
        SubmissionPolicy::default(),
    );
    form.change_text("email", "grace").await.expect("email");
    form.change_text("password", "compiler1").await.expect("password");
    form.change_text("confirm_password", "compiler1")
        .await
        .expect("confirm password");
    form.change_checkbox("is_candidate_user", true)
        .await
        .expect("candidate");

    let rejected = form.submit().await;
    assert_eq!(rejected.phase, SubmissionPhase::Editing);
    assert_eq!(
        rejected.error_messages,
        vec!["email: Enter a valid email address.".to_string()]
    );
    let form_view = form.view().await;
    let rendered = form_view.as_form().expect("form view after rejection");
    assert_eq!(rendered.error_messages, rejected.error_messages);
    assert!(!rendered.submit.is_loading);

    form.change_text("email", "grace@example.com")
        .await
        .expect("fix email");
    let accepted = form.submit().await;

    assert!(accepted.has_registered());
    assert!(accepted.error_messages.is_empty());
}
