//! Registration form orchestrator.
//!
//! This module owns the form state, applies field edits and coordinates the
//! submission state machine with the registration port.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use rf_core::{
    ports::{FormEventPort, RegistrationPort},
    registration::{
        validate, FieldError, FormState, ProfileImage, RegistrationAction, RegistrationDraft,
        RegistrationEvent, RegistrationPayload, RegistrationStateMachine, RegistrationView,
        RoleField, SubmissionPolicy, TextField,
    },
};

use crate::usecases::registration::context::RegistrationContext;

/// Errors produced by the form handlers.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("registration already completed, the form can no longer be edited")]
    AlreadyRegistered,
}

/// Orchestrator that holds the form state and drives submissions.
pub struct RegistrationForm {
    context: Arc<RegistrationContext>,
    policy: SubmissionPolicy,

    registration: Arc<dyn RegistrationPort>,
    form_events: Arc<dyn FormEventPort>,
}

impl RegistrationForm {
    pub fn new(
        registration: Arc<dyn RegistrationPort>,
        form_events: Arc<dyn FormEventPort>,
        policy: SubmissionPolicy,
    ) -> Self {
        Self {
            context: RegistrationContext::default().arc(),
            policy,
            registration,
            form_events,
        }
    }

    /// Text input change: stores the raw value under the named field.
    pub async fn change_text(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<RegistrationView, FormError> {
        let field: TextField = name.parse()?;
        let value = value.into();
        self.edit(move |draft| draft.set_text(field, value)).await
    }

    /// Checkbox change: reset both roles and set the named one, as one update.
    pub async fn change_checkbox(
        &self,
        name: &str,
        checked: bool,
    ) -> Result<RegistrationView, FormError> {
        let field: RoleField = name.parse()?;
        self.edit(move |draft| draft.set_checkbox(field, checked))
            .await
    }

    pub async fn change_profile_image(
        &self,
        image: ProfileImage,
    ) -> Result<RegistrationView, FormError> {
        debug!(file_name = %image.file_name, len = image.len(), "profile image selected");
        self.edit(move |draft| draft.set_profile_image(image)).await
    }

    /// Submits the form and returns the state once the attempt settled.
    ///
    /// A submit observed while another one is in flight is ignored and returns
    /// the current snapshot; it never reaches the registration port.
    pub async fn submit(&self) -> FormState {
        let state = self.context.get_state().await;
        if state.is_submitting() {
            debug!("registration submit ignored, a submission is already in flight");
            return state;
        }

        self.dispatch(RegistrationEvent::SubmitRequested).await
    }

    pub async fn state(&self) -> FormState {
        self.context.get_state().await
    }

    pub async fn view(&self) -> RegistrationView {
        self.context.get_state().await.view()
    }

    async fn edit(
        &self,
        apply: impl FnOnce(&mut RegistrationDraft),
    ) -> Result<RegistrationView, FormError> {
        let view = self
            .context
            .update(|state| {
                if state.has_registered() {
                    return Err(FormError::AlreadyRegistered);
                }
                apply(&mut state.draft);
                Ok(state.view())
            })
            .await?;

        self.form_events
            .emit_form_state_changed(view.clone())
            .await;
        Ok(view)
    }

    async fn dispatch(&self, event: RegistrationEvent) -> FormState {
        // Serializes submit dispatches so a second attempt never interleaves
        // with one that is waiting on the registration port.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.registration_form.dispatch", event = event.name());
        async {
            let mut current = self.context.phase().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current;
                let event_name = event.name();
                let (next, actions) = RegistrationStateMachine::transition(current, event);
                info!(from = ?from, to = ?next, event = %event_name, "registration state transition");

                // the new phase must be visible before a dispatch action awaits the port
                self.context.set_phase(next).await;
                let follow_up_events = self.execute_actions(actions).await;
                self.emit_current_view().await;

                current = next;
                pending_events.extend(follow_up_events);
            }

            self.context.get_state().await
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<RegistrationAction>) -> Vec<RegistrationEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "registration executing action");
            match action {
                RegistrationAction::ClearErrors => {
                    self.context
                        .update(|state| state.error_messages.clear())
                        .await;
                }
                RegistrationAction::Validate => {
                    let error_count = self
                        .context
                        .update(|state| {
                            let errors = validate(&state.draft);
                            state
                                .error_messages
                                .extend(errors.iter().map(ToString::to_string));
                            errors.len()
                        })
                        .await;

                    let blocked = self.policy.block_on_validation_errors && error_count > 0;
                    if error_count > 0 {
                        warn!(error_count, blocked, "registration draft failed validation");
                    }
                    follow_up_events.push(RegistrationEvent::Validated { blocked });
                }
                RegistrationAction::DispatchRegistration => {
                    follow_up_events.push(self.dispatch_registration().await);
                }
                RegistrationAction::AppendErrors { messages } => {
                    self.context
                        .update(|state| state.error_messages.extend(messages))
                        .await;
                }
            }
        }

        follow_up_events
    }

    async fn dispatch_registration(&self) -> RegistrationEvent {
        let payload = self
            .context
            .update(|state| RegistrationPayload::from_draft(&state.draft))
            .await;
        // the loading view goes out before the call so a front end can show it
        self.emit_current_view().await;

        match self.registration.register_user(payload).await {
            Ok(response) => {
                info!(
                    status = response.status.code,
                    message_count = response.messages.len(),
                    "registration request settled"
                );
                RegistrationEvent::RegistrationSettled {
                    status: response.status.code,
                    messages: response.messages,
                }
            }
            Err(err) => {
                error!(error = %err, "registration request failed");
                RegistrationEvent::RegistrationFailed {
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn emit_current_view(&self) {
        let view = self.context.get_state().await.view();
        self.form_events.emit_form_state_changed(view).await;
    }
}
