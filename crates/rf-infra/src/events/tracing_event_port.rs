use async_trait::async_trait;
use rf_core::ports::FormEventPort;
use rf_core::registration::RegistrationView;
use tracing::{debug, info};

/// Form event sink that records every new view in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFormEventPort;

#[async_trait]
impl FormEventPort for TracingFormEventPort {
    async fn emit_form_state_changed(&self, view: RegistrationView) {
        match &view {
            RegistrationView::Confirmation { headline } => {
                info!(headline = %headline, "registration form switched to confirmation");
            }
            RegistrationView::Form(form) => {
                debug!(
                    error_count = form.error_messages.len(),
                    is_loading = form.submit.is_loading,
                    image_label = %form.image_label,
                    "registration form view changed"
                );
            }
        }
    }
}
