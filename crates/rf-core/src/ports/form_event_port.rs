use crate::registration::view::RegistrationView;

#[async_trait::async_trait]
pub trait FormEventPort: Send + Sync {
    async fn emit_form_state_changed(&self, view: RegistrationView);
}
