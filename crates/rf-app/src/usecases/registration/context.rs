use std::sync::Arc;

use rf_core::registration::{FormState, SubmissionPhase};
use tokio::sync::Mutex;

/// Shared form context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: Used only for submit dispatches so at most one runs at a time.
/// - `state`: Used for field edits, reads and the updates made during a dispatch.
///   Never held across an `.await` on a port.
#[derive(Clone)]
pub struct RegistrationContext {
    state: Arc<Mutex<FormState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl RegistrationContext {
    pub fn new(initial_state: FormState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns a snapshot of the current state.
    ///
    /// This does NOT acquire `dispatch_lock`, so it can observe an in-flight submission.
    pub async fn get_state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    pub async fn phase(&self) -> SubmissionPhase {
        self.state.lock().await.phase
    }

    pub async fn set_phase(&self, phase: SubmissionPhase) {
        self.state.lock().await.phase = phase;
    }

    /// Applies `apply` to the state as one locked update.
    pub async fn update<R>(&self, apply: impl FnOnce(&mut FormState) -> R) -> R {
        let mut guard = self.state.lock().await;
        apply(&mut guard)
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    ///
    /// Returns a guard that releases the lock when dropped.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }
}

impl Default for RegistrationContext {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}
