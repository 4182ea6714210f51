pub mod tracing;
pub mod wiring;

pub use self::tracing::init_tracing_subscriber;
pub use wiring::{build_form, FormRuntime};
