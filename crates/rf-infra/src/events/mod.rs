mod tracing_event_port;

pub use tracing_event_port::TracingFormEventPort;
