pub mod tracing_sink;

pub use tracing_sink::TracingFeedbackSink;
