mod channel;
mod cloudwatch_sink;
mod fn_sink;
mod tracing_sink;

pub use channel::{Channel, StdChannel};
pub use cloudwatch_sink::CloudWatchSink;
pub use fn_sink::{FnSink, from_fn};
pub use tracing_sink::TracingSink;

use crate::logging::LogRecord;
use std::sync::Arc;

/// Destination for formatted records.
///
/// Called synchronously, at most once per logging call. There is no
/// failure contract: a panicking sink unwinds into the caller.
pub trait Sink: Send + Sync {
    fn write(&self, record: &LogRecord<'_>);
}

/// A shared sink, so one instance can serve several severities or loggers.
impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, record: &LogRecord<'_>) {
        (**self).write(record)
    }
}
