use super::Sink;
use crate::logging::LogRecord;

/// Sink backed by a closure. Build one with [`from_fn`].
#[derive(Clone)]
pub struct FnSink<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

/// Wraps a closure so it can be used wherever a [`Sink`] is expected.
///
/// ```
/// use cloudwatch_logging::{Logger, args, sink};
///
/// let logger = Logger::builder()
///     .log_sink(sink::from_fn(|record| println!("{:?}", record.data())))
///     .build();
/// logger.log(args!["hello"]);
/// ```
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: Fn(&LogRecord<'_>) + Send + Sync,
{
    FnSink { f }
}

impl<F> Sink for FnSink<F>
where
    F: Fn(&LogRecord<'_>) + Send + Sync,
{
    fn write(&self, record: &LogRecord<'_>) {
        (self.f)(record)
    }
}
