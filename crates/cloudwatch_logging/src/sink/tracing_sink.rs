use super::Sink;
use crate::logging::{Level, LogRecord};
use serde_json::Value;
use tracing::{debug, error, info};

/// A sink that forwards records to the tracing crate instead of writing
/// JSON itself. `data` is attached as a compact JSON field.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn write(&self, record: &LogRecord<'_>) {
        let data = Value::Array(record.data().to_vec());
        match record {
            LogRecord::Error(e) => error!(
                error_message = %e.error_message,
                stack = %e.stack,
                data = %data,
                "{}",
                e.error_message
            ),
            LogRecord::Entry(e) => match e.level {
                Level::Debug => debug!(data = %data, "debug"),
                Level::Default | Level::Error => info!(data = %data, "log"),
            },
        }
    }
}
