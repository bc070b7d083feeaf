use super::{Channel, Sink, StdChannel};
use crate::logging::LogRecord;

/// Default sink: writes each record as an indented JSON string.
///
/// CloudWatch (and similar log search tools) can filter on JSON
/// properties only when every line is a serialized JSON object, which is
/// why records are never written in any other shape.
#[derive(Debug, Clone)]
pub struct CloudWatchSink<C = StdChannel> {
    channel: C,
}

impl CloudWatchSink {
    pub fn stdout() -> Self {
        Self::new(StdChannel::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(StdChannel::Stderr)
    }

    pub fn info() -> Self {
        Self::new(StdChannel::Info)
    }
}

impl<C: Channel> CloudWatchSink<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Serializes a record with two-space indentation.
    pub fn format(&self, record: &LogRecord<'_>) -> serde_json::Result<String> {
        serde_json::to_string_pretty(record)
    }
}

impl<C: Channel> Sink for CloudWatchSink<C> {
    fn write(&self, record: &LogRecord<'_>) {
        match self.format(record) {
            Ok(line) => self.channel.write_line(&line),
            Err(err) => tracing::error!(
                level = %record.level(),
                error = %err,
                "Failed to serialize log record",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Level;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Channel for Capture {
        fn write_line(&self, line: &str) {
            self.0.lock().unwrap().push(line.to_string());
        }
    }

    #[test]
    fn writes_pretty_json_line() {
        let capture = Capture::default();
        let sink = CloudWatchSink::new(capture.clone());

        sink.write(&LogRecord::entry(
            Level::Default,
            vec![json!("foo"), json!("bar")],
        ));

        let lines = capture.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "{\n  \"level\": \"DEFAULT\",\n  \"data\": [\n    \"foo\",\n    \"bar\"\n  ]\n}"
        );
    }

    #[test]
    fn error_line_parses_back() {
        let capture = Capture::default();
        let sink = CloudWatchSink::new(capture.clone());
        let err = std::io::Error::other("bar");

        sink.write(&LogRecord::error(&err, vec![json!("foo"), json!("baz")]));

        let lines = capture.0.lock().unwrap();
        let mut parsed: Value = serde_json::from_str(&lines[0]).unwrap();
        let stack = parsed
            .as_object_mut()
            .and_then(|obj| obj.remove("stack"))
            .unwrap();
        assert!(stack.as_str().unwrap().starts_with("Error: bar"));
        assert_eq!(
            parsed,
            json!({
                "level": "ERROR",
                "errorMessage": "bar",
                "error": { "message": "bar" },
                "data": ["foo", "baz"],
            })
        );
    }

    #[test]
    fn std_constructors_pick_channels() {
        assert_eq!(*CloudWatchSink::stdout().channel(), StdChannel::Stdout);
        assert_eq!(*CloudWatchSink::stderr().channel(), StdChannel::Stderr);
        assert_eq!(*CloudWatchSink::info().channel(), StdChannel::Info);
    }
}
