use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

/// Borrowed view over an error value, used for the `error` field of
/// error records.
///
/// Serializes as `{"message": ..., "sources": [...]}`; `sources` lists the
/// `source()` chain outermost first and is omitted when the chain is empty.
#[derive(Clone, Copy)]
pub struct ErrorReport<'a> {
    inner: &'a (dyn Error + 'static),
}

impl<'a> ErrorReport<'a> {
    pub fn new(inner: &'a (dyn Error + 'static)) -> Self {
        Self { inner }
    }

    /// The original error value.
    pub fn as_error(&self) -> &'a (dyn Error + 'static) {
        self.inner
    }

    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Messages of every error below this one in the `source()` chain.
    pub fn sources(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut cur = self.inner.source();
        while let Some(err) = cur {
            out.push(err.to_string());
            cur = err.source();
        }
        out
    }

    /// Human-readable trace: `Error: <message>`, one `caused by` line per
    /// source, then a backtrace of the logging call site when the process
    /// has backtraces enabled.
    pub fn stack(&self) -> String {
        let mut stack = format!("Error: {}", self.inner);
        for source in self.sources() {
            stack.push_str("\n    caused by: ");
            stack.push_str(&source);
        }
        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            stack.push('\n');
            stack.push_str(&backtrace.to_string());
        }
        stack
    }
}

impl std::fmt::Debug for ErrorReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ErrorReport").field(&self.inner).finish()
    }
}

impl Serialize for ErrorReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sources = self.sources();
        let len = if sources.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("message", &self.message())?;
        if !sources.is_empty() {
            map.serialize_entry("sources", &sources)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "config unreadable")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn serializes_message_only_without_sources() {
        let err = std::io::Error::other("bar");
        let value = serde_json::to_value(ErrorReport::new(&err)).unwrap();
        assert_eq!(value, json!({ "message": "bar" }));
    }

    #[test]
    fn serializes_source_chain() {
        let err = Outer(std::io::Error::other("permission denied"));
        let value = serde_json::to_value(ErrorReport::new(&err)).unwrap();
        assert_eq!(
            value,
            json!({ "message": "config unreadable", "sources": ["permission denied"] })
        );
    }

    #[test]
    fn stack_starts_with_message_and_lists_causes() {
        let err = Outer(std::io::Error::other("permission denied"));
        let stack = ErrorReport::new(&err).stack();
        assert!(stack.starts_with("Error: config unreadable"));
        assert!(stack.contains("\n    caused by: permission denied"));
    }
}
