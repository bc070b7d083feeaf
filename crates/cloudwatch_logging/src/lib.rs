//! Structured JSON logging with level filtering and injectable sinks.
//!
//! Every call builds one record and hands it synchronously to a sink:
//!
//! ```no_run
//! use cloudwatch_logging::{Logger, args};
//!
//! let logger = Logger::new();
//! logger.log(args!["user signed in", { "id": 42 }]);
//!
//! let err = std::io::Error::other("disk full");
//! logger.error(&err, args!["flush failed"]);
//! ```
//!
//! With the default sinks each record is written as an indented JSON
//! string, so log search tools that understand JSON lines can filter on
//! `level`, `errorMessage` and `data`.

pub mod config;
pub mod error;
pub mod logging;
pub mod sink;

pub use config::{LOG_LEVEL_ENV, LoggerConfig};
pub use error::{ErrorReport, ParseLevelError};
pub use logging::*;
pub use sink::{Channel, CloudWatchSink, FnSink, Sink, StdChannel, TracingSink};

use serde_json::Value;

/// Logs through a fresh default [`Logger`].
pub fn log<I>(data: I)
where
    I: IntoIterator<Item = Value>,
{
    Logger::new().log(data);
}

/// Logs an error through a fresh default [`Logger`].
pub fn error<I>(err: &(dyn std::error::Error + 'static), data: I)
where
    I: IntoIterator<Item = Value>,
{
    Logger::new().error(err, data);
}

/// Logs at debug level through a fresh default [`Logger`].
pub fn debug<I>(data: I)
where
    I: IntoIterator<Item = Value>,
{
    Logger::new().debug(data);
}

/// Builds the positional `data` of a record.
///
/// Accepts the same syntax as the elements of a `serde_json::json!` array:
/// any `Serialize` expression, or JSON literals such as `null` and
/// `{ "id": 1 }`.
///
/// ```
/// use cloudwatch_logging::args;
///
/// let data = args!["foo", 1, null, { "ok": true }];
/// assert_eq!(data.len(), 4);
/// ```
///
/// # Panics
///
/// Panics where `serde_json::json!` does: when an expression's `Serialize`
/// impl fails, e.g. a map with non-string keys.
#[macro_export]
macro_rules! args {
    ($($tt:tt)*) => {
        $crate::__private::into_args($crate::__private::json!([$($tt)*]))
    };
}

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
    use serde_json::Value;

    pub fn into_args(value: Value) -> Vec<Value> {
        match value {
            Value::Array(values) => values,
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_builds_ordered_values() {
        let name = "alice";
        assert_eq!(
            args![name, 1 + 1, null, { "ok": true }, [1, 2]],
            vec![json!("alice"), json!(2), Value::Null, json!({ "ok": true }), json!([1, 2])]
        );
        assert!(args![].is_empty());
    }

    #[test]
    fn args_accepts_trailing_comma() {
        assert_eq!(args!["a", "b",], vec![json!("a"), json!("b")]);
    }

    const CHILD_ENV: &str = "CLOUDWATCH_LOGGING_FREE_FN_CHILD";

    #[test]
    fn free_functions_write_to_process_channels() {
        if std::env::var_os(CHILD_ENV).is_some() {
            // Two identical calls: each builds its own logger, nothing carries over.
            log(args!["foo", "bar"]);
            log(args!["foo", "bar"]);
            debug(args!["foo"]);
            error(&std::io::Error::other("bar"), args!["foo", "baz"]);
            return;
        }

        let output = std::process::Command::new(std::env::current_exe().unwrap())
            .args([
                "--exact",
                "tests::free_functions_write_to_process_channels",
                "--nocapture",
                "--test-threads=1",
            ])
            .env(CHILD_ENV, "1")
            .env(LOG_LEVEL_ENV, "DEBUG")
            .env_remove("RUST_BACKTRACE")
            .env_remove("RUST_LIB_BACKTRACE")
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");

        let stdout = String::from_utf8(output.stdout).unwrap();
        let stderr = String::from_utf8(output.stderr).unwrap();

        let log_line =
            "{\n  \"level\": \"DEFAULT\",\n  \"data\": [\n    \"foo\",\n    \"bar\"\n  ]\n}";
        let debug_line = "{\n  \"level\": \"DEBUG\",\n  \"data\": [\n    \"foo\"\n  ]\n}";
        let error_line =
            "{\n  \"level\": \"ERROR\",\n  \"errorMessage\": \"bar\",\n  \"stack\": \"Error: bar\",\n  \"error\": {\n    \"message\": \"bar\"\n  },\n  \"data\": [\n    \"foo\",\n    \"baz\"\n  ]\n}";

        assert_eq!(stdout.matches(log_line).count(), 2, "{stdout}");
        assert_eq!(stdout.matches(debug_line).count(), 1, "{stdout}");
        assert!(!stdout.contains("\"ERROR\""), "{stdout}");
        assert!(stderr.contains(error_line), "{stderr}");
        assert!(!stderr.contains("\"DEFAULT\""), "{stderr}");
    }
}
