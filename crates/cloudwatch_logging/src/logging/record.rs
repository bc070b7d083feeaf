use crate::error::ErrorReport;
use crate::logging::Level;
use serde::Serialize;
use serde_json::Value;

/// Payload handed to a sink. Built per call and never stored.
///
/// Serialized without a tag, so the JSON shape is exactly the fields of
/// the variant in declaration order.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LogRecord<'a> {
    Entry(Entry),
    Error(ErrorEntry<'a>),
}

/// `{level, data}` record used for DEFAULT and DEBUG calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub level: Level,
    pub data: Vec<Value>,
}

/// `{level, errorMessage, stack, error, data}` record used for error calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry<'a> {
    pub level: Level,
    pub error_message: String,
    pub stack: String,
    pub error: ErrorReport<'a>,
    pub data: Vec<Value>,
}

impl<'a> LogRecord<'a> {
    pub fn entry(level: Level, data: Vec<Value>) -> Self {
        LogRecord::Entry(Entry { level, data })
    }

    pub fn error(err: &'a (dyn std::error::Error + 'static), data: Vec<Value>) -> Self {
        let report = ErrorReport::new(err);
        LogRecord::Error(ErrorEntry {
            level: Level::Error,
            error_message: report.message(),
            stack: report.stack(),
            error: report,
            data,
        })
    }

    pub fn level(&self) -> Level {
        match self {
            LogRecord::Entry(e) => e.level,
            LogRecord::Error(e) => e.level,
        }
    }

    pub fn data(&self) -> &[Value] {
        match self {
            LogRecord::Entry(e) => &e.data,
            LogRecord::Error(e) => &e.data,
        }
    }

    /// The error part of an error record, `None` for plain entries.
    pub fn as_error(&self) -> Option<&ErrorEntry<'a>> {
        match self {
            LogRecord::Error(e) => Some(e),
            LogRecord::Entry(_) => None,
        }
    }
}
