mod error_report;

pub use error_report::ErrorReport;

/// Returned when a string does not name one of the three levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    value: String,
}

impl ParseLevelError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized log level {:?}, expected ERROR, DEFAULT or DEBUG",
            self.value
        )
    }
}

impl std::error::Error for ParseLevelError {}
