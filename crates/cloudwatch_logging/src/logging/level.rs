use crate::error::ParseLevelError;
use serde::Serialize;
use std::str::FromStr;

/// Severity attached to every record and used as the configured threshold.
///
/// Levels are only ever compared for equality; there is no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Error,
    #[default]
    Default,
    Debug,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Default => "DEFAULT",
            Level::Debug => "DEBUG",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Exact, case-sensitive match against `ERROR`, `DEFAULT` and `DEBUG`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(Level::Error),
            "DEFAULT" => Ok(Level::Default),
            "DEBUG" => Ok(Level::Debug),
            other => Err(ParseLevelError::new(other)),
        }
    }
}
