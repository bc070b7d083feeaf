use crate::logging::Level;

/// Environment variable holding the minimum level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Settings fixed for the lifetime of a [`Logger`](crate::Logger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggerConfig {
    /// Configured threshold
    pub level: Level,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Reads `LOG_LEVEL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the level through `lookup`. Missing or unrecognized values
    /// fall back to [`Level::Default`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let level = match lookup(LOG_LEVEL_ENV) {
            None => Level::Default,
            Some(raw) => raw.parse::<Level>().unwrap_or_else(|err| {
                tracing::trace!(error = %err, "Falling back to DEFAULT log level");
                Level::Default
            }),
        };
        Self { level }
    }
}
