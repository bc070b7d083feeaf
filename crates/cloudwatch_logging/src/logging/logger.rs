use crate::config::LoggerConfig;
use crate::logging::{Level, LogRecord};
use crate::sink::{Channel, CloudWatchSink, Sink, StdChannel};
use serde_json::Value;
use std::error::Error;
use std::sync::Arc;

/// Formats log calls as JSON records and dispatches them to one of three
/// sinks, subject to the configured level:
///
/// - [`Logger::log`] is dropped when the level is `ERROR`.
/// - [`Logger::debug`] is emitted only when the level is exactly `DEBUG`.
/// - [`Logger::error`] is always emitted.
///
/// A logger never changes after construction.
#[derive(Clone)]
pub struct Logger {
    log_sink: Arc<dyn Sink>,
    error_sink: Arc<dyn Sink>,
    debug_sink: Arc<dyn Sink>,
    config: LoggerConfig,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger with the default CloudWatch sinks and the level taken from
    /// `LOG_LEVEL`.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logger with all three sinks supplied and the level taken from
    /// `LOG_LEVEL`.
    pub fn with_sinks<L, E, D>(log: L, error: E, debug: D) -> Self
    where
        L: Sink + 'static,
        E: Sink + 'static,
        D: Sink + 'static,
    {
        Self::builder()
            .log_sink(log)
            .error_sink(error)
            .debug_sink(debug)
            .build()
    }

    pub fn log_level(&self) -> Level {
        self.config.level
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn log<I>(&self, data: I)
    where
        I: IntoIterator<Item = Value>,
    {
        if self.config.level == Level::Error {
            return;
        }
        self.log_sink
            .write(&LogRecord::entry(Level::Default, data.into_iter().collect()));
    }

    pub fn debug<I>(&self, data: I)
    where
        I: IntoIterator<Item = Value>,
    {
        if self.config.level != Level::Debug {
            return;
        }
        self.debug_sink
            .write(&LogRecord::entry(Level::Debug, data.into_iter().collect()));
    }

    pub fn error<I>(&self, err: &(dyn Error + 'static), data: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.error_sink
            .write(&LogRecord::error(err, data.into_iter().collect()));
    }
}

/// Builder for [`Logger`]. Anything left unset gets the default:
/// CloudWatch sinks over stdout, stderr and the info channel, and the
/// level from `LOG_LEVEL`.
#[derive(Default)]
pub struct LoggerBuilder {
    log_sink: Option<Arc<dyn Sink>>,
    error_sink: Option<Arc<dyn Sink>>,
    debug_sink: Option<Arc<dyn Sink>>,
    config: Option<LoggerConfig>,
}

impl LoggerBuilder {
    pub fn log_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.log_sink = Some(Arc::new(sink));
        self
    }

    pub fn error_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.error_sink = Some(Arc::new(sink));
        self
    }

    pub fn debug_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.debug_sink = Some(Arc::new(sink));
        self
    }

    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Shorthand for `config(LoggerConfig::new().level(level))`.
    pub fn level(self, level: Level) -> Self {
        self.config(LoggerConfig::new().level(level))
    }

    pub fn build(self) -> Logger {
        self.build_with(std::convert::identity)
    }

    /// Builds with every missing sink defaulted to a [`CloudWatchSink`]
    /// over `channel(process)`, where `process` is the process channel for
    /// that severity.
    pub(crate) fn build_with<C, F>(self, channel: F) -> Logger
    where
        C: Channel + 'static,
        F: Fn(StdChannel) -> C,
    {
        let default_sink = |process: StdChannel| -> Arc<dyn Sink> {
            Arc::new(CloudWatchSink::new(channel(process)))
        };
        Logger {
            log_sink: self
                .log_sink
                .unwrap_or_else(|| default_sink(StdChannel::Stdout)),
            error_sink: self
                .error_sink
                .unwrap_or_else(|| default_sink(StdChannel::Stderr)),
            debug_sink: self
                .debug_sink
                .unwrap_or_else(|| default_sink(StdChannel::Info)),
            config: self.config.unwrap_or_else(LoggerConfig::from_env),
        }
    }
}
