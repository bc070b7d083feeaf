/// Line-oriented output used by [`CloudWatchSink`](super::CloudWatchSink).
pub trait Channel: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Process-level output streams.
///
/// Writes go through `println!`/`eprintln!`, so a failed write panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdChannel {
    Stdout,
    Stderr,
    /// Informational output. Shares stdout with [`StdChannel::Stdout`].
    Info,
}

impl Channel for StdChannel {
    fn write_line(&self, line: &str) {
        match self {
            StdChannel::Stdout | StdChannel::Info => println!("{}", line),
            StdChannel::Stderr => eprintln!("{}", line),
        }
    }
}
