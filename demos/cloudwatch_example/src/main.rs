use cloudwatch_logging::{Level, Logger, LoggerConfig, TracingSink, args, sink};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct Order {
    id: u64,
    items: Vec<&'static str>,
    total_cents: u64,
}

#[derive(Debug)]
struct PaymentError {
    order_id: u64,
    source: std::io::Error,
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payment for order {} failed", self.order_id)
    }
}

impl std::error::Error for PaymentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let order = Order {
        id: 7,
        items: vec!["coffee", "bagel"],
        total_cents: 650,
    };
    let err = PaymentError {
        order_id: order.id,
        source: std::io::Error::new(std::io::ErrorKind::TimedOut, "gateway timed out"),
    };

    // Default sinks, level from LOG_LEVEL: JSON on stdout / stderr.
    let logger = Logger::new();
    tracing::info!(level = %logger.log_level(), "LOG_LEVEL resolved");
    logger.log(args!["order received", order]);
    logger.debug(args!["cart", order.items]);
    logger.error(&err, args!["charging card", { "retry": false }]);

    // Same calls routed through tracing instead of raw JSON lines.
    let traced = Logger::builder()
        .log_sink(TracingSink::new())
        .error_sink(TracingSink::new())
        .debug_sink(TracingSink::new())
        .config(LoggerConfig::new().level(Level::Debug))
        .build();
    traced.log(args!["order received", order]);
    traced.debug(args!["cart", order.items]);
    traced.error(&err, args!["charging card"]);

    // Closure sinks see the record before serialization.
    let counting = Logger::builder()
        .error_sink(sink::from_fn(|record| {
            if let Some(e) = record.as_error() {
                let causes = e.error.sources().len();
                println!("{} ({} cause(s))", e.error_message, causes);
            }
        }))
        .build();
    counting.error(&err, args![]);

    // One-off calls without keeping a logger around.
    cloudwatch_logging::log(args!["shutting down"]);
}
