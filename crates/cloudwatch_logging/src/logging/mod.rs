pub mod level;
pub mod logger;
pub mod record;


pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use record::{Entry, ErrorEntry, LogRecord};
