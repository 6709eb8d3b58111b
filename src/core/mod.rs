//! Core logger types and traits

pub mod dedup;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;

pub use dedup::{warned_sites, WarnOnceSet};
pub use error::{LoggerError, Result};
pub use formatter::format_positional;
pub use handler::Handler;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::{render_body, thread_label, LogRecord, UNKNOWN_FILE, UNKNOWN_LINE};
pub use registry::{get_logger, root_logger, LoggerRegistry, ROOT_LOGGER_NAME};
