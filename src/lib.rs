//! # kazlog
//!
//! A minimal logging facility: named loggers emit leveled messages to zero
//! or more pluggable handlers, with positional message formatting and a
//! deduplication mode for warnings tied to a specific call site.
//!
//! ## Features
//!
//! - **Leveled loggers**: a severity threshold gates every call before any
//!   formatting or handler work happens
//! - **Pluggable handlers**: console and file sinks out of the box, any
//!   [`Handler`] implementation beyond that
//! - **Warn-once deduplication**: suppress a warning after its first
//!   emission from a given `(file, line)` call site
//! - **Thread safe**: loggers and handlers are shared freely between
//!   threads; records are tagged with the emitting thread's identity
//!
//! ## Quick start
//!
//! ```
//! use kazlog::prelude::*;
//!
//! let logger = Logger::builder("app")
//!     .level(LogLevel::Info)
//!     .handler(ConsoleHandler::new())
//!     .build();
//!
//! logger.info("started");
//! logger.debug("suppressed by the Info threshold");
//! ```
//!
//! Or skip the instance and use the default logger through the macros:
//!
//! ```
//! use kazlog::{info, warn_once};
//!
//! kazlog::add_handler(std::sync::Arc::new(kazlog::ConsoleHandler::new()));
//! info!("processing {} items", 100);
//! warn_once!("legacy endpoint called"); // once per call site
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        format_positional, Handler, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result,
    };
    pub use crate::core::registry::{get_logger, root_logger};
    pub use crate::handlers::{ConsoleHandler, FileHandler};
}

pub use core::registry::{
    add_handler, debug, debug_at, error, error_at, get_logger, info, info_at, root_logger,
    set_level, warn, warn_at, warn_once, warn_once_at, ROOT_LOGGER_NAME,
};
pub use core::{
    format_positional, render_body, thread_label, warned_sites, Handler, LogLevel, LogRecord,
    Logger, LoggerBuilder, LoggerError, LoggerMetrics, LoggerRegistry, Result, WarnOnceSet,
    UNKNOWN_FILE, UNKNOWN_LINE,
};
pub use handlers::{ConsoleHandler, FileHandler};
