//! Process-wide logger registry and free functions
//!
//! Named loggers are created on demand and owned by the registry for the
//! life of the process. The free functions mirror the [`Logger`] API against
//! a lazily created default logger, so short programs never have to hold a
//! logger instance themselves.

use super::{
    log_level::LogLevel,
    logger::Logger,
    record::{UNKNOWN_FILE, UNKNOWN_LINE},
    Handler,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Name under which the default logger lives in the registry.
pub const ROOT_LOGGER_NAME: &str = "root";

/// Mapping from logger name to the shared logger instance.
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the logger registered under `name`, creating it first if
    /// needed. Created loggers start at threshold [`LogLevel::Debug`] with
    /// no handlers attached.
    pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }
        let mut loggers = self.loggers.write();
        // Another thread may have created it between the two locks.
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name))),
        )
    }

    /// Number of loggers the registry currently owns.
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

fn registry() -> &'static LoggerRegistry {
    REGISTRY.get_or_init(LoggerRegistry::new)
}

/// Look up or create the process-wide logger named `name`.
///
/// The same name always resolves to the same instance for the rest of the
/// process run.
pub fn get_logger(name: &str) -> Arc<Logger> {
    registry().get_or_create(name)
}

/// The default logger the free functions delegate to.
///
/// Created lazily on first use as the registry entry named
/// [`ROOT_LOGGER_NAME`]; `get_logger("root")` observes the same instance.
pub fn root_logger() -> Arc<Logger> {
    registry().get_or_create(ROOT_LOGGER_NAME)
}

pub fn debug(text: impl Into<String>) {
    debug_at(text, UNKNOWN_FILE, UNKNOWN_LINE);
}

pub fn debug_at(text: impl Into<String>, file: &str, line: i32) {
    root_logger().debug_at(text, file, line);
}

pub fn info(text: impl Into<String>) {
    info_at(text, UNKNOWN_FILE, UNKNOWN_LINE);
}

pub fn info_at(text: impl Into<String>, file: &str, line: i32) {
    root_logger().info_at(text, file, line);
}

pub fn warn(text: impl Into<String>) {
    warn_at(text, UNKNOWN_FILE, UNKNOWN_LINE);
}

pub fn warn_at(text: impl Into<String>, file: &str, line: i32) {
    root_logger().warn_at(text, file, line);
}

/// Warn through the default logger at most once per `(file, line)` site.
pub fn warn_once(text: impl Into<String>) {
    warn_once_at(text, UNKNOWN_FILE, UNKNOWN_LINE);
}

pub fn warn_once_at(text: impl Into<String>, file: &str, line: i32) {
    root_logger().warn_once_at(text, file, line);
}

pub fn error(text: impl Into<String>) {
    error_at(text, UNKNOWN_FILE, UNKNOWN_LINE);
}

pub fn error_at(text: impl Into<String>, file: &str, line: i32) {
    root_logger().error_at(text, file, line);
}

/// Overwrite the default logger's threshold.
pub fn set_level(level: LogLevel) {
    root_logger().set_level(level);
}

/// Attach a handler to the default logger.
pub fn add_handler(handler: Arc<dyn Handler>) {
    root_logger().add_handler(handler);
}
