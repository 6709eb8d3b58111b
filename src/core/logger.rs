//! Main logger implementation

use super::{
    dedup::warned_sites,
    error::Result,
    handler::Handler,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::{render_body, LogRecord, UNKNOWN_FILE, UNKNOWN_LINE},
};
use parking_lot::RwLock;
use std::sync::Arc;

/// A named logger: a severity threshold plus an ordered list of handlers.
///
/// Every operation takes `&self`; loggers are shared between threads behind
/// `Arc` by the registry, and the threshold and handler list are guarded by
/// their own locks. Fan-out happens under the handler-list read guard, so
/// concurrent `add_handler` calls serialize against in-flight dispatches.
pub struct Logger {
    name: String,
    level: RwLock<LogLevel>,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with threshold [`LogLevel::Debug`] and no handlers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(LogLevel::Debug),
            handlers: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Overwrite the threshold for all subsequent calls.
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Append a handler to the fan-out list.
    ///
    /// Attachment order is delivery order. Attaching the same handler twice
    /// is not detected; it then receives every record twice.
    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        self.handlers.write().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Gate, render, and fan out one message.
    ///
    /// The severity gate runs before any rendering or handler work, so a
    /// call below the threshold costs one lock read and nothing else.
    /// `file` and `line` are caller-supplied source-location hints; pass
    /// [`UNKNOWN_FILE`] and [`UNKNOWN_LINE`] when there are none.
    pub fn log_at(&self, level: LogLevel, text: impl Into<String>, file: &str, line: i32) {
        if !self.level.read().enables(level) {
            return;
        }
        let body = render_body(&text.into(), file, line);
        let record = LogRecord::new(self.name.as_str(), level, body);
        self.dispatch(&record);
    }

    /// [`log_at`](Self::log_at) without source-location context.
    pub fn log(&self, level: LogLevel, text: impl Into<String>) {
        self.log_at(level, text, UNKNOWN_FILE, UNKNOWN_LINE);
    }

    #[inline]
    pub fn debug(&self, text: impl Into<String>) {
        self.log(LogLevel::Debug, text);
    }

    #[inline]
    pub fn debug_at(&self, text: impl Into<String>, file: &str, line: i32) {
        self.log_at(LogLevel::Debug, text, file, line);
    }

    #[inline]
    pub fn info(&self, text: impl Into<String>) {
        self.log(LogLevel::Info, text);
    }

    #[inline]
    pub fn info_at(&self, text: impl Into<String>, file: &str, line: i32) {
        self.log_at(LogLevel::Info, text, file, line);
    }

    #[inline]
    pub fn warn(&self, text: impl Into<String>) {
        self.log(LogLevel::Warn, text);
    }

    #[inline]
    pub fn warn_at(&self, text: impl Into<String>, file: &str, line: i32) {
        self.log_at(LogLevel::Warn, text, file, line);
    }

    #[inline]
    pub fn error(&self, text: impl Into<String>) {
        self.log(LogLevel::Error, text);
    }

    #[inline]
    pub fn error_at(&self, text: impl Into<String>, file: &str, line: i32) {
        self.log_at(LogLevel::Error, text, file, line);
    }

    /// Warn at most once per `(file, line)` call site, process-wide.
    ///
    /// With the sentinel [`UNKNOWN_LINE`] there is no call-site key and the
    /// call degrades to plain [`warn_at`](Self::warn_at). Otherwise the site
    /// is recorded in the process-wide set before the severity gate runs,
    /// and every later warn-once call at that exact site is suppressed for
    /// the rest of the process — even calls with different text.
    ///
    /// This path takes a map lock on every call, including already
    /// suppressed ones; keep it out of hot loops.
    pub fn warn_once_at(&self, text: impl Into<String>, file: &str, line: i32) {
        if line == UNKNOWN_LINE {
            self.warn_at(text, file, line);
            return;
        }
        if warned_sites().first_sighting(file, line) {
            self.warn_at(text, file, line);
        }
    }

    /// [`warn_once_at`](Self::warn_once_at) without source-location context;
    /// always degrades to plain [`warn`](Self::warn).
    pub fn warn_once(&self, text: impl Into<String>) {
        self.warn_once_at(text, UNKNOWN_FILE, UNKNOWN_LINE);
    }

    /// Deliver one record to every handler, in attachment order.
    ///
    /// A handler error or panic never escapes to the logging caller; the
    /// record is counted dropped when any handler failed, emitted otherwise.
    fn dispatch(&self, record: &LogRecord) {
        let handlers = self.handlers.read();
        let mut has_error = false;

        for handler in handlers.iter() {
            let write_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler.write(record)
            }));
            if !matches!(write_result, Ok(Ok(()))) {
                has_error = true;
            }
        }

        if has_error {
            self.metrics.record_dropped();
        } else {
            self.metrics.record_emitted();
        }
    }

    /// Counters for records that passed this logger's gate.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush every handler, propagating the first failure.
    pub fn flush(&self) -> Result<()> {
        let handlers = self.handlers.read();
        for handler in handlers.iter() {
            handler.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use kazlog::prelude::*;
///
/// let logger = Logger::builder("net")
///     .level(LogLevel::Warn)
///     .handler(ConsoleHandler::new())
///     .build();
///
/// logger.warn("socket closed early");
/// logger.info("suppressed by the Warn threshold");
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    handlers: Vec<Arc<dyn Handler>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Debug,
            handlers: Vec::new(),
        }
    }

    /// Set the severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Attach a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Attach an already shared handler
    #[must_use = "builder methods return a new value"]
    pub fn handler_arc(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Build the [`Logger`]
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name);
        logger.set_level(self.level);
        for handler in self.handlers {
            logger.add_handler(handler);
        }
        logger
    }
}

impl Logger {
    /// Create a builder for a logger named `name`
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
