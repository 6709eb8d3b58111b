//! Log record structure and body rendering

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::cell::RefCell;

/// Sentinel file name used when a call carries no source-location context.
pub const UNKNOWN_FILE: &str = "unknown";

/// Sentinel line number used when a call carries no source-location context.
pub const UNKNOWN_LINE: i32 = -1;

// Thread-local cache for the thread label to avoid recomputing it per record
thread_local! {
    static THREAD_LABEL_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Label identifying the calling thread, resolved once per thread.
///
/// The current thread's name when it has one, otherwise the `ThreadId`
/// debug rendering. The label only distinguishes concurrent callers in
/// interleaved output; it carries no other meaning.
pub fn thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            let current = std::thread::current();
            let label = match current.name() {
                Some(name) => name.to_string(),
                None => format!("{:?}", current.id()),
            };
            *cache = Some(label);
        }
        cache.as_ref().expect("thread label cached above").clone()
    })
}

/// Render the message body of a record: `<thread-id>: <text> (<file>:<line>)`.
///
/// `file` and `line` are caller-supplied hints, passed through verbatim;
/// `line` renders as a plain base-10 integer, including the sentinel `-1`.
pub fn render_body(text: &str, file: &str, line: i32) -> String {
    format!("{}: {} ({}:{})", thread_label(), text, file, line)
}

/// One log record, created per emitting call and handed to every attached
/// handler, then discarded.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Name of the logger that produced the record
    pub logger: String,
    /// Wall-clock time the record was created
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Fully rendered body, already carrying the thread label and call site
    pub message: String,
}

impl LogRecord {
    pub fn new(logger: impl Into<String>, level: LogLevel, message: String) -> Self {
        Self {
            logger: logger.into(),
            timestamp: Utc::now(),
            level,
            message,
        }
    }
}
