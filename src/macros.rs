//! Call-site logging macros.
//!
//! Each macro formats its arguments like `println!` and forwards to the
//! process-wide default logger, supplying the invocation site's `file!()`
//! and `line!()` so records carry a real call site without the caller
//! passing one. A `target:` first argument routes through a named registry
//! logger instead.
//!
//! # Examples
//!
//! ```
//! use kazlog::{info, warn_once};
//!
//! info!("server listening on port {}", 8080);
//! warn_once!("config file missing, using defaults");
//! info!(target: "net", "connection from {}", "10.0.0.7");
//! ```

/// Log a message at an explicit level, capturing the call site.
///
/// # Examples
///
/// ```
/// use kazlog::{log, LogLevel};
///
/// log!(LogLevel::Info, "simple message");
/// log!(target: "disk", LogLevel::Error, "write failed: {}", 5);
/// ```
#[macro_export]
macro_rules! log {
    (target: $name:expr, $level:expr, $($arg:tt)+) => {
        $crate::get_logger($name).log_at(
            $level,
            ::std::format!($($arg)+),
            ::std::file!(),
            ::std::line!() as i32,
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::root_logger().log_at(
            $level,
            ::std::format!($($arg)+),
            ::std::file!(),
            ::std::line!() as i32,
        )
    };
}

/// Log a debug-level message against the default logger, or a named one
/// with `target:`.
#[macro_export]
macro_rules! debug {
    (target: $name:expr, $($arg:tt)+) => {
        $crate::log!(target: $name, $crate::LogLevel::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message against the default logger, or a named one
/// with `target:`.
#[macro_export]
macro_rules! info {
    (target: $name:expr, $($arg:tt)+) => {
        $crate::log!(target: $name, $crate::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message against the default logger, or a named one
/// with `target:`.
#[macro_export]
macro_rules! warn {
    (target: $name:expr, $($arg:tt)+) => {
        $crate::log!(target: $name, $crate::LogLevel::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a warning at most once for this invocation site.
///
/// The suppression key is the macro invocation's `(file!(), line!())`, so
/// a `warn_once!` inside a loop fires on the first pass only, for the rest
/// of the process run.
///
/// # Examples
///
/// ```
/// use kazlog::warn_once;
///
/// for _ in 0..100 {
///     warn_once!("deprecated codepath hit"); // logged once
/// }
/// ```
#[macro_export]
macro_rules! warn_once {
    (target: $name:expr, $($arg:tt)+) => {
        $crate::get_logger($name).warn_once_at(
            ::std::format!($($arg)+),
            ::std::file!(),
            ::std::line!() as i32,
        )
    };
    ($($arg:tt)+) => {
        $crate::root_logger().warn_once_at(
            ::std::format!($($arg)+),
            ::std::file!(),
            ::std::line!() as i32,
        )
    };
}

/// Log an error-level message against the default logger, or a named one
/// with `target:`.
#[macro_export]
macro_rules! error {
    (target: $name:expr, $($arg:tt)+) => {
        $crate::log!(target: $name, $crate::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}
