//! Console handler implementation

use crate::core::{Handler, LogLevel, LogRecord, Result};
use colored::Colorize;
use std::io::Write;

/// Handler that writes records to the terminal.
///
/// Error records go to stderr, everything else to stdout, so a shell can
/// separate the two streams. Each record is one line, written and flushed
/// before the call returns.
pub struct ConsoleHandler {
    use_colors: bool,
}

impl ConsoleHandler {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ConsoleHandler {
    fn write(&self, record: &LogRecord) -> Result<()> {
        let line = if self.use_colors {
            record
                .message
                .as_str()
                .color(record.level.color_code())
                .to_string()
        } else {
            record.message.clone()
        };

        // Route Error to stderr, others to stdout
        if record.level == LogLevel::Error {
            let stderr = std::io::stderr();
            let mut out = stderr.lock();
            writeln!(out, "{}", line)?;
            out.flush()?;
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", line)?;
            out.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
