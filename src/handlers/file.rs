//! File handler implementation

use crate::core::{Handler, LogRecord, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Handler that appends records to a file.
///
/// The file is opened at construction (created if absent, appended to
/// otherwise) and stays open for the handler's lifetime. A handler may be
/// shared by several loggers, so the writer sits behind a mutex and lines
/// from concurrent threads never interleave. Buffered output is flushed on
/// [`flush`](Handler::flush) and when the handler is dropped.
#[derive(Debug)]
pub struct FileHandler {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileHandler {
    /// Open `path` for appending.
    ///
    /// # Errors
    ///
    /// [`LoggerError::FileHandlerError`] when the file cannot be opened; a
    /// handler with no usable backing store is refused at construction
    /// rather than silently dropping every record later.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::file_handler(path.display().to_string(), source))?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Handler for FileHandler {
    fn write(&self, record: &LogRecord) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(record.message.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileHandler {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn test_writes_one_line_per_record() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.log");
        let handler = FileHandler::new(&path).expect("open log file");

        for i in 0..3 {
            let record = LogRecord::new(
                "test",
                LogLevel::Info,
                format!("message {} (file.rs:{})", i, i),
            );
            handler.write(&record).expect("write record");
        }
        handler.flush().expect("flush");

        let content = std::fs::read_to_string(&path).expect("read log file");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "message 1 (file.rs:1)");
    }

    #[test]
    fn test_appends_across_handlers() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("append.log");

        {
            let handler = FileHandler::new(&path).expect("open log file");
            let record = LogRecord::new("test", LogLevel::Warn, "first".to_string());
            handler.write(&record).expect("write record");
            // Dropped here, flushing the buffer.
        }
        {
            let handler = FileHandler::new(&path).expect("reopen log file");
            let record = LogRecord::new("test", LogLevel::Warn, "second".to_string());
            handler.write(&record).expect("write record");
        }

        let content = std::fs::read_to_string(&path).expect("read log file");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_unopenable_path_fails_at_construction() {
        let err = FileHandler::new("/nonexistent-dir/sub/app.log").unwrap_err();
        assert!(matches!(err, LoggerError::FileHandlerError { .. }));
    }

    #[test]
    fn test_debug_formatting_names_the_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("debug.log");
        let handler = FileHandler::new(&path).expect("open log file");
        let rendered = format!("{:?}", handler);
        assert!(rendered.contains("debug.log"), "rendered as {:?}", rendered);
    }

    #[test]
    fn test_name_and_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("named.log");
        let handler = FileHandler::new(&path).expect("open log file");
        assert_eq!(handler.name(), "file");
        assert_eq!(handler.path(), path.as_path());
    }
}
