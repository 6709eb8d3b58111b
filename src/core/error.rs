//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// File handler could not open its backing file at construction
    #[error("File handler error for '{path}': {source}")]
    FileHandlerError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A supplied argument has no `{index}` placeholder in the template
    #[error("no placeholder {{{index}}} in template '{template}'")]
    MissingPlaceholder { index: usize, template: String },

    /// The template references a placeholder beyond the supplied arguments
    #[error("placeholder {{{index}}} out of range: {supplied} argument(s) supplied")]
    PlaceholderOutOfRange { index: usize, supplied: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a file handler construction error
    pub fn file_handler(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileHandlerError {
            path: path.into(),
            source,
        }
    }

    /// Create a missing-placeholder formatting error
    pub fn missing_placeholder(index: usize, template: impl Into<String>) -> Self {
        LoggerError::MissingPlaceholder {
            index,
            template: template.into(),
        }
    }

    /// Create an out-of-range placeholder formatting error
    pub fn placeholder_out_of_range(index: usize, supplied: usize) -> Self {
        LoggerError::PlaceholderOutOfRange { index, supplied }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::file_handler("/var/log/app.log", io_err);
        assert!(matches!(err, LoggerError::FileHandlerError { .. }));

        let err = LoggerError::missing_placeholder(2, "{0} {1}");
        assert!(matches!(err, LoggerError::MissingPlaceholder { .. }));

        let err = LoggerError::placeholder_out_of_range(3, 1);
        assert!(matches!(err, LoggerError::PlaceholderOutOfRange { .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::file_handler("/nope/app.log", io_err);
        assert_eq!(
            err.to_string(),
            "File handler error for '/nope/app.log': no such directory"
        );

        let err = LoggerError::missing_placeholder(1, "{0} only");
        assert_eq!(err.to_string(), "no placeholder {1} in template '{0} only'");

        let err = LoggerError::placeholder_out_of_range(4, 2);
        assert_eq!(
            err.to_string(),
            "placeholder {4} out of range: 2 argument(s) supplied"
        );
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
