//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A log file is already attached
    #[error("Logger already writing to '{path}'")]
    AlreadyInitialized { path: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn already_initialized(path: impl Into<String>) -> Self {
        LoggerError::AlreadyInitialized { path: path.into() }
    }

    /// True for errors caused by bad caller input rather than the filesystem
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. }
                | LoggerError::AlreadyInitialized { .. }
                | LoggerError::JsonError(_)
        )
    }

    pub fn is_io(&self) -> bool {
        matches!(self, LoggerError::IoOperation { .. } | LoggerError::IoError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("initialize", "file name is empty");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.is_config());
        assert!(!err.is_io());

        let err = LoggerError::already_initialized("./log/app.log");
        assert!(matches!(err, LoggerError::AlreadyInitialized { .. }));
        assert!(err.is_config());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("initialize", "file name is empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for initialize: file name is empty"
        );

        let err = LoggerError::already_initialized("./log/app.log");
        assert_eq!(err.to_string(), "Logger already writing to './log/app.log'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "/var/log/app.log", io_err);

        assert!(err.is_io());
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("/var/log/app.log"));
        assert!(err.source().is_some());
    }
}
