//! Serializable logger configuration

use super::error::Result;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Declarative logger settings, e.g. loaded from an application's config file.
///
/// # Example
///
/// ```
/// use rnlog::LoggerConfig;
///
/// let config = LoggerConfig::from_json(r#"{ "directory": "./log", "file_name": "app.log", "level": 2 }"#)
///     .unwrap();
/// assert_eq!(config.level, 2);
/// assert_eq!(config.file_name.as_deref(), Some("app.log"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory holding the log file; empty means the current directory
    pub directory: PathBuf,

    /// Log file name. `None` keeps the logger console-only.
    pub file_name: Option<String>,

    /// Minimum level emitted, 0 through 5
    pub level: i32,

    pub timestamp_format: TimestampFormat,
}

impl LoggerConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.timestamp_format.validate()
    }

    /// Config that writes into `directory/file_name`
    pub fn with_file(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: Some(file_name.into()),
            ..Self::default()
        }
    }
}
