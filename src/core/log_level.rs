//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record. The numeric value is what the threshold compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    /// Plain output: never prefixed
    #[default]
    Log = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Highest severity. Does not terminate the process.
    Fatal = 5,
}

/// Tag table indexed by level value. Index 0 is intentionally empty.
const LEVEL_TAGS: [&str; 6] = ["", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Log,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        LEVEL_TAGS[*self as usize]
    }

    /// Map a raw integer level back to a `LogLevel`, `None` outside 0..=5
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Log),
            1 => Some(LogLevel::Debug),
            2 => Some(LogLevel::Info),
            3 => Some(LogLevel::Warn),
            4 => Some(LogLevel::Error),
            5 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Error and Fatal go to the error stream
    pub fn is_error_stream(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Fatal)
    }

    /// Whether a record at this level passes `threshold`
    #[inline]
    pub fn passes(&self, threshold: i32) -> bool {
        threshold <= self.as_i32()
    }
}

/// Tag for a raw level value, empty for anything outside 0..=5
pub fn level_tag(level: i32) -> &'static str {
    usize::try_from(level)
        .ok()
        .and_then(|idx| LEVEL_TAGS.get(idx).copied())
        .unwrap_or("")
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.as_i32()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Log => write!(f, "LOG"),
            other => write!(f, "{}", other.to_str()),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOG" => Ok(LogLevel::Log),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            other => other
                .parse::<i32>()
                .ok()
                .and_then(LogLevel::from_i32)
                .ok_or_else(|| format!("Invalid log level: '{}'", s)),
        }
    }
}
