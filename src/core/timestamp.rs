//! Timestamp formatting and record prefixes
//!
//! A prefix looks like `[ WARN][2025-01-08 10:30:45][handle:42] `: the level
//! tag right-aligned in five columns, local wall-clock time at second
//! precision, and the call site. There is no trailing newline.

use super::call_site::{CallSite, UNKNOWN_FUNCTION};
use super::error::{LoggerError, Result};
use super::log_level::level_tag;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Default strftime pattern: `2025-01-08 10:30:45`
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used inside the prefix
///
/// # Examples
///
/// ```
/// use rnlog::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `YYYY-MM-DD HH:MM:SS` in local time
    #[default]
    LocalSeconds,

    /// Custom strftime format, still in local time
    Custom(String),
}

impl TimestampFormat {
    fn pattern(&self) -> &str {
        match self {
            TimestampFormat::LocalSeconds => DEFAULT_TIMESTAMP_PATTERN,
            TimestampFormat::Custom(pattern) => pattern,
        }
    }

    /// Reject custom patterns containing specifiers chrono can't render
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(self.pattern()).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "timestamp_format",
                format!("invalid strftime pattern '{}'", self.pattern()),
            ));
        }
        Ok(())
    }

    /// Render `datetime`. A pattern chrono fails to render falls back to
    /// [`DEFAULT_TIMESTAMP_PATTERN`].
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{}", datetime.format(self.pattern())).is_err() {
            rendered.clear();
            // The default pattern only uses valid specifiers
            let _ = write!(rendered, "{}", datetime.format(DEFAULT_TIMESTAMP_PATTERN));
        }
        rendered
    }

    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

/// Build the prefix for a raw level value.
///
/// Levels outside `0..=5` yield an empty string. Level 0 has an empty tag but
/// is otherwise formatted like any other level; the logger simply never asks
/// for a level 0 prefix.
pub fn format_prefix(level: i32, timestamp: &str, call_site: Option<&CallSite>) -> String {
    if !(0..=5).contains(&level) {
        return String::new();
    }
    let tag = level_tag(level);
    match call_site {
        Some(site) => format!("[{:>5}][{}][{}:{}] ", tag, timestamp, site.function(), site.line()),
        None => format!("[{:>5}][{}][{}] ", tag, timestamp, UNKNOWN_FUNCTION),
    }
}
