//! Core logger types and traits

pub mod call_site;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use call_site::{CallSite, UNKNOWN_FUNCTION};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, CLOSING_MESSAGE};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::{format_prefix, TimestampFormat};
