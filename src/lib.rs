//! # rnlog
//!
//! A minimal leveled logger. Records go to stdout (levels 0 to 3) or stderr
//! (levels 4 and 5) and, once a file is attached with
//! [`Logger::initialize`], are duplicated byte for byte into an append-only
//! log file.
//!
//! | Level | Name  | Stream | Prefix |
//! |-------|-------|--------|--------|
//! | 0     | Log   | stdout | none   |
//! | 1     | Debug | stdout | yes    |
//! | 2     | Info  | stdout | yes    |
//! | 3     | Warn  | stdout | yes    |
//! | 4     | Error | stderr | yes    |
//! | 5     | Fatal | stderr | yes    |
//!
//! `Fatal` is only a severity; it never ends the process.
//!
//! ```no_run
//! use rnlog::{error, info, Logger};
//!
//! let logger = Logger::new();
//! logger.initialize("./log", "rnlog.log")?;
//! info!(logger, "started\n");
//! error!(logger, "fail: {}\n", 42);
//! logger.shutdown();
//! # Ok::<(), rnlog::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result, Sink, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, SharedBuffer};
}

pub use core::{
    CallSite, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    Sink, TimestampFormat, CLOSING_MESSAGE, UNKNOWN_FUNCTION,
};
pub use sinks::{ConsoleSink, FileSink, SharedBuffer};
