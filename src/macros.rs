//! Logging macros for ergonomic log message formatting.
//!
//! These macros format like `println!` and `format!`, and also record the
//! calling function and line, which end up in the record prefix:
//!
//! ```text
//! [ INFO][2025-01-08 10:30:45][main:14] Server listening on port 8080
//! ```
//!
//! # Examples
//!
//! ```
//! use rnlog::prelude::*;
//! use rnlog::{info, log};
//!
//! let logger = Logger::new();
//!
//! // Level 0, no prefix
//! log!(logger, "==========");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Fully qualified path of the enclosing function, e.g. `my_app::server::run`.
///
/// Inside closures the path ends in one or more `::{{closure}}` segments;
/// [`CallSite::new`](crate::CallSite::new) strips them along with the module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __rnlog_probe() {}
        fn __rnlog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __rnlog_type_name_of(__rnlog_probe);
        name.strip_suffix("::__rnlog_probe").unwrap_or(name)
    }};
}

/// [`CallSite`](crate::CallSite) for the current function and line
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!(), line!())
    };
}

/// Log a level 0 message: no prefix, output stream.
///
/// # Examples
///
/// ```
/// # use rnlog::prelude::*;
/// # let logger = Logger::new();
/// use rnlog::log;
/// log!(logger, "---- {} ----\n", "startup");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::LogLevel::Log, None, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rnlog::prelude::*;
/// # let logger = Logger::new();
/// use rnlog::debug;
/// debug!(logger, "Counter value: {}\n", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::LogLevel::Debug, Some($crate::call_site!()), format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rnlog::prelude::*;
/// # let logger = Logger::new();
/// use rnlog::info;
/// info!(logger, "Processing {} items\n", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::LogLevel::Info, Some($crate::call_site!()), format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rnlog::prelude::*;
/// # let logger = Logger::new();
/// use rnlog::warn;
/// warn!(logger, "Retry attempt {} of {}\n", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::LogLevel::Warn, Some($crate::call_site!()), format_args!($($arg)+))
    };
}

/// Log an error-level message to the error stream.
///
/// # Examples
///
/// ```
/// # use rnlog::prelude::*;
/// # let logger = Logger::new();
/// use rnlog::error;
/// error!(logger, "Error code: {}, message: {}\n", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::LogLevel::Error, Some($crate::call_site!()), format_args!($($arg)+))
    };
}

/// Log a fatal-level message to the error stream. Does not exit.
///
/// # Examples
///
/// ```
/// # use rnlog::prelude::*;
/// # let logger = Logger::new();
/// use rnlog::fatal;
/// fatal!(logger, "Unable to recover from error: {}\n", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::LogLevel::Fatal, Some($crate::call_site!()), format_args!($($arg)+))
    };
}

/// Close the log file, attributing the closing record to the caller.
#[macro_export]
macro_rules! shutdown {
    ($logger:expr) => {
        $logger.shutdown_at(Some($crate::call_site!()))
    };
}
