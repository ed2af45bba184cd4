//! Main logger implementation

use super::{
    call_site::CallSite,
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp::{format_prefix, TimestampFormat},
};
use crate::sinks::{ConsoleSink, FileSink, Tee};
use parking_lot::{Mutex, RwLock};
use std::fmt::{self, Write as _};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Message written by [`Logger::shutdown`] before the file is closed
pub const CLOSING_MESSAGE: &str = "Logger closing...";

/// Level 4 and above go to the error stream
fn routes_to_error_stream(level: i32) -> bool {
    LogLevel::from_i32(level).map_or(level > LogLevel::Fatal.as_i32(), |l| l.is_error_stream())
}

/// Console streams plus the optional log file.
///
/// The output and error sinks are not stored separately: each write builds a
/// [`Tee`] over the routed console stream and the file, if any.
struct SinkSet {
    out: ConsoleSink,
    err: ConsoleSink,
    file: Option<FileSink>,
}

impl SinkSet {
    fn combined(&mut self, level: i32) -> Tee<'_> {
        let console = if routes_to_error_stream(level) {
            &mut self.err
        } else {
            &mut self.out
        };
        Tee::new(console, self.file.as_mut())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Leveled logger writing to stdout/stderr and, after [`initialize`](Logger::initialize),
/// to an append-only file as well.
///
/// Levels 0 to 3 go to the output stream, 4 and 5 to the error stream. A
/// record is emitted when the threshold set by [`set_level`](Logger::set_level)
/// is less than or equal to its level. `Logger` is `Send + Sync` and is meant
/// to be shared by reference.
///
/// # Example
///
/// ```no_run
/// use rnlog::{info, Logger};
///
/// let logger = Logger::new();
/// logger.initialize("./log", "app.log")?;
/// info!(logger, "listening on port {}", 8080);
/// logger.shutdown();
/// # Ok::<(), rnlog::LoggerError>(())
/// ```
pub struct Logger {
    min_level: RwLock<i32>,
    sinks: Mutex<SinkSet>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Console-only logger emitting every level
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Build a logger from declarative settings, attaching the file if one is named
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        let logger = Logger::builder()
            .timestamp_format(config.timestamp_format.clone())
            .build();
        if let Some(ref file_name) = config.file_name {
            logger.initialize(&config.directory, file_name)?;
        }
        // initialize resets the threshold, so apply the configured one last
        logger.set_level(config.level);
        Ok(logger)
    }

    /// Attach `directory/file_name` as a second destination for every record.
    ///
    /// An empty `directory` means the current directory. The directory tree is
    /// created if needed and the file is opened in append mode. On success the
    /// threshold is reset to 0.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::InvalidConfiguration`] if `file_name` is empty
    /// - [`LoggerError::IoOperation`] if the directory can't be created or the
    ///   file can't be opened
    /// - [`LoggerError::AlreadyInitialized`] if a file is already attached;
    ///   call [`shutdown`](Logger::shutdown) first to switch files
    pub fn initialize(&self, directory: impl AsRef<Path>, file_name: &str) -> Result<()> {
        {
            let mut sinks = self.sinks.lock();
            if let Some(ref file) = sinks.file {
                return Err(LoggerError::already_initialized(
                    file.path().display().to_string(),
                ));
            }
            sinks.file = Some(FileSink::open(directory, file_name)?);
        }
        self.set_level(0);
        Ok(())
    }

    /// Set the minimum level emitted. Values outside 0..=5 are accepted as-is:
    /// negative values let everything through, values above 5 silence the logger.
    pub fn set_level(&self, level: impl Into<i32>) {
        *self.min_level.write() = level.into();
    }

    pub fn level(&self) -> i32 {
        *self.min_level.read()
    }

    /// Whether a record at `level` would currently be emitted
    #[inline]
    pub fn is_enabled(&self, level: impl Into<i32>) -> bool {
        *self.min_level.read() <= level.into()
    }

    pub fn is_file_attached(&self) -> bool {
        self.sinks.lock().file.is_some()
    }

    /// Path of the attached log file, if any
    pub fn log_path(&self) -> Option<PathBuf> {
        self.sinks
            .lock()
            .file
            .as_ref()
            .map(|file| file.path().to_path_buf())
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Emit a record at a raw level with an optional call site.
    ///
    /// This is what the level methods and macros expand to. Level 0 records
    /// carry no prefix; levels outside 0..=5 are emitted with an empty prefix
    /// if the threshold lets them through.
    pub fn log_at(&self, level: impl Into<i32>, call_site: Option<CallSite>, args: fmt::Arguments<'_>) {
        let level = level.into();
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let record = self.render(level, call_site.as_ref(), args);
        let mut sinks = self.sinks.lock();
        self.write_record(&mut sinks, level, &record);
    }

    #[inline]
    pub fn log(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Log, None, format_args!("{}", message));
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Debug, None, format_args!("{}", message));
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Info, None, format_args!("{}", message));
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Warn, None, format_args!("{}", message));
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Error, None, format_args!("{}", message));
    }

    /// Log at the highest severity. The process keeps running.
    #[inline]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log_at(LogLevel::Fatal, None, format_args!("{}", message));
    }

    pub fn flush(&self) -> Result<()> {
        self.sinks.lock().flush()
    }

    /// Close the log file, if one is attached.
    ///
    /// Writes one Debug record ([`CLOSING_MESSAGE`]) to the output stream and
    /// the file regardless of the threshold, syncs and closes the file, then
    /// falls back to console-only output. Without an attached file this does
    /// nothing, so calling it twice is harmless.
    pub fn shutdown(&self) {
        self.shutdown_at(None);
    }

    /// [`shutdown`](Logger::shutdown) with the closing record attributed to `call_site`
    pub fn shutdown_at(&self, call_site: Option<CallSite>) {
        let mut sinks = self.sinks.lock();
        if sinks.file.is_none() {
            return;
        }

        let level = LogLevel::Debug.as_i32();
        let record = self.render(level, call_site.as_ref(), format_args!("{}\n", CLOSING_MESSAGE));
        self.write_record(&mut sinks, level, &record);

        if let Some(file) = sinks.file.take() {
            let path = file.path().display().to_string();
            if let Err(e) = file.close() {
                eprintln!("[LOGGER ERROR] Failed to close log file '{}': {}", path, e);
            }
        }
    }

    fn render(&self, level: i32, call_site: Option<&CallSite>, args: fmt::Arguments<'_>) -> String {
        let mut record = if level == LogLevel::Log.as_i32() {
            String::new()
        } else {
            format_prefix(level, &self.timestamp_format.now(), call_site)
        };
        // Writing into a String can't fail
        let _ = record.write_fmt(args);
        record
    }

    /// Write one record to the routed console stream and the file.
    ///
    /// Sink failures never reach the caller: they are counted and reported
    /// on stderr, unless stderr is the sink that failed.
    fn write_record(&self, sinks: &mut SinkSet, level: i32, record: &str) {
        let failures = sinks.combined(level).write_each(record, |sink, e| {
            if sink.name() != "stderr" {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
        });
        if failures > 0 {
            self.metrics.record_write_failures(failures as u64);
        }
        self.metrics.record_emitted();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.level())
            .field("log_path", &self.log_path())
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // The file handle closes with the sink; make sure nothing is left in
        // the console writers first.
        if let Err(e) = self.sinks.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during drop: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rnlog::prelude::*;
///
/// let captured = SharedBuffer::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .stdout(captured.clone())
///     .build();
///
/// logger.debug("hidden");
/// logger.info("shown");
/// assert!(captured.contents().ends_with("[UnknownFunction] shown"));
/// ```
pub struct LoggerBuilder {
    min_level: i32,
    stdout: Option<ConsoleSink>,
    stderr: Option<ConsoleSink>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: 0,
            stdout: None,
            stderr: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: impl Into<i32>) -> Self {
        self.min_level = level.into();
        self
    }

    /// Replace the output stream (levels 0 to 3)
    #[must_use = "builder methods return a new value"]
    pub fn stdout(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stdout = Some(ConsoleSink::from_writer("stdout-capture", writer));
        self
    }

    /// Replace the error stream (levels 4 and 5)
    #[must_use = "builder methods return a new value"]
    pub fn stderr(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stderr = Some(ConsoleSink::from_writer("stderr-capture", writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            min_level: RwLock::new(self.min_level),
            sinks: Mutex::new(SinkSet {
                out: self.stdout.unwrap_or_else(ConsoleSink::stdout),
                err: self.stderr.unwrap_or_else(ConsoleSink::stderr),
                file: None,
            }),
            timestamp_format: self.timestamp_format,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
