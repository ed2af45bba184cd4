//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory used when the caller passes an empty directory
pub const DEFAULT_DIRECTORY: &str = "./";

/// Append-only log file.
///
/// Writes go straight to the file without buffering so an external reader
/// sees every record as soon as the call returns.
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Create `directory` (recursively) and open `directory/file_name` for appending.
    ///
    /// An empty `directory` means the current directory; an empty `file_name`
    /// is a configuration error.
    pub fn open(directory: impl AsRef<Path>, file_name: &str) -> Result<Self> {
        if file_name.is_empty() {
            return Err(LoggerError::config("initialize", "log file name is empty"));
        }

        let directory = directory.as_ref();
        let directory = if directory.as_os_str().is_empty() {
            Path::new(DEFAULT_DIRECTORY)
        } else {
            directory
        };

        create_directory(directory).map_err(|e| {
            LoggerError::io_operation(
                "creating log directory",
                directory.display().to_string(),
                e,
            )
        })?;

        let path = directory.join(file_name);
        let file = open_append(&path).map_err(|e| {
            LoggerError::io_operation("opening log file", path.display().to_string(), e)
        })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and sync to disk, then release the handle
    pub fn close(mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }
}

#[cfg(unix)]
fn create_directory(directory: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    DirBuilder::new().recursive(true).mode(0o777).create(directory)
}

#[cfg(not(unix))]
fn create_directory(directory: &Path) -> std::io::Result<()> {
    DirBuilder::new().recursive(true).create(directory)
}

#[cfg(unix)]
fn open_append(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o666)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Sink for FileSink {
    fn write_record(&mut self, record: &str) -> Result<()> {
        self.file.write_all(record.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink").field("path", &self.path).finish()
    }
}
