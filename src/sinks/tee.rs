//! Combined console + file fan-out

use super::{console::ConsoleSink, file::FileSink};
use crate::core::{LoggerError, Sink};

/// Duplicates each record into a console sink and, when one is attached,
/// the log file.
///
/// A `Tee` borrows its parts for the duration of one write; the logger builds
/// one per record from whichever console stream the level routes to.
pub struct Tee<'a> {
    console: &'a mut ConsoleSink,
    file: Option<&'a mut FileSink>,
}

impl<'a> Tee<'a> {
    pub fn new(console: &'a mut ConsoleSink, file: Option<&'a mut FileSink>) -> Self {
        Self { console, file }
    }

    /// Write to every part, reporting each failure to `on_error` without
    /// stopping at the first one.
    pub fn write_each<F>(&mut self, record: &str, mut on_error: F) -> usize
    where
        F: FnMut(&dyn Sink, LoggerError),
    {
        let mut failures = 0;
        if let Err(e) = self.console.write_record(record) {
            let console: &dyn Sink = &*self.console;
            on_error(console, e);
            failures += 1;
        }
        if let Some(file) = self.file.as_deref_mut() {
            if let Err(e) = file.write_record(record) {
                let file: &dyn Sink = &*file;
                on_error(file, e);
                failures += 1;
            }
        }
        failures
    }
}
