//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::{self, Write};

/// Writes records to a console stream.
///
/// Defaults to the process stdout or stderr; any `Write` can be substituted,
/// which is how tests capture console output.
pub struct ConsoleSink {
    name: String,
    writer: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            name: "stdout".to_string(),
            writer: Box::new(io::stdout()),
        }
    }

    pub fn stderr() -> Self {
        Self {
            name: "stderr".to_string(),
            writer: Box::new(io::stderr()),
        }
    }

    /// Wrap an arbitrary writer
    ///
    /// # Example
    ///
    /// ```
    /// use rnlog::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::from_writer("capture", Vec::new());
    /// ```
    pub fn from_writer(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            writer: Box::new(writer),
        }
    }
}

impl Sink for ConsoleSink {
    fn write_record(&mut self, record: &str) -> Result<()> {
        self.writer.write_all(record.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SharedBuffer;

    #[test]
    fn test_writes_verbatim() {
        let buffer = SharedBuffer::new();
        let mut sink = ConsoleSink::from_writer("capture", buffer.clone());

        sink.write_record("[ INFO][t][main:1] hello\n").unwrap();
        sink.write_record("no newline").unwrap();
        sink.flush().unwrap();

        assert_eq!(buffer.contents(), "[ INFO][t][main:1] hello\nno newline");
        assert_eq!(sink.name(), "capture");
    }

    #[test]
    fn test_std_stream_names() {
        assert_eq!(ConsoleSink::stdout().name(), "stdout");
        assert_eq!(ConsoleSink::stderr().name(), "stderr");
    }
}
