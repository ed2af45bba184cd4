//! Sink trait for record destinations

use super::error::Result;

/// A destination that accepts fully formatted records.
///
/// Records arrive ready to write, prefix and terminator included, so every
/// sink receiving the same record stores the same bytes.
pub trait Sink: Send {
    fn write_record(&mut self, record: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
