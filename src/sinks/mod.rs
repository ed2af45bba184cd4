//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod tee;

pub use console::ConsoleSink;
pub use file::{FileSink, DEFAULT_DIRECTORY};
pub use memory::SharedBuffer;
pub use tee::Tee;

pub use crate::core::Sink;
