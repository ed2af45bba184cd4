//! Basic usage example
//!
//! Logs one record per level to the console and `./log/rnlog.log`.
//!
//! Run with: cargo run --example basic_usage

use rnlog::prelude::*;
use rnlog::{debug, error, fatal, info, log, shutdown, warn};

fn main() -> Result<()> {
    let logger = Logger::new();
    logger.initialize("./log", "rnlog.log")?;

    log!(logger, "This is Log\n");
    debug!(logger, "This is Debug\n");
    info!(logger, "This is Info\n");
    warn!(logger, "This is Warn\n");
    error!(logger, "This is Error\n");
    fatal!(logger, "This is Fatal\n");
    log!(logger, "rnlog does not end the program on {}\n", LogLevel::Fatal);

    shutdown!(logger);
    Ok(())
}
