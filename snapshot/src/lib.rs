//! Shared set-up of the snapshot programs.

use std::io::Stdout;

use emlog::{transport::Native, Logger, TransportConfig};

/// A logger on stdout, ready to write.
pub fn stdout_logger() -> Logger<Native<Stdout>> {
    let logger = Logger::new(Native::stdout());
    if let Err(e) = logger.init(&TransportConfig::new(115_200)) {
        eprintln!("init failed: {}", e);
        std::process::exit(1);
    }
    logger
}
