//! Logging bootstrap for Tessera binaries

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber writing to stderr, filtered by `directive`.
pub fn init(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive).map_err(|e| Error::LogFilter(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| Error::LoggingInitialized)
}
