//! Logger setup for the command line tool
//!
//! Library code only talks to the `log` facade. The binary installs
//! `env_logger` once at startup; `RUST_LOG` overrides the default level.

use log::LevelFilter;

use crate::guide::errors::{GuideError, GuideResult};

/// Logging entry point for the binary
pub struct Logger;

impl Logger {
    /// Install the global logger
    ///
    /// # Arguments
    ///
    /// * `verbose` - Log at debug level instead of info
    ///
    /// # Returns
    ///
    /// An error if a global logger was already installed
    pub fn init_global_logger(verbose: bool) -> GuideResult<()> {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp_millis()
            .try_init()
            .map_err(|e| GuideError::GenericError(format!("Failed to set up global logger: {}", e)))
    }
}
