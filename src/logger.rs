//! File logging setup
//!
//! Logging is off by default and opted into through the `[logging]`
//! section of the configuration file. When enabled, records are appended
//! to `droplist.log` in the working directory; the terminal stays clean
//! for the UI.

use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};

/// Initialize the global logger according to the configuration.
///
/// With logging disabled this is a no-op and the `log` macros discard
/// their records.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(LOG_FILE_NAME).with_context(|| format!("Failed to open log file: {LOG_FILE_NAME}"))?)
        .apply()
        .context("Failed to install the global logger")?;

    Ok(())
}
