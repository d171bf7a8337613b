//! CLI runner for common setup.
//!
//! Encapsulates config loading and logging initialization so command
//! handlers don't repeat it.

use crate::error::CliError;
use gzsatellite::config::ConfigFile;
use gzsatellite::logging::{init_logging, split_log_path, LoggingGuard};
use tracing::info;

/// Runner that manages CLI lifecycle.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and start logging to the configured log file.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - Debug-level logging, echoed to stdout
    pub fn new(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(log_dir, &log_file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("gzsatellite v{}", gzsatellite::VERSION);
        info!("gzsatellite CLI: {} command", command);
    }
}
