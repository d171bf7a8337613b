//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use gzsatellite::config::ConfigFileError;
use gzsatellite::coord::CoordError;
use gzsatellite::loader::LoaderError;
use gzsatellite::provider::ProviderError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Coordinates or zoom outside the projection's domain
    Coordinates(CoordError),
    /// Failed to create the HTTP client
    HttpClient(ProviderError),
    /// Failed to set up the tile loader
    Loader(LoaderError),
    /// Failed to read the tile cache
    Cache(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Coordinates(_) | CliError::Loader(LoaderError::InvalidArgument(_)) = self
        {
            eprintln!();
            eprintln!("Valid ranges:");
            eprintln!("  latitude:  -85.0511 to 85.0511");
            eprintln!("  longitude: -180 to 180");
            eprintln!("  zoom:      0 to 31");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Coordinates(e) => write!(f, "{}", e),
            CliError::HttpClient(e) => write!(f, "{}", e),
            CliError::Loader(e) => write!(f, "{}", e),
            CliError::Cache(msg) => write!(f, "Cache error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Coordinates(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::Loader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coordinates(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::HttpClient(e)
    }
}

impl From<LoaderError> for CliError {
    fn from(e: LoaderError) -> Self {
        CliError::Loader(e)
    }
}
