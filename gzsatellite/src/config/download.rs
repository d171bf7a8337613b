//! Download configuration.

use super::file::{ConfigFile, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_PARALLEL_DOWNLOADS};

/// Configuration for tile downloading.
///
/// # Example
///
/// ```
/// use gzsatellite::config::DownloadConfig;
///
/// let config = DownloadConfig::default();
/// assert_eq!(config.timeout_secs(), 30);
/// assert_eq!(config.parallel_downloads(), 1);
///
/// let config = DownloadConfig::new()
///     .with_timeout_secs(60)
///     .with_parallel_downloads(8);
/// assert_eq!(config.parallel_downloads(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadConfig {
    /// HTTP request timeout (in seconds)
    timeout_secs: u64,
    /// Maximum number of concurrent downloads; 1 loads sequentially
    parallel_downloads: usize,
}

impl DownloadConfig {
    /// Create a new download configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[download]` section of a config file.
    pub fn from_config(config: &ConfigFile) -> Self {
        Self::new()
            .with_timeout_secs(config.download.timeout)
            .with_parallel_downloads(config.download.parallel)
    }

    /// Set the HTTP timeout in seconds. Default: 30 seconds.
    pub fn with_timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = timeout;
        self
    }

    /// Set the maximum number of parallel downloads. Values below 1 mean 1.
    pub fn with_parallel_downloads(mut self, parallel: usize) -> Self {
        self.parallel_downloads = parallel.max(1);
        self
    }

    /// Get the HTTP timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Get the maximum number of parallel downloads.
    pub fn parallel_downloads(&self) -> usize {
        self.parallel_downloads
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            parallel_downloads: DEFAULT_PARALLEL_DOWNLOADS,
        }
    }
}
