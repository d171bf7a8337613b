//! Configuration for gzsatellite.
//!
//! [`ConfigFile`] is the user's `~/.gzsatellite/config.ini`; [`DownloadConfig`]
//! is the runtime view of the download settings.
//!
//! # Example
//!
//! ```
//! use gzsatellite::config::{ConfigFile, DownloadConfig};
//!
//! let file = ConfigFile::default();
//! let download = DownloadConfig::from_config(&file);
//! assert_eq!(download.parallel_downloads(), 1);
//! ```

mod defaults;
mod download;
mod file;
mod parser;
mod settings;
mod writer;

pub use download::DownloadConfig;
pub use file::{
    config_directory, config_file_path, default_log_file, CacheSettings, ConfigFile,
    ConfigFileError, DownloadSettings, LoggingSettings, TileSettings, DEFAULT_BLOCKS,
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_PARALLEL_DOWNLOADS, DEFAULT_SERVER, DEFAULT_ZOOM,
    MAX_PARALLEL_DOWNLOADS,
};
