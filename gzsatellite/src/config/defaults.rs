//! Default values for all configuration settings.

use std::path::PathBuf;

use super::settings::*;

/// Tile server used when none is configured (OpenStreetMap standard tiles).
pub const DEFAULT_SERVER: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Default zoom level
pub const DEFAULT_ZOOM: u8 = 18;

/// Default number of tile rings around the centre tile
pub const DEFAULT_BLOCKS: u32 = 2;

/// Default HTTP timeout in seconds
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Default number of concurrent downloads (1 = sequential)
pub const DEFAULT_PARALLEL_DOWNLOADS: usize = 1;

/// Upper bound on concurrent downloads.
pub const MAX_PARALLEL_DOWNLOADS: usize = 64;

/// Get the path to the config directory (~/.gzsatellite).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gzsatellite")
}

/// Get the path to the config file (~/.gzsatellite/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// Default log file (~/.gzsatellite/gzsatellite.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join("gzsatellite.log")
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            tiles: TileSettings {
                server: DEFAULT_SERVER.to_string(),
                zoom: DEFAULT_ZOOM,
                blocks: DEFAULT_BLOCKS,
            },
            cache: CacheSettings {
                directory: crate::cache::default_cache_base(),
            },
            download: DownloadSettings {
                timeout: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
                parallel: DEFAULT_PARALLEL_DOWNLOADS,
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
