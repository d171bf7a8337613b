//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Tile server and window settings
    pub tiles: TileSettings,
    /// Cache settings
    pub cache: CacheSettings,
    /// Download settings
    pub download: DownloadSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[tiles]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSettings {
    /// URL template with `{x}`, `{y}`, `{z}` placeholders
    pub server: String,
    /// Zoom level (0-31)
    pub zoom: u8,
    /// Rings of tiles loaded around the centre tile
    pub blocks: u32,
}

/// `[cache]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    /// Base directory; each tile server gets a subdirectory
    pub directory: PathBuf,
}

/// `[download]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSettings {
    /// Timeout in seconds for HTTP requests
    pub timeout: u64,
    /// Concurrent downloads per load
    pub parallel: usize,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
