//! Persistent tile cache.
//!
//! Tiles are stored per tile server, under a directory named after a hash of
//! the server's URL template:
//!
//! ```text
//! <cache_dir>/<sha256 of template>/x<X>_y<Y>_z<Z>.jpg
//! ```
//!
//! The layout is the cache's only durable format and must stay stable so
//! that later sessions find earlier downloads. There is no eviction.

mod disk;
mod path;

pub use disk::DiskCache;
pub use path::{namespace_directory, namespace_key, tile_file_name, tile_path};

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the disk cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The namespace directory could not be created
    #[error("Failed to create cache directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tile could not be written
    #[error("Failed to write cached tile {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Default base directory for the tile cache.
///
/// `<user cache dir>/gzsatellite/mapscache`, or `./gzsatellite/mapscache`
/// when the platform has no cache directory.
pub fn default_cache_base() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gzsatellite")
        .join("mapscache")
}
