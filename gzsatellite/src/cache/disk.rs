//! On-disk tile cache for one tile server.

use super::path::{namespace_directory, tile_path};
use super::CacheError;
use crate::coord::TileIndex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Disk cache bound to a single URL template.
///
/// The namespace directory is created when the cache is opened. The cache
/// only ever adds files; nothing here deletes tiles.
#[derive(Debug, Clone)]
pub struct DiskCache {
    namespace: PathBuf,
}

impl DiskCache {
    /// Open (creating if needed) the namespace for `url_template` under `cache_dir`.
    ///
    /// Idempotent: an existing directory is reused as is.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::CreateDirectory`] if the directory or any of its
    /// parents cannot be created.
    pub fn open(cache_dir: &Path, url_template: &str) -> Result<Self, CacheError> {
        let namespace = namespace_directory(cache_dir, url_template);

        fs::create_dir_all(&namespace).map_err(|source| CacheError::CreateDirectory {
            path: namespace.clone(),
            source,
        })?;

        info!(
            namespace = %namespace.display(),
            template = url_template,
            "Tile cache ready"
        );

        Ok(Self { namespace })
    }

    /// Directory holding this server's tiles.
    pub fn namespace(&self) -> &Path {
        &self.namespace
    }

    /// Path at which `tile` is (or would be) cached.
    pub fn path_for(&self, tile: &TileIndex) -> PathBuf {
        tile_path(&self.namespace, tile)
    }

    /// Whether a regular file exists for `tile`.
    ///
    /// Presence alone marks a tile as cached; contents are not inspected.
    pub fn contains(&self, tile: &TileIndex) -> bool {
        self.path_for(tile).is_file()
    }

    /// Write `data` verbatim as the cached image for `tile`.
    ///
    /// Truncates any existing file. Returns the path written.
    pub fn store(&self, tile: &TileIndex, data: &[u8]) -> Result<PathBuf, CacheError> {
        let path = self.path_for(tile);

        fs::write(&path, data).map_err(|source| CacheError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(tile = %tile, bytes = data.len(), path = %path.display(), "Tile cached");
        Ok(path)
    }
}
