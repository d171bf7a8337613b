//! Cache path construction and filename handling.

use crate::coord::TileIndex;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Name of the cache namespace for a tile server URL template.
///
/// The lowercase hex SHA-256 digest of the template string. Stable across
/// runs and platforms, so repeated sessions against the same server reuse
/// the same directory.
///
/// # Example
///
/// ```
/// use gzsatellite::cache::namespace_key;
///
/// let key = namespace_key("https://tile.example/{z}/{x}/{y}.png");
/// assert_eq!(key.len(), 64);
/// assert_eq!(key, namespace_key("https://tile.example/{z}/{x}/{y}.png"));
/// ```
pub fn namespace_key(url_template: &str) -> String {
    let digest = Sha256::digest(url_template.as_bytes());
    format!("{:x}", digest)
}

/// Directory holding every tile fetched through `url_template`.
///
/// ```text
/// <cache_dir>/<sha256 of template>
/// ```
pub fn namespace_directory(cache_dir: &Path, url_template: &str) -> PathBuf {
    cache_dir.join(namespace_key(url_template))
}

/// File name of a cached tile: `x<X>_y<Y>_z<Z>.jpg`.
pub fn tile_file_name(tile: &TileIndex) -> String {
    format!("x{}_y{}_z{}.jpg", tile.x, tile.y, tile.zoom)
}

/// Full path of a cached tile inside a namespace directory.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use gzsatellite::cache::tile_path;
/// use gzsatellite::coord::TileIndex;
///
/// let path = tile_path(&PathBuf::from("/cache/abc"), &TileIndex::new(5, 9, 3));
/// assert_eq!(path, PathBuf::from("/cache/abc/x5_y9_z3.jpg"));
/// ```
pub fn tile_path(namespace: &Path, tile: &TileIndex) -> PathBuf {
    namespace.join(tile_file_name(tile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_namespace_key_known_digest() {
        // sha256("") is a well-known constant
        assert_eq!(
            namespace_key(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_namespace_key_differs_per_template() {
        let a = namespace_key("http://a.example/{z}/{x}/{y}.png");
        let b = namespace_key("http://b.example/{z}/{x}/{y}.png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_namespace_key_is_case_sensitive() {
        // Keyed on the literal template text
        assert_ne!(namespace_key("{X}"), namespace_key("{x}"));
    }

    #[test]
    fn test_namespace_directory() {
        let dir = namespace_directory(Path::new("/cache"), "");
        assert_eq!(
            dir,
            PathBuf::from(
                "/cache/e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            )
        );
    }

    #[test]
    fn test_tile_file_name() {
        assert_eq!(
            tile_file_name(&TileIndex::new(19295, 24640, 16)),
            "x19295_y24640_z16.jpg"
        );
    }

    #[test]
    fn test_tile_paths_are_unique() {
        let ns = PathBuf::from("/cache/ns");
        let mut seen = HashSet::new();
        for zoom in 0..4u8 {
            for y in 0..12u32 {
                for x in 0..12u32 {
                    assert!(seen.insert(tile_path(&ns, &TileIndex::new(x, y, zoom))));
                }
            }
        }
    }

    #[test]
    fn test_ambiguous_digits_do_not_collide() {
        let ns = PathBuf::from("/ns");
        assert_ne!(
            tile_path(&ns, &TileIndex::new(1, 12, 3)),
            tile_path(&ns, &TileIndex::new(11, 2, 3))
        );
    }
}
