//! Tile set loading.
//!
//! A [`TileLoader`] owns one session: the origin and zoom from a
//! [`TileRequestContext`], the [`CentreTile`] derived from them, and the disk
//! cache for the session's tile server. Each [`TileLoader::start`] resolves
//! every tile of the [`TileWindow`] around the centre and publishes a fresh
//! [`TileSet`] snapshot.
//!
//! ```text
//!   min_x         max_x
//!     ┌───┬───┬───┐ min_y      blocks = 1
//!     │ 1 │ 2 │ 3 │            scan order shown by number
//!     ├───┼───┼───┤
//!     │ 4 │ C │ 6 │            C = centre tile
//!     ├───┼───┼───┤
//!     │ 7 │ 8 │ 9 │
//!     └───┴───┴───┘ max_y
//! ```

mod tile_loader;
mod types;
mod window;

pub use tile_loader::TileLoader;
pub use types::{CentreTile, FetchFailure, MapTile, TileFailure, TileRequestContext, TileSet};
pub use window::TileWindow;

use crate::cache::CacheError;
use crate::coord::CoordError;
use thiserror::Error;

/// Errors that prevent a loader from being created.
///
/// Once a loader exists its loads always complete; per-tile problems are
/// reported as [`TileFailure`]s inside the [`TileSet`].
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Origin or zoom outside the projection's domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] CoordError),

    /// The cache namespace could not be created
    #[error("Cache initialization failed: {0}")]
    CacheInitialization(#[from] CacheError),
}
