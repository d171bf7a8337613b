//! Value types produced and consumed by the tile loader.

use crate::coord::{lat_lon_to_tile_coords, CoordError, TileCoords, TileIndex};
use crate::provider::{ProviderError, UrlTemplate};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Immutable description of one tile loading session.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRequestContext {
    server: UrlTemplate,
    latitude: f64,
    longitude: f64,
    zoom: u8,
    blocks: u32,
}

impl TileRequestContext {
    /// Validate and build a session description.
    ///
    /// # Arguments
    ///
    /// * `server` - Tile URL template with `{x}`, `{y}`, `{z}` placeholders
    /// * `latitude` - Origin latitude in degrees
    /// * `longitude` - Origin longitude in degrees
    /// * `zoom` - Zoom level (0 to 31)
    /// * `blocks` - Number of tile rings to load around the centre tile
    ///
    /// # Errors
    ///
    /// Fails if the origin or zoom is outside the projection's domain.
    pub fn new(
        server: impl Into<UrlTemplate>,
        latitude: f64,
        longitude: f64,
        zoom: u8,
        blocks: u32,
    ) -> Result<Self, CoordError> {
        lat_lon_to_tile_coords(latitude, longitude, zoom)?;

        Ok(Self {
            server: server.into(),
            latitude,
            longitude,
            zoom,
            blocks,
        })
    }

    pub fn server(&self) -> &UrlTemplate {
        &self.server
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn blocks(&self) -> u32 {
        self.blocks
    }

    /// Fractional tile coordinates of the origin.
    pub fn origin_coords(&self) -> Result<TileCoords, CoordError> {
        lat_lon_to_tile_coords(self.latitude, self.longitude, self.zoom)
    }
}

/// The tile containing the session origin, and where inside it the origin lies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentreTile {
    /// Column of the centre tile
    pub x: u32,
    /// Row of the centre tile
    pub y: u32,
    /// Fraction of a tile from the west edge to the origin
    pub offset_x: f64,
    /// Fraction of a tile from the north edge to the origin
    pub offset_y: f64,
}

impl CentreTile {
    pub fn from_coords(coords: &TileCoords) -> Self {
        let index = coords.floor();
        let (offset_x, offset_y) = coords.fraction();
        Self {
            x: index.x,
            y: index.y,
            offset_x,
            offset_y,
        }
    }
}

/// A tile whose image is present on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapTile {
    index: TileIndex,
    path: PathBuf,
}

impl MapTile {
    pub fn new(index: TileIndex, path: PathBuf) -> Self {
        Self { index, path }
    }

    /// X tile coordinate.
    pub fn x(&self) -> u32 {
        self.index.x
    }

    /// Y tile coordinate.
    pub fn y(&self) -> u32 {
        self.index.y
    }

    /// Zoom level.
    pub fn z(&self) -> u8 {
        self.index.zoom
    }

    pub fn index(&self) -> TileIndex {
        self.index
    }

    /// Local file holding the tile's image bytes.
    pub fn image_path(&self) -> &Path {
        &self.path
    }
}

/// Why a tile could not be made available.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchFailure {
    /// The server answered with something other than 200
    #[error("server returned status {0}")]
    Status(u16),
    /// No response arrived
    #[error("{0}")]
    Transport(ProviderError),
    /// The image arrived but could not be written to the cache
    #[error("could not persist tile: {0}")]
    Persist(String),
}

/// A tile of the window that is missing from the result set.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed loading {url} for tile {tile}: {reason}")]
pub struct TileFailure {
    pub tile: TileIndex,
    pub url: String,
    pub reason: FetchFailure,
}

/// The tiles resolved by one load.
///
/// Tiles are in row-major window order. Failed tiles are absent, so the set
/// may be sparse. Each snapshot is immutable; a new load produces a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileSet {
    generation: u64,
    tiles: Vec<MapTile>,
    failures: Vec<TileFailure>,
    cache_hits: usize,
    downloaded: usize,
}

impl TileSet {
    /// An empty snapshot.
    pub fn empty(generation: u64) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    pub(crate) fn from_outcomes(generation: u64, outcomes: Vec<TileOutcome>) -> Self {
        let mut set = Self::empty(generation);
        for outcome in outcomes {
            match outcome {
                TileOutcome::Cached(tile) => {
                    set.cache_hits += 1;
                    set.tiles.push(tile);
                }
                TileOutcome::Downloaded(tile) => {
                    set.downloaded += 1;
                    set.tiles.push(tile);
                }
                TileOutcome::Failed(failure) => set.failures.push(failure),
            }
        }
        set
    }

    /// Sequence number of the load that produced this snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tiles(&self) -> &[MapTile] {
        &self.tiles
    }

    pub fn failures(&self) -> &[TileFailure] {
        &self.failures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MapTile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles that were already on disk.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// Tiles fetched from the server during this load.
    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    /// Find the tile at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<&MapTile> {
        self.tiles.iter().find(|t| t.x() == x && t.y() == y)
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a MapTile;
    type IntoIter = std::slice::Iter<'a, MapTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Result of resolving a single window index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TileOutcome {
    Cached(MapTile),
    Downloaded(MapTile),
    Failed(TileFailure),
}
