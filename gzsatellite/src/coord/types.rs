//! Coordinate type definitions

use std::fmt;

/// Web Mercator latitude range accepted by the projection.
///
/// The true Mercator limit is ±85.05112878°; the slightly tighter bound keeps
/// the top and bottom tile rows strictly inside the grid.
pub const MIN_LAT: f64 = -85.0511;
pub const MAX_LAT: f64 = 85.0511;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Highest zoom level whose tile count still fits a 32-bit index.
pub const MAX_ZOOM: u8 = 31;

/// Fractional tile coordinates produced by the slippy-map projection.
///
/// The integer part names the tile, the fractional part is the position
/// inside that tile (0.0 at the west/north edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCoords {
    /// East-west tile coordinate, 0 at the antimeridian
    pub x: f64,
    /// North-south tile coordinate, 0 at the northern edge
    pub y: f64,
    /// Zoom level (0-31)
    pub zoom: u8,
}

impl TileCoords {
    /// Integer tile containing this position.
    #[inline]
    pub fn floor(&self) -> TileIndex {
        TileIndex {
            x: self.x.floor() as u32,
            y: self.y.floor() as u32,
            zoom: self.zoom,
        }
    }

    /// Position inside the containing tile, as fractions of a tile.
    #[inline]
    pub fn fraction(&self) -> (f64, f64) {
        (self.x - self.x.floor(), self.y - self.y.floor())
    }
}

/// Integer index of a single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex {
    /// Column, 0 at the west edge
    pub x: u32,
    /// Row, 0 at the north edge
    pub y: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileIndex {
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) @ z{}", self.x, self.y, self.zoom)
    }
}

/// Errors that can occur during coordinate conversion.
///
/// All variants describe an argument outside the projection's domain.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-85.0511 to 85.0511)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
    /// Zoom level is above 31
    InvalidZoom(u8),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::InvalidZoom(zoom) => {
                write!(f, "Zoom level {} too high (maximum is {})", zoom, MAX_ZOOM)
            }
        }
    }
}

impl std::error::Error for CoordError {}
