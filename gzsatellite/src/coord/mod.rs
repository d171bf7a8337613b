//! Coordinate conversion module
//!
//! Converts geographic coordinates (latitude/longitude) to fractional
//! Web Mercator tile coordinates, and computes the ground resolution of a
//! tile pixel.
//!
//! See <http://wiki.openstreetmap.org/wiki/Slippy_map_tilenames> for the
//! formulas.

mod types;

pub use types::{
    CoordError, TileCoords, TileIndex, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON,
};

use std::f64::consts::PI;

/// Equatorial ground resolution at zoom 0 for 256 pixel tiles, in metres/pixel.
pub const EQUATOR_RESOLUTION_Z0: f64 = 156543.034;

/// Number of tiles along one axis at `zoom`.
#[inline]
fn tiles_per_axis(zoom: u8) -> f64 {
    2f64.powi(i32::from(zoom))
}

/// Converts geographic coordinates to fractional tile coordinates.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-85.0511 to 85.0511)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (0 to 31)
///
/// # Errors
///
/// Returns a [`CoordError`] when any argument is outside the projection's
/// domain. Zoom is checked first, then latitude, then longitude.
///
/// # Example
///
/// ```
/// use gzsatellite::coord::lat_lon_to_tile_coords;
///
/// let coords = lat_lon_to_tile_coords(0.0, 0.0, 0).unwrap();
/// assert_eq!((coords.x, coords.y), (0.5, 0.5));
/// ```
pub fn lat_lon_to_tile_coords(lat: f64, lon: f64, zoom: u8) -> Result<TileCoords, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }

    let n = tiles_per_axis(zoom);
    let lat_rad = lat.to_radians();

    let x = n * ((lon + 180.0) / 360.0);
    let y = n * (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

    Ok(TileCoords { x, y, zoom })
}

/// Ground resolution in metres per pixel at `lat` and `zoom`.
///
/// Assumes 256 pixel tiles. Does not validate its arguments; zoom levels
/// past [`MAX_ZOOM`] still give the (tiny) mathematical result.
#[inline]
pub fn zoom_to_resolution(lat: f64, zoom: u8) -> f64 {
    EQUATOR_RESOLUTION_Z0 * lat.to_radians().cos() / tiles_per_axis(zoom)
}

/// Largest valid tile index along either axis at `zoom`.
///
/// Zoom levels above [`MAX_ZOOM`] are treated as [`MAX_ZOOM`].
#[inline]
pub fn max_tile_index(zoom: u8) -> u32 {
    (1u32 << zoom.min(MAX_ZOOM)) - 1
}

/// Converts fractional tile coordinates back to latitude/longitude.
///
/// Integer inputs give the tile's northwest corner.
#[inline]
pub fn tile_to_lat_lon(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let n = tiles_per_axis(zoom);

    let lon = x / n * 360.0 - 180.0;
    let lat_rad = (PI * (1.0 - 2.0 * y / n)).sinh().atan();

    (lat_rad.to_degrees(), lon)
}

/// Latitude/longitude of the centre of a tile.
#[inline]
pub fn tile_centre_lat_lon(tile: &TileIndex) -> (f64, f64) {
    tile_to_lat_lon(tile.x as f64 + 0.5, tile.y as f64 + 0.5, tile.zoom)
}
