//! Tile command - show where a point falls on the tile grid.

use gzsatellite::coord::{lat_lon_to_tile_coords, max_tile_index, zoom_to_resolution};

use crate::error::CliError;

/// Run the tile command.
pub fn run(lat: f64, lon: f64, zoom: u8) -> Result<(), CliError> {
    let coords = lat_lon_to_tile_coords(lat, lon, zoom)?;
    let tile = coords.floor();
    let (offset_x, offset_y) = coords.fraction();

    println!("Location: {}, {}", lat, lon);
    println!("Zoom: {} (tiles 0..={} per axis)", zoom, max_tile_index(zoom));
    println!("Tile coordinates: x={:.6}, y={:.6}", coords.x, coords.y);
    println!("Tile: x={}, y={}", tile.x, tile.y);
    println!("Offset in tile: {:.6}, {:.6}", offset_x, offset_y);
    println!("Resolution: {:.4} m/px", zoom_to_resolution(lat, zoom));

    Ok(())
}
