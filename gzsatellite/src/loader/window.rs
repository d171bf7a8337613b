//! The square block of tiles loaded around the centre tile.

use super::CentreTile;
use crate::coord::{max_tile_index, TileIndex};

/// Inclusive tile bounds of a load, clamped to the grid at `zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileWindow {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
    pub zoom: u8,
}

impl TileWindow {
    /// Window of `blocks` rings around `centre`.
    ///
    /// Indices below zero or above `2^zoom - 1` are cut off, so windows near
    /// the grid edges are smaller than `(2 * blocks + 1)^2`.
    pub fn around(centre: &CentreTile, blocks: u32, zoom: u8) -> Self {
        let max_index = i64::from(max_tile_index(zoom));
        let blocks = i64::from(blocks);

        let lower = |c: u32| (i64::from(c) - blocks).max(0) as u32;
        let upper = |c: u32| (i64::from(c) + blocks).min(max_index) as u32;

        Self {
            min_x: lower(centre.x),
            max_x: upper(centre.x),
            min_y: lower(centre.y),
            max_y: upper(centre.y),
            zoom,
        }
    }

    pub fn width(&self) -> usize {
        span(self.min_x, self.max_x)
    }

    pub fn height(&self) -> usize {
        span(self.min_y, self.max_y)
    }

    /// Number of tiles in the window.
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, tile: &TileIndex) -> bool {
        tile.zoom == self.zoom
            && (self.min_x..=self.max_x).contains(&tile.x)
            && (self.min_y..=self.max_y).contains(&tile.y)
    }

    /// Tile indices in row-major order: rows top to bottom, columns left to right.
    pub fn indices(&self) -> impl Iterator<Item = TileIndex> + '_ {
        (self.min_y..=self.max_y).flat_map(move |y| {
            (self.min_x..=self.max_x).map(move |x| TileIndex::new(x, y, self.zoom))
        })
    }
}

fn span(min: u32, max: u32) -> usize {
    if max < min {
        0
    } else {
        (max - min) as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre(x: u32, y: u32) -> CentreTile {
        CentreTile {
            x,
            y,
            offset_x: 0.5,
            offset_y: 0.5,
        }
    }

    #[test]
    fn test_window_clamped_at_zoom_2() {
        let window = TileWindow::around(&centre(0, 0), 5, 2);

        assert_eq!((window.min_x, window.max_x), (0, 3));
        assert_eq!((window.min_y, window.max_y), (0, 3));
        assert_eq!(window.len(), 16);
        assert_eq!(window.indices().count(), 16);
    }

    #[test]
    fn test_window_interior() {
        let window = TileWindow::around(&centre(100, 200), 2, 10);

        assert_eq!((window.min_x, window.max_x), (98, 102));
        assert_eq!((window.min_y, window.max_y), (198, 202));
        assert_eq!(window.len(), 25);
    }

    #[test]
    fn test_zero_blocks_is_single_tile() {
        let window = TileWindow::around(&centre(5, 6), 0, 4);
        let tiles: Vec<_> = window.indices().collect();
        assert_eq!(tiles, vec![TileIndex::new(5, 6, 4)]);
    }

    #[test]
    fn test_row_major_order() {
        let window = TileWindow::around(&centre(1, 1), 1, 1);
        let tiles: Vec<_> = window.indices().map(|t| (t.x, t.y)).collect();
        assert_eq!(tiles, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_centre_past_grid_edge_gives_empty_window() {
        // Longitude 180 projects onto x = 2^zoom, one past the last column
        let window = TileWindow::around(&centre(4, 1), 0, 2);
        assert!(window.is_empty());
        assert_eq!(window.indices().count(), 0);
    }

    #[test]
    fn test_huge_radius_at_max_zoom() {
        let window = TileWindow::around(&centre(max_tile_index(31), 0), u32::MAX, 31);
        assert_eq!(window.min_x, 0);
        assert_eq!(window.max_x, max_tile_index(31));
    }

    #[test]
    fn test_contains() {
        let window = TileWindow::around(&centre(10, 10), 1, 5);
        assert!(window.contains(&TileIndex::new(9, 11, 5)));
        assert!(!window.contains(&TileIndex::new(12, 10, 5)));
        assert!(!window.contains(&TileIndex::new(10, 10, 6)));
    }
}
