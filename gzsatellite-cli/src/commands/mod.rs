//! CLI command implementations.
//!
//! - [`cache`] - Cache namespace location and statistics
//! - [`config`] - Configuration file management
//! - [`load`] - Load the tile window around an origin
//! - [`tile`] - Tile coordinates of a point

pub mod cache;
pub mod config;
pub mod load;
pub mod tile;
