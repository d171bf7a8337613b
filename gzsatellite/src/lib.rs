//! gzsatellite - cached satellite map tiles around a geographic origin
//!
//! Projects a latitude/longitude onto the Web Mercator tile grid, loads the
//! block of tiles around it from a tile server, and keeps every downloaded
//! tile in a persistent disk cache keyed by server and tile index.
//!
//! ```ignore
//! use gzsatellite::loader::{TileLoader, TileRequestContext};
//! use gzsatellite::provider::ReqwestClient;
//!
//! let context = TileRequestContext::new(
//!     "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
//!     40.2462, -111.6476, 18, 2,
//! )?;
//! let mut loader = TileLoader::new(context, &cache_dir, ReqwestClient::new()?)?;
//! let tiles = loader.start();
//! ```

pub mod cache;
pub mod config;
pub mod coord;
pub mod loader;
pub mod logging;
pub mod provider;

/// Version of the gzsatellite library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
