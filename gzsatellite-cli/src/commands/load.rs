//! Load command - materialize the tile window around an origin.

use std::path::PathBuf;

use gzsatellite::config::{ConfigFile, DownloadConfig};
use gzsatellite::loader::{TileLoader, TileRequestContext, TileSet};
use gzsatellite::provider::ReqwestClient;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the load command.
pub struct LoadArgs {
    pub lat: f64,
    pub lon: f64,
    pub zoom: Option<u8>,
    pub blocks: Option<u32>,
    pub server: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub parallel: Option<usize>,
}

/// Load settings after merging CLI arguments over the config file.
#[derive(Debug, Clone, PartialEq)]
struct LoadSettings {
    server: String,
    zoom: u8,
    blocks: u32,
    cache_dir: PathBuf,
    download: DownloadConfig,
}

impl LoadArgs {
    fn resolve(&self, config: &ConfigFile) -> LoadSettings {
        let mut download = DownloadConfig::from_config(config);
        if let Some(parallel) = self.parallel {
            download = download.with_parallel_downloads(parallel);
        }

        LoadSettings {
            server: self
                .server
                .clone()
                .unwrap_or_else(|| config.tiles.server.clone()),
            zoom: self.zoom.unwrap_or(config.tiles.zoom),
            blocks: self.blocks.unwrap_or(config.tiles.blocks),
            cache_dir: self
                .cache_dir
                .clone()
                .unwrap_or_else(|| config.cache.directory.clone()),
            download,
        }
    }
}

/// Run the load command.
pub fn run(args: LoadArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(debug)?;
    runner.log_startup("load");
    let settings = args.resolve(runner.config());

    let context = TileRequestContext::new(
        settings.server.as_str(),
        args.lat,
        args.lon,
        settings.zoom,
        settings.blocks,
    )?;
    let client = ReqwestClient::with_timeout(settings.download.timeout_secs())?;
    let mut loader = TileLoader::new(context, &settings.cache_dir, client)?;

    let centre = *loader.centre();
    let window = loader.window();

    println!("Loading tiles for:");
    println!("  Location: {}, {}", args.lat, args.lon);
    println!("  Zoom: {}", settings.zoom);
    println!("  Server: {}", loader.object_uri());
    println!(
        "  Centre tile: x={}, y={} (offset {:.4}, {:.4})",
        centre.x, centre.y, centre.offset_x, centre.offset_y
    );
    println!(
        "  Window: x {}..={}, y {}..={} ({} tiles)",
        window.min_x,
        window.max_x,
        window.min_y,
        window.max_y,
        window.len()
    );
    println!("  Resolution: {:.4} m/px", loader.resolution());
    println!("  Cache: {}", loader.cache().namespace().display());
    println!();

    let start = std::time::Instant::now();
    let tiles = loader.start_parallel(settings.download.parallel_downloads());
    let elapsed = start.elapsed();

    print_tiles(&tiles);
    println!();
    println!(
        "Loaded {} of {} tiles in {:.2}s ({} cached, {} downloaded, {} failed)",
        tiles.len(),
        window.len(),
        elapsed.as_secs_f64(),
        tiles.cache_hits(),
        tiles.downloaded(),
        tiles.failures().len()
    );

    Ok(())
}

fn print_tiles(tiles: &TileSet) {
    for tile in tiles {
        println!(
            "  x={:<8} y={:<8} z={:<3} {}",
            tile.x(),
            tile.y(),
            tile.z(),
            tile.image_path().display()
        );
    }
    for failure in tiles.failures() {
        println!("  ✗ {}", failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> LoadArgs {
        LoadArgs {
            lat: 40.0,
            lon: -111.0,
            zoom: None,
            blocks: None,
            server: None,
            cache_dir: None,
            parallel: None,
        }
    }

    #[test]
    fn test_resolve_uses_config_defaults() {
        let config = ConfigFile::default();
        let settings = args().resolve(&config);

        assert_eq!(settings.server, config.tiles.server);
        assert_eq!(settings.zoom, config.tiles.zoom);
        assert_eq!(settings.blocks, config.tiles.blocks);
        assert_eq!(settings.cache_dir, config.cache.directory);
        assert_eq!(settings.download, DownloadConfig::from_config(&config));
    }

    #[test]
    fn test_resolve_prefers_cli_arguments() {
        let config = ConfigFile::default();
        let settings = LoadArgs {
            zoom: Some(12),
            blocks: Some(0),
            server: Some("http://t.example/{z}/{x}/{y}".to_string()),
            cache_dir: Some(PathBuf::from("/tmp/tiles")),
            parallel: Some(6),
            ..args()
        }
        .resolve(&config);

        assert_eq!(settings.server, "http://t.example/{z}/{x}/{y}");
        assert_eq!(settings.zoom, 12);
        assert_eq!(settings.blocks, 0);
        assert_eq!(settings.cache_dir, PathBuf::from("/tmp/tiles"));
        assert_eq!(settings.download.parallel_downloads(), 6);
        assert_eq!(
            settings.download.timeout_secs(),
            config.download.timeout
        );
    }
}
