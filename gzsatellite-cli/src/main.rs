//! gzsatellite CLI - Command-line interface
//!
//! Loads the block of map tiles around a latitude/longitude into the local
//! tile cache and reports where each tile image lives.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::cache::CacheAction;
use commands::config::ConfigCommands;
use commands::load::LoadArgs;

#[derive(Parser)]
#[command(name = "gzsatellite")]
#[command(
    version,
    about = "Cached satellite map tiles around a geographic origin",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the tiles around an origin into the cache
    Load {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Zoom level (0-31) [default: from config]
        #[arg(long)]
        zoom: Option<u8>,

        /// Rings of tiles around the centre tile [default: from config]
        #[arg(long)]
        blocks: Option<u32>,

        /// Tile server URL template with {x}, {y}, {z} placeholders [default: from config]
        #[arg(long)]
        server: Option<String>,

        /// Base cache directory [default: from config]
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Concurrent downloads (1 = sequential) [default: from config]
        #[arg(long)]
        parallel: Option<usize>,

        /// Debug-level logging, echoed to stdout
        #[arg(long)]
        debug: bool,
    },

    /// Show the tile coordinates and ground resolution of a point
    Tile {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Zoom level (0-31)
        #[arg(long)]
        zoom: u8,
    },

    /// Tile cache information
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Load {
            lat,
            lon,
            zoom,
            blocks,
            server,
            cache_dir,
            parallel,
            debug,
        } => commands::load::run(
            LoadArgs {
                lat,
                lon,
                zoom,
                blocks,
                server,
                cache_dir,
                parallel,
            },
            debug,
        ),
        Commands::Tile { lat, lon, zoom } => commands::tile::run(lat, lon, zoom),
        Commands::Cache { action } => commands::cache::run(action),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_load_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "gzsatellite",
            "load",
            "--lat",
            "-33.86",
            "--lon",
            "-151.2",
            "--zoom",
            "17",
            "--parallel",
            "4",
            "--debug",
        ])
        .unwrap();

        match cli.command {
            Commands::Load {
                lat,
                lon,
                zoom,
                blocks,
                parallel,
                debug,
                ..
            } => {
                assert_eq!(lat, -33.86);
                assert_eq!(lon, -151.2);
                assert_eq!(zoom, Some(17));
                assert_eq!(blocks, None);
                assert_eq!(parallel, Some(4));
                assert!(debug);
            }
            _ => panic!("expected load command"),
        }
    }

    #[test]
    fn test_debug_only_accepted_by_load() {
        let load =
            Cli::try_parse_from(["gzsatellite", "load", "--lat", "1", "--lon", "2"]).unwrap();
        assert!(matches!(load.command, Commands::Load { debug: false, .. }));

        for args in [
            &["gzsatellite", "tile", "--lat", "1", "--lon", "2", "--zoom", "3", "--debug"][..],
            &["gzsatellite", "cache", "path", "--debug"][..],
            &["gzsatellite", "config", "path", "--debug"][..],
            &["gzsatellite", "--debug", "load", "--lat", "1", "--lon", "2"][..],
        ] {
            let parsed = Cli::try_parse_from(args.iter().copied());
            assert!(parsed.is_err(), "{:?} should be rejected", args);
        }
    }

    #[test]
    fn test_parse_tile_requires_zoom() {
        assert!(Cli::try_parse_from(["gzsatellite", "tile", "--lat", "1", "--lon", "2"]).is_err());
    }
}
