//! Cache CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use gzsatellite::cache::namespace_directory;
use gzsatellite::config::ConfigFile;

use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show the cache directory used for a tile server
    Path {
        /// Tile server URL template [default: from config]
        #[arg(long)]
        server: Option<String>,

        /// Base cache directory [default: from config]
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
    /// Show how many tiles are cached for a tile server
    Stats {
        /// Tile server URL template [default: from config]
        #[arg(long)]
        server: Option<String>,

        /// Base cache directory [default: from config]
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
}

/// Run a cache subcommand.
pub fn run(action: CacheAction) -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();

    match action {
        CacheAction::Path { server, cache_dir } => {
            let namespace = resolve_namespace(&config, server, cache_dir);
            println!("{}", namespace.display());
            Ok(())
        }
        CacheAction::Stats { server, cache_dir } => {
            let namespace = resolve_namespace(&config, server, cache_dir);
            println!("Tile cache: {}", namespace.display());

            if !namespace.exists() {
                println!("  (empty - nothing downloaded yet)");
                return Ok(());
            }

            let (files, bytes) = namespace_stats(&namespace)
                .map_err(|e| CliError::Cache(format!("{}: {}", namespace.display(), e)))?;
            println!("  Tiles: {}", files);
            println!("  Size:  {:.2} MB", bytes as f64 / 1_048_576.0);
            Ok(())
        }
    }
}

fn resolve_namespace(
    config: &ConfigFile,
    server: Option<String>,
    cache_dir: Option<PathBuf>,
) -> PathBuf {
    let server = server.unwrap_or_else(|| config.tiles.server.clone());
    let cache_dir = cache_dir.unwrap_or_else(|| config.cache.directory.clone());
    namespace_directory(&cache_dir, &server)
}

/// Count cached tile files and their total size.
fn namespace_stats(namespace: &Path) -> std::io::Result<(usize, u64)> {
    let mut files = 0;
    let mut bytes = 0;
    for entry in fs::read_dir(namespace)? {
        let metadata = entry?.metadata()?;
        if metadata.is_file() {
            files += 1;
            bytes += metadata.len();
        }
    }
    Ok((files, bytes))
}
