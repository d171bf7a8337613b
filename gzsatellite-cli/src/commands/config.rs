//! Configuration management CLI commands.

use clap::Subcommand;
use gzsatellite::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Create the configuration file with defaults if it doesn't exist
    Init,

    /// Show the effective configuration
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
        ConfigCommands::Init => {
            let existed = config_file_path().exists();
            let path = ConfigFile::ensure_exists()?;
            if existed {
                println!("Configuration already exists: {}", path.display());
            } else {
                println!("Created configuration: {}", path.display());
            }
            Ok(())
        }
        ConfigCommands::Show => {
            let config = ConfigFile::load()?;
            println!("[tiles]");
            println!("server = {}", config.tiles.server);
            println!("zoom = {}", config.tiles.zoom);
            println!("blocks = {}", config.tiles.blocks);
            println!("[cache]");
            println!("directory = {}", config.cache.directory.display());
            println!("[download]");
            println!("timeout = {}", config.download.timeout);
            println!("parallel = {}", config.download.parallel);
            println!("[logging]");
            println!("file = {}", config.logging.file.display());
            Ok(())
        }
    }
}
