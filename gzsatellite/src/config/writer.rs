//! Serialization of `ConfigFile` to INI text.

use super::settings::ConfigFile;

/// Render a `ConfigFile` as a commented INI document.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"; gzsatellite configuration

[tiles]
; Tile server URL template. {{x}}, {{y}} and {{z}} are replaced per tile.
server = {server}
; Zoom level (0-31)
zoom = {zoom}
; Rings of tiles to load around the centre tile
blocks = {blocks}

[cache]
; Base directory for cached tiles. Each server gets its own subdirectory.
directory = {directory}

[download]
; HTTP timeout in seconds
timeout = {timeout}
; Concurrent downloads per load (1 = sequential)
parallel = {parallel}

[logging]
file = {log_file}
"#,
        server = config.tiles.server,
        zoom = config.tiles.zoom,
        blocks = config.tiles.blocks,
        directory = config.cache.directory.display(),
        timeout = config.download.timeout,
        parallel = config.download.parallel,
        log_file = config.logging.file.display(),
    )
}
