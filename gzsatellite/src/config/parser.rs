//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MAX_PARALLEL_DOWNLOADS;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::MAX_ZOOM;

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [tiles] section
    if let Some(section) = ini.section(Some("tiles")) {
        if let Some(v) = section.get("server") {
            let v = value(v);
            if v.is_empty() {
                return Err(invalid("tiles", "server", v, "must not be empty"));
            }
            config.tiles.server = v.to_string();
        }
        if let Some(v) = section.get("zoom") {
            let v = value(v);
            let zoom: u8 = v
                .parse()
                .map_err(|_| invalid("tiles", "zoom", v, "must be an integer from 0 to 31"))?;
            if zoom > MAX_ZOOM {
                return Err(invalid("tiles", "zoom", v, "must be an integer from 0 to 31"));
            }
            config.tiles.zoom = zoom;
        }
        if let Some(v) = section.get("blocks") {
            let v = value(v);
            config.tiles.blocks = v
                .parse()
                .map_err(|_| invalid("tiles", "blocks", v, "must be a non-negative integer"))?;
        }
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("directory") {
            let v = value(v);
            if !v.is_empty() {
                config.cache.directory = expand_tilde(v);
            }
        }
    }

    // [download] section
    if let Some(section) = ini.section(Some("download")) {
        if let Some(v) = section.get("timeout") {
            let v = value(v);
            let timeout: u64 = v.parse().map_err(|_| {
                invalid("download", "timeout", v, "must be a positive integer (seconds)")
            })?;
            if timeout == 0 {
                return Err(invalid(
                    "download",
                    "timeout",
                    v,
                    "must be a positive integer (seconds)",
                ));
            }
            config.download.timeout = timeout;
        }
        if let Some(v) = section.get("parallel") {
            let v = value(v);
            let parallel: usize = v
                .parse()
                .map_err(|_| invalid("download", "parallel", v, "must be a positive integer"))?;
            config.download.parallel = clamp_parallel(parallel);
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = value(v);
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Trim a value and drop a trailing `; comment` or `# comment`.
///
/// A comment marker only counts at the start or after whitespace, so `;` and `#` inside URLs
/// are kept.
fn value(raw: &str) -> &str {
    let end = raw
        .char_indices()
        .find(|&(i, c)| {
            (c == ';' || c == '#') && (i == 0 || raw[..i].ends_with(char::is_whitespace))
        })
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].trim()
}

/// Clamps download concurrency to `1..=MAX_PARALLEL_DOWNLOADS`, logging when it does.
fn clamp_parallel(value: usize) -> usize {
    let clamped = value.clamp(1, MAX_PARALLEL_DOWNLOADS);
    if clamped != value {
        tracing::warn!(
            requested = value,
            max = MAX_PARALLEL_DOWNLOADS,
            "download.parallel out of range, clamping to {}",
            clamped
        );
    }
    clamped
}

/// Expand a leading `~` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
