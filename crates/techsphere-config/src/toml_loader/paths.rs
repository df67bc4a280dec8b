//! Where the techsphere config lives and how the first-run file is written.

use std::path::{Path, PathBuf};
use techsphere_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const CONFIG_DIR_NAME: &str = "techsphere";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `<platform config dir>/techsphere/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the versioned template to `path`.
///
/// An existing file is left untouched; returns whether a file was written.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        debug!("config already present at {}, not overwriting", path.display());
        return Ok(false);
    }

    let write_err = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_err("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| write_err("write default config to", path, e))?;

    info!("created default techsphere config at {}", path.display());
    Ok(true)
}
