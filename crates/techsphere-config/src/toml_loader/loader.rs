//! Core TOML config loading: read from path or platform default.

use crate::schema::{TechsphereConfig, CONFIG_SCHEMA_VERSION};
use crate::validation;
use std::path::Path;
use techsphere_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use super::template::stamped_schema_version;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation problems are only
/// logged here; [`crate::load_config`] is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<TechsphereConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    if let Some(version) = stamped_schema_version(&content) {
        if version != CONFIG_SCHEMA_VERSION {
            warn!(
                "{} was written for schema version {version}, current is {CONFIG_SCHEMA_VERSION}",
                path.display()
            );
        }
    }

    let config: TechsphereConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/techsphere/config.toml`
///
/// If the file does not exist, writes the commented template there and
/// returns defaults.
pub fn load_default() -> Result<TechsphereConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(TechsphereConfig::default());
    }

    load_from_path(&path)
}
