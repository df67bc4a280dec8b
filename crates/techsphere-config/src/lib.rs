//! Techsphere configuration system.
//!
//! Tile, sphere, flat-wall and asset settings live in one immutable
//! [`TechsphereConfig`] that is loaded once and passed by reference into
//! the layout functions. Every section uses serde defaults so partial TOML
//! files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use techsphere_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AssetsConfig, FlatViewConfig, LogLevel, LoggingConfig, SphereConfig, TechsphereConfig,
    TileConfig, CONFIG_SCHEMA_VERSION, DEFAULT_BACKGROUND, DEFAULT_BACKGROUND_COLOR,
};

use std::path::Path;

use techsphere_common::ConfigError;

/// Load config from `path` if given, otherwise from the platform default
/// location, and validate it strictly.
pub fn load_config(path: Option<&Path>) -> Result<TechsphereConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TechsphereConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
