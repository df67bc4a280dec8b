//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod tile;


use crate::schema::TechsphereConfig;
use techsphere_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TechsphereConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    tile::validate_tile(&mut errors, config);
    layout::validate_sphere(&mut errors, config);
    layout::validate_flat_view(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
