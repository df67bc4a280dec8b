//! Configuration schema types for Techsphere.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Defaults are the tuned values the bundled catalog was laid out with.

mod assets;
mod layout;
mod system;
mod tile;

pub use assets::*;
pub use layout::*;
pub use system::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechsphereConfig {
    pub tile: TileConfig,
    pub sphere: SphereConfig,
    pub flat_view: FlatViewConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_sphere() {
        let config = TechsphereConfig::default();
        assert!((config.sphere.min_tile_separation - 0.3).abs() < f32::EPSILON);
        assert!((config.sphere.base_radius - 0.3).abs() < f32::EPSILON);
        assert!((config.sphere.max_radius - 3.0).abs() < f32::EPSILON);
        assert!((config.sphere.pole_exclusion_top - 0.3).abs() < f32::EPSILON);
        assert!((config.sphere.pole_exclusion_bottom - 0.3).abs() < f32::EPSILON);
        assert!((config.sphere.oversample_factor - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn default_config_has_correct_flat_view() {
        let config = TechsphereConfig::default();
        assert!((config.flat_view.wall_spacing - 0.5).abs() < f32::EPSILON);
        assert!(config.flat_view.wall_z.abs() < f32::EPSILON);
        assert!((config.flat_view.aspect_bias - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: TechsphereConfig = toml::from_str("").unwrap();
        assert_eq!(config.tile.default_background_color, "#dee2e6");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: TechsphereConfig = toml::from_str(
            r#"
[sphere]
max_radius = 5.0

[flat_view]
wall_z = -1.0
"#,
        )
        .unwrap();
        assert!((config.sphere.max_radius - 5.0).abs() < f32::EPSILON);
        assert!((config.flat_view.wall_z + 1.0).abs() < f32::EPSILON);
        // Defaults preserved
        assert!((config.sphere.base_radius - 0.3).abs() < f32::EPSILON);
        assert!((config.flat_view.wall_spacing - 0.5).abs() < f32::EPSILON);
    }
}
