//! Sphere and flat-wall layout configuration types.

use serde::{Deserialize, Serialize};

/// Sphere distribution and sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Extra spacing added to each tile's footprint when sizing the sphere.
    pub min_tile_separation: f32,
    /// Radius floor, used for 0 or 1 visible tiles.
    pub base_radius: f32,
    /// Radius ceiling regardless of tile count.
    pub max_radius: f32,
    /// Fraction of the y range excluded around the north pole (valid range: 0.0-0.95).
    pub pole_exclusion_top: f32,
    /// Fraction of the y range excluded around the south pole (valid range: 0.0-0.95).
    pub pole_exclusion_bottom: f32,
    /// Initial lattice size as a multiple of the requested point count.
    pub oversample_factor: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            min_tile_separation: 0.3,
            base_radius: 0.3,
            max_radius: 3.0,
            pole_exclusion_top: 0.3,
            pole_exclusion_bottom: 0.3,
            oversample_factor: 1.5,
        }
    }
}

/// Flat wall (grid) layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatViewConfig {
    /// Distance between neighbouring grid cells.
    pub wall_spacing: f32,
    /// Shared depth coordinate of every wall tile.
    pub wall_z: f32,
    /// Column bias; values above 1.0 make the grid wider than tall.
    pub aspect_bias: f32,
}

impl Default for FlatViewConfig {
    fn default() -> Self {
        Self {
            wall_spacing: 0.5,
            wall_z: 0.0,
            aspect_bias: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_config_partial_toml() {
        let config: SphereConfig = toml::from_str(
            r#"
pole_exclusion_top = 0.1
oversample_factor = 2.0
"#,
        )
        .unwrap();
        assert!((config.pole_exclusion_top - 0.1).abs() < f32::EPSILON);
        assert!((config.oversample_factor - 2.0).abs() < f32::EPSILON);
        assert!((config.pole_exclusion_bottom - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn flat_view_config_partial_toml() {
        let config: FlatViewConfig = toml::from_str("aspect_bias = 1.0").unwrap();
        assert!((config.aspect_bias - 1.0).abs() < f32::EPSILON);
        assert!((config.wall_spacing - 0.5).abs() < f32::EPSILON);
    }
}
