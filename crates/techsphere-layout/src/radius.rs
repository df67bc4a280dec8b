//! Sphere radius from the number of visible tiles.

use techsphere_config::TechsphereConfig;

/// Radius at which `visible_count` square footprints of side
/// `item_footprint + min_separation` cover the sphere surface, clamped to
/// `[base_radius, max_radius]`.
///
/// 0 or 1 tiles return `base_radius` directly.
pub fn estimate_radius(
    visible_count: usize,
    item_footprint: f32,
    min_separation: f32,
    base_radius: f32,
    max_radius: f32,
) -> f32 {
    if visible_count <= 1 {
        return base_radius;
    }

    let area_per_item = (item_footprint + min_separation).powi(2);
    let total_area = visible_count as f32 * area_per_item;
    let radius = (total_area / (4.0 * std::f32::consts::PI)).sqrt();

    radius.min(max_radius).max(base_radius)
}

/// [`estimate_radius`] with the footprint and bounds taken from config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusEstimator {
    pub item_footprint: f32,
    pub min_separation: f32,
    pub base_radius: f32,
    pub max_radius: f32,
}

impl RadiusEstimator {
    pub fn from_config(config: &TechsphereConfig) -> Self {
        Self {
            item_footprint: config.tile.size,
            min_separation: config.sphere.min_tile_separation,
            base_radius: config.sphere.base_radius,
            max_radius: config.sphere.max_radius,
        }
    }

    pub fn estimate(&self, visible_count: usize) -> f32 {
        estimate_radius(
            visible_count,
            self.item_footprint,
            self.min_separation,
            self.base_radius,
            self.max_radius,
        )
    }
}
