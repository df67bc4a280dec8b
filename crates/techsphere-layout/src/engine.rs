//! Layout engine: config-bound geometry for either view mode.

use glam::Quat;
use techsphere_config::TechsphereConfig;

use crate::grid::FlatGridLayout;
use crate::radius::RadiusEstimator;
use crate::sphere::{tile_orientation, SphereDistributor};
use crate::types::{SlotGeometry, ViewMode};

/// Immutable bundle of the layout strategies, built once from config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    pub sphere: SphereDistributor,
    pub grid: FlatGridLayout,
    pub radius: RadiusEstimator,
    /// Tile thickness; sphere tiles float half of it above the surface.
    pub tile_depth: f32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from_config(&TechsphereConfig::default())
    }
}

impl LayoutEngine {
    pub fn from_config(config: &TechsphereConfig) -> Self {
        Self {
            sphere: SphereDistributor::from_config(&config.sphere),
            grid: FlatGridLayout::from_config(&config.flat_view),
            radius: RadiusEstimator::from_config(config),
            tile_depth: config.tile.depth,
        }
    }

    /// `count` slot placements for `mode`.
    pub fn geometry(&self, count: usize, mode: ViewMode) -> Vec<SlotGeometry> {
        match mode {
            ViewMode::Sphere => self
                .sphere
                .distribute(count)
                .into_iter()
                .map(|direction| SlotGeometry {
                    position: direction,
                    orientation: tile_orientation(direction),
                })
                .collect(),
            ViewMode::Flat => self
                .grid
                .layout(count)
                .into_iter()
                .map(|position| SlotGeometry {
                    position,
                    orientation: Quat::IDENTITY,
                })
                .collect(),
        }
    }

    /// Target sphere radius for `visible_count` tiles.
    pub fn target_radius(&self, visible_count: usize) -> f32 {
        self.radius.estimate(visible_count)
    }
}
