//! SceneState struct definition and constructor.

use techsphere_atlas::AtlasLookup;
use techsphere_catalog::{Catalog, Category};
use techsphere_common::Color;
use techsphere_config::TechsphereConfig;
use techsphere_layout::{Assignment, LayoutEngine, SlotPool, StableAssignmentMapper, ViewMode};

/// Loaded data plus the layout derived from the current inputs.
pub struct SceneState {
    pub(super) config: TechsphereConfig,
    pub(super) engine: LayoutEngine,
    pub(super) catalog: Catalog,
    pub(super) atlas: AtlasLookup,

    // Inputs
    pub(super) filter: Option<Category>,
    pub(super) view_mode: ViewMode,

    // Derived, replaced as a whole on every input change
    pub(super) pool: SlotPool,
    pub(super) assignment: Assignment,
    pub(super) target_radius: f32,

    pub(super) default_background: Color,
}

impl SceneState {
    pub fn new(config: TechsphereConfig, catalog: Catalog, atlas: AtlasLookup) -> Self {
        let engine = LayoutEngine::from_config(&config);
        let view_mode = ViewMode::default();
        let pool = SlotPool::build(&engine, catalog.len(), view_mode);
        let assignment = StableAssignmentMapper::new(&engine).assign(&pool, catalog.technologies());
        let target_radius = engine.target_radius(assignment.visible_count());
        let default_background = config.tile.default_background();

        Self {
            config,
            engine,
            catalog,
            atlas,
            filter: None,
            view_mode,
            pool,
            assignment,
            target_radius,
            default_background,
        }
    }

    pub fn config(&self) -> &TechsphereConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> Option<Category> {
        self.filter
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn pool(&self) -> &SlotPool {
        &self.pool
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Sphere radius for the current visible count.
    pub fn target_radius(&self) -> f32 {
        self.target_radius
    }
}
