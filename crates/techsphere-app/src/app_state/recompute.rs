//! Input changes and layout rebuilds.

use techsphere_catalog::Category;
use techsphere_layout::{SlotPool, StableAssignmentMapper, ViewMode};
use tracing::{debug, info};

use super::scene::SceneState;

impl SceneState {
    /// Show only `category`, or everything for `None`.
    pub fn set_filter(&mut self, category: Option<Category>) {
        match category {
            Some(c) => info!("filtering to {} (accent {})", c.label(), c.accent_color().to_hex()),
            None => info!("showing all categories"),
        }
        self.filter = category;
        self.reassign();
    }

    /// Switch arrangement. The slot pool is rebuilt for the new mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.pool = SlotPool::build(&self.engine, self.catalog.len(), mode);
        self.reassign();
    }

    /// Replace the assignment and radius from the current inputs.
    fn reassign(&mut self) {
        let visible = self.catalog.filter(self.filter);
        self.assignment = StableAssignmentMapper::new(&self.engine).assign(&self.pool, &visible);
        self.target_radius = self.engine.target_radius(self.assignment.visible_count());
        debug!(
            "{} of {} tiles visible ({} view, radius {:.3})",
            self.assignment.visible_count(),
            self.pool.len(),
            self.view_mode,
            self.target_radius
        );
    }
}
