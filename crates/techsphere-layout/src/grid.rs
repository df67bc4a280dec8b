//! Flat wall layout: a centered grid biased towards wide rows.

use glam::Vec3;
use techsphere_config::FlatViewConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGridLayout {
    /// Distance between neighbouring cells.
    pub spacing: f32,
    /// Depth shared by every position.
    pub wall_z: f32,
    /// Values above 1.0 give more columns than rows.
    pub aspect_bias: f32,
}

impl Default for FlatGridLayout {
    fn default() -> Self {
        Self::from_config(&FlatViewConfig::default())
    }
}

impl FlatGridLayout {
    pub fn from_config(config: &FlatViewConfig) -> Self {
        Self {
            spacing: config.wall_spacing,
            wall_z: config.wall_z,
            aspect_bias: config.aspect_bias,
        }
    }

    /// `ceil(sqrt(count * aspect_bias))`, at least 1 for a non-empty grid.
    pub fn columns(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let cols = (count as f32 * self.aspect_bias).sqrt().ceil() as usize;
        cols.max(1)
    }

    /// Uncentered `(col, row)` of each index, row 0 at the top.
    pub fn grid_coordinates(&self, count: usize) -> Vec<(usize, usize)> {
        let cols = self.columns(count);
        (0..count).map(|i| (i % cols, i / cols)).collect()
    }

    /// Centered wall positions, index 0 at the top-left.
    pub fn layout(&self, count: usize) -> Vec<Vec3> {
        if count == 0 {
            return Vec::new();
        }

        let cols = self.columns(count);
        // A single short row is centered on its own width.
        let used_cols = cols.min(count);
        let rows = count.div_ceil(cols);
        let col_offset = (used_cols as f32 - 1.0) / 2.0;
        let row_offset = (rows as f32 - 1.0) / 2.0;

        self.grid_coordinates(count)
            .into_iter()
            .map(|(col, row)| {
                let x = (col as f32 - col_offset) * self.spacing;
                let y = -(row as f32 - row_offset) * self.spacing;
                Vec3::new(x, y, self.wall_z)
            })
            .collect()
    }
}
