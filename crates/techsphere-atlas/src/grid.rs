//! Cell packing convention of the atlas image.
//!
//! Cell `i` sits at `row = i / grid_size`, `col = i % grid_size`, with
//! `padding` pixels around and between cells. Image rows grow downward and
//! UV `v` grows upward, so `v` is flipped.

use serde::{Deserialize, Serialize};

use crate::mapping::UvRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasGrid {
    pub cell_size: u32,
    pub grid_size: u32,
    pub padding: u32,
}

impl Default for AtlasGrid {
    fn default() -> Self {
        Self {
            cell_size: 256,
            grid_size: 10,
            padding: 2,
        }
    }
}

impl AtlasGrid {
    /// Edge length in pixels of the square atlas image, or `None` if it
    /// does not fit in `u32`.
    pub fn texture_size(&self) -> Option<u32> {
        let cells = self.grid_size.checked_mul(self.cell_size)?;
        let gaps = self.grid_size.checked_add(1)?.checked_mul(self.padding)?;
        cells.checked_add(gaps)
    }

    pub fn capacity(&self) -> usize {
        let grid = self.grid_size as usize;
        grid.saturating_mul(grid)
    }

    /// Pixel top-left of cell `index`.
    pub fn cell_origin(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.capacity() {
            return None;
        }
        let grid = self.grid_size as usize;
        let row = u32::try_from(index / grid).ok()?;
        let col = u32::try_from(index % grid).ok()?;
        let stride = self.cell_size.checked_add(self.padding)?;
        let x = col.checked_mul(stride)?.checked_add(self.padding)?;
        let y = row.checked_mul(stride)?.checked_add(self.padding)?;
        Some((x, y))
    }

    /// UV rectangle of cell `index`.
    pub fn cell_uv(&self, index: usize) -> Option<UvRect> {
        let (x, y) = self.cell_origin(index)?;
        let size = self.texture_size()? as f32;
        let cell = self.cell_size as f32;
        Some(UvRect {
            offset: [x as f32 / size, 1.0 - (y as f32 + cell) / size],
            repeat: [cell / size, cell / size],
        })
    }
}
