//! Renderer-facing per-slot frames.

use std::sync::Arc;

use glam::{Quat, Vec3};
use serde::Serialize;
use techsphere_catalog::Technology;

use crate::assignment::{Assignment, SlotPool};
use crate::types::ViewMode;

/// What the renderer draws for one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileFrame {
    pub slot: usize,
    pub position: Vec3,
    pub orientation: Quat,
    pub visible: bool,
    pub item: Option<Arc<Technology>>,
}

/// One frame per pool slot.
///
/// Assigned slots take their assignment geometry; the rest keep the pool
/// geometry and are hidden.
pub fn tile_frames(pool: &SlotPool, assignment: &Assignment) -> Vec<TileFrame> {
    pool.slots()
        .iter()
        .enumerate()
        .map(|(slot, base)| {
            let item = assignment.technology(slot).cloned();
            let position = assignment
                .position_by_slot
                .get(&slot)
                .copied()
                .unwrap_or(base.position);
            let orientation = assignment
                .orientation_by_slot
                .get(&slot)
                .copied()
                .unwrap_or(base.orientation);
            TileFrame {
                slot,
                position,
                orientation,
                visible: item.is_some(),
                item,
            }
        })
        .collect()
}

/// Final tile centre in world space.
pub fn world_position(frame: &TileFrame, mode: ViewMode, radius: f32, tile_depth: f32) -> Vec3 {
    match mode {
        ViewMode::Sphere => frame.position * (radius + tile_depth / 2.0),
        ViewMode::Flat => frame.position,
    }
}
