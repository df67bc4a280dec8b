//! The fixed slot pool.

use crate::engine::LayoutEngine;
use crate::types::{SlotGeometry, ViewMode};

/// Geometry for every slot `0..total_slots`, sized to the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPool {
    mode: ViewMode,
    slots: Vec<SlotGeometry>,
}

impl SlotPool {
    pub fn build(engine: &LayoutEngine, total_slots: usize, mode: ViewMode) -> Self {
        Self {
            mode,
            slots: engine.geometry(total_slots, mode),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&SlotGeometry> {
        self.slots.get(slot)
    }

    pub fn slots(&self) -> &[SlotGeometry] {
        &self.slots
    }
}
