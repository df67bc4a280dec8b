//! Filtered technologies onto pool slots.

use std::collections::BTreeMap;
use std::sync::Arc;

use glam::{Quat, Vec3};
use techsphere_catalog::Technology;
use tracing::{debug, warn};

use super::slots::SlotPool;
use crate::engine::LayoutEngine;
use crate::types::SlotGeometry;

/// Sparse slot maps. All three cover exactly the same slot indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    pub technology_by_slot: BTreeMap<usize, Arc<Technology>>,
    pub position_by_slot: BTreeMap<usize, Vec3>,
    pub orientation_by_slot: BTreeMap<usize, Quat>,
}

impl Assignment {
    /// Pair `visible[i]` with `geometry[i]` on slot `i` of `pool`.
    ///
    /// Items beyond the pool (or beyond the supplied geometry) are dropped
    /// from the end, keeping catalog order.
    pub fn build(pool: &SlotPool, visible: &[Arc<Technology>], geometry: &[SlotGeometry]) -> Self {
        let capacity = pool.len().min(geometry.len());
        if visible.len() > capacity {
            warn!(
                "{} visible technologies exceed {} slots, dropping {}",
                visible.len(),
                capacity,
                visible.len() - capacity
            );
        }

        let mut assignment = Self::default();
        for (slot, (tech, geometry)) in visible.iter().zip(geometry).take(capacity).enumerate() {
            assignment.technology_by_slot.insert(slot, Arc::clone(tech));
            assignment.position_by_slot.insert(slot, geometry.position);
            assignment.orientation_by_slot.insert(slot, geometry.orientation);
        }
        assignment
    }

    /// Number of populated slots.
    pub fn visible_count(&self) -> usize {
        self.technology_by_slot.len()
    }

    pub fn is_visible(&self, slot: usize) -> bool {
        self.technology_by_slot.contains_key(&slot)
    }

    pub fn technology(&self, slot: usize) -> Option<&Arc<Technology>> {
        self.technology_by_slot.get(&slot)
    }

    /// Slot currently showing the technology with `id`.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.technology_by_slot
            .iter()
            .find(|(_, tech)| tech.id == id)
            .map(|(slot, _)| *slot)
    }
}

/// Builds assignments against a fixed pool using the engine's geometry.
#[derive(Debug, Clone, Copy)]
pub struct StableAssignmentMapper<'a> {
    engine: &'a LayoutEngine,
}

impl<'a> StableAssignmentMapper<'a> {
    pub fn new(engine: &'a LayoutEngine) -> Self {
        Self { engine }
    }

    /// Fresh assignment of `visible` onto `pool`.
    ///
    /// Visible slots get geometry laid out for the visible count, so a
    /// filtered subset is spread over the whole sphere (or packed into a
    /// smaller wall) rather than leaving gaps at the removed tiles.
    pub fn assign(&self, pool: &SlotPool, visible: &[Arc<Technology>]) -> Assignment {
        let shown = visible.len().min(pool.len());
        let geometry = self.engine.geometry(shown, pool.mode());
        debug!(
            "assigning {} of {} technologies to {} {} slots",
            shown,
            visible.len(),
            pool.len(),
            pool.mode()
        );
        Assignment::build(pool, visible, &geometry)
    }
}
