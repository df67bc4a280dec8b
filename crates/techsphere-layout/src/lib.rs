//! Tile layout engine.
//!
//! Two geometry sources feed one renderer-facing frame list:
//!
//! - a [`SlotPool`] sized to the whole catalog, a pure function of the
//!   catalog size, the view mode and the config;
//! - an [`Assignment`] sized to the filtered technologies, a pure function
//!   of the filtered order.
//!
//! Keeping them apart is what stops unrelated tiles from reshuffling when
//! the category filter changes.

pub mod assignment;
pub mod engine;
pub mod frames;
pub mod grid;
pub mod radius;
pub mod sphere;
pub mod types;

pub use assignment::{Assignment, SlotPool, StableAssignmentMapper};
pub use engine::LayoutEngine;
pub use frames::{tile_frames, world_position, TileFrame};
pub use grid::FlatGridLayout;
pub use radius::{estimate_radius, RadiusEstimator};
pub use sphere::{distribute, orientation_euler, tile_orientation, SphereDistributor};
pub use types::{SlotGeometry, ViewMode};
