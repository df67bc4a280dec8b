//! Point distribution on the unit sphere and per-tile orientation.

mod distribution;
mod orientation;

pub use distribution::*;
pub use orientation::*;
