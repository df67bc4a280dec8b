//! Shared layout types.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How tiles are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Sphere,
    Flat,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Sphere => f.write_str("sphere"),
            ViewMode::Flat => f.write_str("flat"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(ViewMode::Sphere),
            "flat" | "wall" | "grid" => Ok(ViewMode::Flat),
            other => Err(format!("unknown view mode '{other}'")),
        }
    }
}

/// Placement of one slot.
///
/// In sphere mode `position` is the unit direction from the sphere centre;
/// the renderer scales it by the current radius. In flat mode it is the
/// final wall position and `orientation` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotGeometry {
    pub position: Vec3,
    pub orientation: Quat,
}
