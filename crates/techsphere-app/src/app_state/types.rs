//! Output types of the host.

use glam::Vec3;
use serde::Serialize;
use techsphere_atlas::AtlasTexture;
use techsphere_layout::TileFrame;

/// Everything a renderer needs for one slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileVisual {
    #[serde(flatten)]
    pub frame: TileFrame,
    pub world_position: Vec3,
    /// XYZ Euler angles of `frame.orientation`, in radians.
    pub rotation: Vec3,
    pub texture: Option<AtlasTexture>,
    /// Hex color used when there is no texture, and behind it otherwise.
    pub background_color: String,
}
