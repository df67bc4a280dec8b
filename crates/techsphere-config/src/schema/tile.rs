//! Tile dimension configuration.

use serde::{Deserialize, Serialize};
use techsphere_common::Color;

/// Tile background when neither the catalog nor the config supplies one.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#dee2e6";

/// [`DEFAULT_BACKGROUND_COLOR`] as a parsed color.
pub const DEFAULT_BACKGROUND: Color = Color::from_rgb(0xde, 0xe2, 0xe6);

/// Physical size of a single technology tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// Edge length of the square tile face (valid range: 0.0-10.0, exclusive of 0).
    pub size: f32,
    /// Tile thickness; sphere tiles sit half a depth above the surface (valid range: 0.0-1.0).
    pub depth: f32,
    /// Background used when a technology has no usable `backgroundColor`.
    pub default_background_color: String,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            size: 0.4,
            depth: 0.04,
            default_background_color: DEFAULT_BACKGROUND_COLOR.into(),
        }
    }
}

impl TileConfig {
    /// The configured default background, or [`DEFAULT_BACKGROUND`] if it does not parse.
    pub fn default_background(&self) -> Color {
        Color::from_hex(&self.default_background_color).unwrap_or(DEFAULT_BACKGROUND)
    }
}
