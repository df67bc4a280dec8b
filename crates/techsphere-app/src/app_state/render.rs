//! Per-slot frames and visuals for the renderer.

use techsphere_layout::{orientation_euler, tile_frames, world_position, TileFrame};

use super::scene::SceneState;
use super::types::TileVisual;

impl SceneState {
    pub fn frames(&self) -> Vec<TileFrame> {
        tile_frames(&self.pool, &self.assignment)
    }

    /// Frames resolved to world space, with textures and background colors.
    pub fn visuals(&self) -> Vec<TileVisual> {
        self.frames()
            .into_iter()
            .map(|frame| {
                let world_position =
                    world_position(&frame, self.view_mode, self.target_radius, self.engine.tile_depth);
                let texture = frame.item.as_ref().and_then(|tech| self.atlas.texture(&tech.id));
                let background = frame
                    .item
                    .as_ref()
                    .map(|tech| tech.background(self.default_background))
                    .unwrap_or(self.default_background);

                TileVisual {
                    world_position,
                    rotation: orientation_euler(frame.orientation),
                    texture,
                    background_color: background.to_hex(),
                    frame,
                }
            })
            .collect()
    }
}
