//! Scene state for the headless host.
//!
//! Owns the loaded catalog, atlas and config, plus the current filter and
//! view mode. Every input change rebuilds the derived layout wholesale.

mod init;
mod recompute;
mod render;
mod scene;
mod types;

#[cfg(test)]
mod tests;

pub use init::AssetPaths;
pub use scene::SceneState;
pub use types::TileVisual;
