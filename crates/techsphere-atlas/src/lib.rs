//! Texture atlas lookup.
//!
//! All tile icons live in one packed image. An [`AtlasMapping`] produced by
//! the offline packer maps technology ids to UV rectangles inside it, and
//! [`AtlasLookup`] hands out per-tile views that share the single image.

pub mod grid;
pub mod lookup;
pub mod mapping;

pub use grid::AtlasGrid;
pub use lookup::{AtlasImage, AtlasLookup, AtlasTexture};
pub use mapping::{AtlasMapping, UvRect};
