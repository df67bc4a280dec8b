//! Id to UV lookups over one shared atlas image.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::mapping::{AtlasMapping, UvRect};

/// Host-side handle for the packed atlas image.
///
/// The core never decodes pixels; the renderer resolves `path` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtlasImage {
    pub path: PathBuf,
    pub size: [u32; 2],
}

impl AtlasImage {
    pub fn new(path: impl Into<PathBuf>, size: [u32; 2]) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Image descriptor sized by the mapping's `textureSize`.
    pub fn for_mapping(path: &Path, mapping: &AtlasMapping) -> Self {
        Self::new(path, mapping.texture_size)
    }
}

/// One tile's view into the atlas.
///
/// Cloning copies the UV rectangle and bumps the image refcount. Only the
/// UV rectangle is serialized.
#[derive(Debug, Serialize)]
pub struct AtlasTexture<I = AtlasImage> {
    #[serde(skip)]
    pub image: Arc<I>,
    pub uv: UvRect,
}

impl<I> Clone for AtlasTexture<I> {
    fn clone(&self) -> Self {
        Self {
            image: Arc::clone(&self.image),
            uv: self.uv,
        }
    }
}

/// Immutable id to texture lookup.
#[derive(Debug)]
pub struct AtlasLookup<I = AtlasImage> {
    mapping: AtlasMapping,
    image: Arc<I>,
}

impl<I> AtlasLookup<I> {
    pub fn new(mapping: AtlasMapping, image: Arc<I>) -> Self {
        Self { mapping, image }
    }

    /// UV rectangle for `id`. A miss is expected for items without an icon
    /// and is only logged.
    pub fn lookup(&self, id: &str) -> Option<UvRect> {
        let rect = self.mapping.get(id).copied();
        if rect.is_none() {
            warn!("no atlas mapping found for technology: {id}");
        }
        rect
    }

    pub fn texture(&self, id: &str) -> Option<AtlasTexture<I>> {
        self.lookup(id).map(|uv| AtlasTexture {
            image: Arc::clone(&self.image),
            uv,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.mapping.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn mapping(&self) -> &AtlasMapping {
        &self.mapping
    }

    pub fn image(&self) -> &Arc<I> {
        &self.image
    }
}
