//! Startup loading of the catalog and atlas.

use std::path::PathBuf;
use std::sync::Arc;

use techsphere_atlas::{AtlasImage, AtlasLookup, AtlasMapping};
use techsphere_catalog::Catalog;
use techsphere_common::Result;
use techsphere_config::TechsphereConfig;
use tracing::{info, warn};

use super::scene::SceneState;

// =============================================================================
// ASSET PATHS
// =============================================================================

/// Where the static data lives, after CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub catalog: PathBuf,
    pub atlas_mapping: PathBuf,
    pub atlas_image: PathBuf,
}

impl AssetPaths {
    pub fn from_config(config: &TechsphereConfig) -> Self {
        Self {
            catalog: config.assets.catalog.clone(),
            atlas_mapping: config.assets.atlas_mapping.clone(),
            atlas_image: config.assets.atlas_image.clone(),
        }
    }

    pub fn with_overrides(mut self, catalog: Option<&str>, atlas_mapping: Option<&str>) -> Self {
        if let Some(path) = catalog {
            self.catalog = PathBuf::from(path);
        }
        if let Some(path) = atlas_mapping {
            self.atlas_mapping = PathBuf::from(path);
        }
        self
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl SceneState {
    /// Load catalog and atlas mapping and build the initial layout.
    ///
    /// Any load failure is fatal for the host. A missing atlas image is not:
    /// the renderer falls back to plain background tiles.
    pub fn load(config: TechsphereConfig, paths: &AssetPaths) -> Result<Self> {
        let catalog = Catalog::load_from_path(&paths.catalog)?;
        let mapping = AtlasMapping::load_from_path(&paths.atlas_mapping)?;

        if !paths.atlas_image.exists() {
            warn!("atlas image not found at {}", paths.atlas_image.display());
        }
        let image = Arc::new(AtlasImage::for_mapping(&paths.atlas_image, &mapping));
        let atlas = AtlasLookup::new(mapping, image);

        let unmapped = catalog
            .technologies()
            .iter()
            .filter(|tech| !atlas.contains(&tech.id))
            .count();
        if unmapped > 0 {
            info!("{unmapped} technologies have no atlas texture");
        }

        Ok(Self::new(config, catalog, atlas))
    }
}
