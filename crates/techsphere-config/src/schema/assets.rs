//! Locations of the static data loaded once at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Technology catalog (`{"technologies": [...]}`).
    pub catalog: PathBuf,
    /// UV mapping produced by the offline atlas builder.
    pub atlas_mapping: PathBuf,
    /// The shared atlas image the mapping refers to.
    pub atlas_image: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/techstack.json"),
            atlas_mapping: PathBuf::from("data/techstack-atlas-mapping.json"),
            atlas_image: PathBuf::from("public/techstack-atlas.webp"),
        }
    }
}
