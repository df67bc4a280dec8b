//! The atlas mapping document written by the offline packer.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use techsphere_common::AtlasError;
use tracing::{info, warn};

use crate::grid::AtlasGrid;

/// Slack allowed on the unit-square bound for packer rounding.
const UV_EPSILON: f32 = 1e-6;

/// Sub-rectangle of the atlas in UV space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    #[serde(rename = "uvOffset")]
    pub offset: [f32; 2],
    #[serde(rename = "uvRepeat")]
    pub repeat: [f32; 2],
}

impl UvRect {
    /// Far corner, `offset + repeat`.
    pub fn max(&self) -> [f32; 2] {
        [self.offset[0] + self.repeat[0], self.offset[1] + self.repeat[1]]
    }

    pub fn is_within_unit_square(&self, epsilon: f32) -> bool {
        let max = self.max();
        self.offset.iter().all(|v| *v >= -epsilon) && max.iter().all(|v| *v <= 1.0 + epsilon)
    }

    fn check(&self) -> Result<(), String> {
        if self.offset.iter().chain(&self.repeat).any(|v| !v.is_finite()) {
            return Err("non-finite coordinate".into());
        }
        if self.repeat.iter().any(|v| *v <= 0.0) {
            return Err(format!("uvRepeat {:?} must be positive", self.repeat));
        }
        if !self.is_within_unit_square(UV_EPSILON) {
            return Err(format!(
                "uvOffset {:?} + uvRepeat {:?} leaves the unit square",
                self.offset, self.repeat
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasMapping {
    pub texture_size: [u32; 2],
    pub cell_size: u32,
    pub grid_size: u32,
    pub padding: u32,
    #[serde(default)]
    pub textures: BTreeMap<String, UvRect>,
}

impl AtlasMapping {
    /// Parse and validate a mapping document.
    pub fn from_json_str(json: &str) -> Result<Self, AtlasError> {
        let mapping: AtlasMapping = serde_json::from_str(json)
            .map_err(|e| AtlasError::ParseError(format!("failed to parse atlas JSON: {e}")))?;
        mapping.validate()?;
        Ok(mapping)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, AtlasError> {
        if !path.exists() {
            return Err(AtlasError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            AtlasError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;

        let mapping = Self::from_json_str(&content)?;
        info!(
            "loaded atlas mapping with {} textures from {}",
            mapping.len(),
            path.display()
        );
        Ok(mapping)
    }

    pub fn grid(&self) -> AtlasGrid {
        AtlasGrid {
            cell_size: self.cell_size,
            grid_size: self.grid_size,
            padding: self.padding,
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&UvRect> {
        self.textures.get(id)
    }

    /// Check structural soundness. All problems are reported together.
    pub fn validate(&self) -> Result<(), AtlasError> {
        let mut errors = Vec::new();

        if self.texture_size.contains(&0) {
            errors.push(format!("textureSize {:?} has a zero dimension", self.texture_size));
        }
        if self.grid_size == 0 || self.cell_size == 0 {
            errors.push("gridSize and cellSize must be non-zero".to_string());
        }

        let grid = self.grid();
        if self.textures.len() > grid.capacity() {
            errors.push(format!(
                "{} textures exceed the {}x{} grid capacity of {}",
                self.textures.len(),
                grid.grid_size,
                grid.grid_size,
                grid.capacity()
            ));
        }

        let expected = grid.texture_size();
        if expected.is_none() {
            errors.push(format!(
                "grid too large: {}x{} cells of {}px with {}px padding overflows the image size",
                grid.grid_size, grid.grid_size, grid.cell_size, grid.padding
            ));
        }

        for (id, rect) in &self.textures {
            if let Err(e) = rect.check() {
                errors.push(format!("texture '{id}': {e}"));
            }
        }

        if !errors.is_empty() {
            return Err(AtlasError::InvalidMapping(errors.join("; ")));
        }

        if let Some(expected) = expected.filter(|e| self.texture_size != [*e, *e]) {
            warn!(
                "atlas textureSize {:?} differs from the {expected}px implied by the grid",
                self.texture_size
            );
        }
        Ok(())
    }
}
