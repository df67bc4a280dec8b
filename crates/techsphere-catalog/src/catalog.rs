//! Catalog loading and filtering.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use techsphere_common::CatalogError;

use crate::category::Category;
use crate::technology::Technology;

#[derive(Deserialize)]
struct CatalogFile {
    technologies: Vec<Technology>,
}

/// The immutable, ordered set of all technologies.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    technologies: Vec<Arc<Technology>>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids.
    pub fn new(technologies: Vec<Technology>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::with_capacity(technologies.len());
            for (position, tech) in technologies.iter().enumerate() {
                if tech.id.trim().is_empty() {
                    return Err(CatalogError::EmptyId(position));
                }
                if !seen.insert(tech.id.as_str()) {
                    return Err(CatalogError::DuplicateId(tech.id.clone()));
                }
            }
        }

        Ok(Self {
            technologies: technologies.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a `{"technologies": [...]}` document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| CatalogError::ParseError(format!("failed to parse catalog JSON: {e}")))?;
        Self::new(file.technologies)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;

        let catalog = Self::from_json_str(&content)?;
        info!(
            "loaded {} technologies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }

    pub fn technologies(&self) -> &[Arc<Technology>] {
        &self.technologies
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Technology>> {
        self.technologies.iter().find(|t| t.id == id)
    }

    /// Technologies matching `category` (all of them for `None`), in catalog order.
    pub fn filter(&self, category: Option<Category>) -> Vec<Arc<Technology>> {
        match category {
            None => self.technologies.clone(),
            Some(category) => self
                .technologies
                .iter()
                .filter(|t| t.in_category(category))
                .cloned()
                .collect(),
        }
    }
}
