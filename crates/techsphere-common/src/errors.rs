use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("catalog parse error: {0}")]
    ParseError(String),

    #[error("duplicate technology id: {0}")]
    DuplicateId(String),

    #[error("technology at position {0} has an empty id")]
    EmptyId(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("atlas mapping not found: {0}")]
    FileNotFound(PathBuf),

    #[error("atlas mapping parse error: {0}")]
    ParseError(String),

    #[error("invalid atlas mapping: {0}")]
    InvalidMapping(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TechsphereError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Atlas(#[from] AtlasError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("sphere.base_radius = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sphere.base_radius = 0"
        );
    }

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::DuplicateId("rust".into());
        assert_eq!(err.to_string(), "duplicate technology id: rust");

        let err = CatalogError::EmptyId(3);
        assert_eq!(err.to_string(), "technology at position 3 has an empty id");
    }

    #[test]
    fn atlas_error_display() {
        let err = AtlasError::InvalidMapping("grid_size is 0".into());
        assert_eq!(err.to_string(), "invalid atlas mapping: grid_size is 0");
    }

    #[test]
    fn techsphere_error_from_catalog() {
        let err: TechsphereError = CatalogError::ParseError("expected `{`".into()).into();
        assert!(matches!(err, TechsphereError::Catalog(_)));
        assert!(err.to_string().contains("expected `{`"));
    }

    #[test]
    fn techsphere_error_from_atlas() {
        let err: TechsphereError = AtlasError::ParseError("trailing comma".into()).into();
        assert!(matches!(err, TechsphereError::Atlas(_)));
        assert_eq!(err.to_string(), "atlas mapping parse error: trailing comma");
    }

    #[test]
    fn techsphere_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TechsphereError = io_err.into();
        assert!(matches!(err, TechsphereError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
