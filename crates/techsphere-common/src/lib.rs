pub mod errors;
pub mod types;

pub use errors::{AtlasError, CatalogError, ConfigError, TechsphereError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, TechsphereError>;
