//! The technology catalog: items, categories, and category filtering.
//!
//! The catalog is loaded once at startup and never mutated. Filtering
//! returns shared handles in catalog order so downstream assignment is a
//! pure function of the filtered sequence.

pub mod catalog;
pub mod category;
pub mod technology;

pub use catalog::Catalog;
pub use category::Category;
pub use technology::Technology;
