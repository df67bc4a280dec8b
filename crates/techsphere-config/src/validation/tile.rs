//! Tile dimension validation.

use crate::schema::TechsphereConfig;

use super::helpers::{validate_hex_color, validate_positive, validate_range};

pub(crate) fn validate_tile(errors: &mut Vec<String>, config: &TechsphereConfig) {
    validate_positive(errors, "tile.size", config.tile.size, 10.0);
    validate_range(errors, "tile.depth", config.tile.depth, 0.0, 1.0);
    validate_hex_color(
        errors,
        "tile.default_background_color",
        &config.tile.default_background_color,
    );
}
