//! Sphere and flat-wall validation.

use crate::schema::TechsphereConfig;

use super::helpers::{validate_positive, validate_range};

/// Upper bound for either pole exclusion; the lattice band must stay non-empty.
const MAX_POLE_EXCLUSION: f32 = 0.95;

pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &TechsphereConfig) {
    let sphere = &config.sphere;
    validate_range(
        errors,
        "sphere.min_tile_separation",
        sphere.min_tile_separation,
        0.0,
        10.0,
    );
    validate_positive(errors, "sphere.base_radius", sphere.base_radius, 100.0);
    validate_positive(errors, "sphere.max_radius", sphere.max_radius, 100.0);
    if sphere.base_radius > sphere.max_radius {
        errors.push(format!(
            "sphere.base_radius = {} exceeds sphere.max_radius = {}",
            sphere.base_radius, sphere.max_radius
        ));
    }
    validate_range(
        errors,
        "sphere.pole_exclusion_top",
        sphere.pole_exclusion_top,
        0.0,
        MAX_POLE_EXCLUSION,
    );
    validate_range(
        errors,
        "sphere.pole_exclusion_bottom",
        sphere.pole_exclusion_bottom,
        0.0,
        MAX_POLE_EXCLUSION,
    );
    validate_range(
        errors,
        "sphere.oversample_factor",
        sphere.oversample_factor,
        1.0,
        10.0,
    );
}

pub(crate) fn validate_flat_view(errors: &mut Vec<String>, config: &TechsphereConfig) {
    let flat = &config.flat_view;
    validate_positive(errors, "flat_view.wall_spacing", flat.wall_spacing, 10.0);
    validate_range(errors, "flat_view.wall_z", flat.wall_z, -100.0, 100.0);
    validate_range(errors, "flat_view.aspect_bias", flat.aspect_bias, 0.1, 10.0);
}
