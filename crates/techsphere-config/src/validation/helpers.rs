//! Shared range-validation helpers used by all section validators.

use techsphere_common::Color;

/// Push an error if `value` is outside `[min, max]` or not finite.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: f32, min: f32, max: f32) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `(0, max]` or not finite.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f32, max: f32) {
    if !value.is_finite() || value <= 0.0 || value > max {
        errors.push(format!("{name} = {value} is out of range (0, {max}]"));
    }
}

/// Push an error if `value` is not a hex color.
pub(crate) fn validate_hex_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a hex color"));
    }
}
