//! Tile orientation on the sphere surface.

use glam::{EulerRot, Mat3, Quat, Vec3};

/// Above this `|normal.y|` the `up × normal` tangent degenerates.
const POLE_THRESHOLD: f32 = 0.999;

/// Rotation taking the tile's local +Z onto `normal`.
///
/// Away from the poles the frame is (tangent, bitangent, normal) with
/// `tangent = up × normal`, so the tile's local +Y stays on the meridian
/// instead of spinning with azimuth. Near the poles the shortest arc from
/// +Z is used instead.
pub fn tile_orientation(normal: Vec3) -> Quat {
    let normal = normal.normalize_or_zero();
    if normal == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    if normal.y.abs() > POLE_THRESHOLD {
        return Quat::from_rotation_arc(Vec3::Z, normal);
    }

    let tangent = Vec3::Y.cross(normal).normalize();
    let bitangent = normal.cross(tangent).normalize();
    Quat::from_mat3(&Mat3::from_cols(tangent, bitangent, normal)).normalize()
}

/// Intrinsic XYZ Euler angles (radians) for renderers that take Euler rotations.
pub fn orientation_euler(orientation: Quat) -> Vec3 {
    let (x, y, z) = orientation.to_euler(EulerRot::XYZ);
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::distribute;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn local_z_maps_to_normal() {
        for normal in distribute(60, 0.3, 0.3) {
            let q = tile_orientation(normal);
            assert!(approx(q * Vec3::Z, normal), "normal {normal:?}");
        }
    }

    #[test]
    fn local_up_points_along_meridian() {
        for normal in distribute(60, 0.3, 0.3) {
            let up = tile_orientation(normal) * Vec3::Y;
            // Perpendicular to the normal and tilted towards world up
            assert!(up.dot(normal).abs() < 1e-4);
            assert!(up.y > 0.0, "normal {normal:?} gave up {up:?}");
            // No sideways roll: up lies in the plane of the normal and the y axis
            assert!(up.dot(Vec3::Y.cross(normal)).abs() < 1e-4);
        }
    }

    #[test]
    fn equator_facing_forward_is_identity() {
        let q = tile_orientation(Vec3::Z);
        assert!(q.angle_between(Quat::IDENTITY) < 1e-4);
    }

    #[test]
    fn pole_uses_fallback_axis() {
        let q = tile_orientation(Vec3::Y);
        assert!(approx(q * Vec3::Z, Vec3::Y));
        assert!(q.is_normalized());

        let q = tile_orientation(Vec3::NEG_Y);
        assert!(approx(q * Vec3::Z, Vec3::NEG_Y));
    }

    #[test]
    fn zero_normal_is_identity() {
        assert_eq!(tile_orientation(Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn unnormalized_normal_is_accepted() {
        let q = tile_orientation(Vec3::new(3.0, 0.0, 0.0));
        assert!(approx(q * Vec3::Z, Vec3::X));
    }

    #[test]
    fn euler_round_trip() {
        let normal = Vec3::new(0.4, 0.5, -0.7).normalize();
        let q = tile_orientation(normal);
        let e = orientation_euler(q);
        let back = Quat::from_euler(EulerRot::XYZ, e.x, e.y, e.z);
        assert!(approx(back * Vec3::Z, normal));
    }
}
