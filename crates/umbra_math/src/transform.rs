// Transform utilities for Mat3
//
// Extends glam::DMat3 with the bounding box helper the rotation wrappers need.

use crate::{Aabb, Mat3, Vec3};

/// Extension trait for Mat3 to provide additional transform utilities
pub trait Mat3Ext {
    /// Transform an axis-aligned bounding box.
    /// Computes the bounding box of all 8 transformed corners, since a
    /// rotation does not preserve axis alignment.
    fn transform_aabb(&self, aabb: &Aabb) -> Aabb;
}

impl Mat3Ext for Mat3 {
    fn transform_aabb(&self, aabb: &Aabb) -> Aabb {
        let mut result_min = Vec3::splat(f64::INFINITY);
        let mut result_max = Vec3::splat(f64::NEG_INFINITY);

        for corner in aabb.corners() {
            let tester = *self * corner;
            result_min = result_min.min(tester);
            result_max = result_max.max(tester);
        }

        Aabb::from_points(result_min, result_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_keeps_box() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(Mat3::IDENTITY.transform_aabb(&aabb), aabb);
    }

    #[test]
    fn test_rotation_grows_box() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let rotated = Mat3::from_rotation_y(45f64.to_radians()).transform_aabb(&aabb);

        let half_diagonal = 2f64.sqrt();
        assert!((rotated.x.size() - half_diagonal).abs() < 1e-12);
        assert!((rotated.z.size() - half_diagonal).abs() < 1e-12);
        // Y axis untouched by a rotation about Y
        assert_eq!(rotated.y, aabb.y);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let aabb = Aabb::from_points(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let rotated = Mat3::from_rotation_y(90f64.to_radians()).transform_aabb(&aabb);

        // x' = z, z' = -x for a +90 degree turn
        assert!((rotated.x.min - 0.0).abs() < 1e-12);
        assert!((rotated.x.max - 1.0).abs() < 1e-12);
        assert!((rotated.z.min + 2.0).abs() < 1e-12);
        assert!((rotated.z.max + 1.0).abs() < 1e-12);
    }
}
