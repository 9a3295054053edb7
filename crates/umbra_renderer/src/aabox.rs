//! Axis-aligned box built from six rectangles.

use crate::{
    aarect::AaRect,
    hittable::{HitRecord, Hittable, HittableList},
    Material,
};
use std::sync::Arc;
use umbra_math::{Aabb, Interval, Ray, Vec3};

pub struct AaBox {
    box_min: Vec3,
    box_max: Vec3,
    sides: HittableList,
}

impl AaBox {
    /// Box spanning two opposite corners; all faces share one material.
    pub fn new(p0: Vec3, p1: Vec3, material: Arc<dyn Material>) -> Self {
        let box_min = p0.min(p1);
        let box_max = p0.max(p1);
        let (min, max) = (box_min, box_max);

        let mut sides = HittableList::new();
        sides.push(AaRect::xy(min.x, max.x, min.y, max.y, max.z, material.clone()));
        sides.push(AaRect::xy(min.x, max.x, min.y, max.y, min.z, material.clone()));

        sides.push(AaRect::xz(min.x, max.x, min.z, max.z, max.y, material.clone()));
        sides.push(AaRect::xz(min.x, max.x, min.z, max.z, min.y, material.clone()));

        sides.push(AaRect::yz(min.y, max.y, min.z, max.z, max.x, material.clone()));
        sides.push(AaRect::yz(min.y, max.y, min.z, max.z, min.x, material));

        Self {
            box_min,
            box_max,
            sides,
        }
    }
}

impl Hittable for AaBox {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        self.sides.hit(ray, ray_t, rec)
    }

    /// The two corners directly, not a union of the sides.
    fn bounding_box(&self) -> Option<Aabb> {
        Some(Aabb::from_points(self.box_min, self.box_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn unit_box() -> AaBox {
        AaBox::new(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Arc::new(Lambertian::new(Vec3::splat(0.5))),
        )
    }

    #[test]
    fn test_box_hits_near_face() {
        let cube = unit_box();
        let ray = Ray::new_simple(Vec3::new(0.2, 0.3, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();

        assert!(cube.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
        assert_eq!(rec.t, 4.0);
        assert_eq!(rec.normal, Vec3::Z);
        assert!(rec.front_face);
    }

    #[test]
    fn test_box_from_inside_hits_far_face() {
        let cube = unit_box();
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();

        assert!(cube.hit(&ray, Interval::new(0.001, f64::INFINITY), &mut rec));
        assert_eq!(rec.t, 1.0);
        assert!(!rec.front_face);
    }

    #[test]
    fn test_box_bounding_box_is_exact() {
        let bbox = unit_box().bounding_box().unwrap();
        assert_eq!(bbox.min(), Vec3::splat(-1.0));
        assert_eq!(bbox.max(), Vec3::splat(1.0));
    }
}
