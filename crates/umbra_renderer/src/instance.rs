//! Transform wrappers that place one child object in the world.
//!
//! Rather than moving geometry, each wrapper moves the incoming ray into the
//! child's local space, delegates, and maps the hit back to world space.

use crate::hittable::{HitRecord, Hittable};
use std::sync::Arc;
use umbra_math::{Aabb, Interval, Mat3, Mat3Ext, Ray, Vec3};

/// Child object displaced by a fixed offset.
pub struct Translate {
    object: Arc<dyn Hittable>,
    offset: Vec3,
}

impl Translate {
    pub fn new(object: Arc<dyn Hittable>, offset: Vec3) -> Self {
        Self { object, offset }
    }
}

impl Hittable for Translate {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let moved = Ray::new(ray.origin() - self.offset, ray.direction(), ray.time());
        if !self.object.hit(&moved, ray_t, rec) {
            return false;
        }

        rec.p += self.offset;
        // Child normal is already world-oriented; re-derive the face against the moved ray
        let normal = rec.normal;
        rec.set_face_normal(&moved, normal);

        true
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.object
            .bounding_box()
            .map(|bbox| bbox.translate(self.offset))
    }
}

/// Child object rotated about the Y axis.
pub struct RotateY {
    object: Arc<dyn Hittable>,
    /// Object space to world space
    to_world: Mat3,
    /// World space to object space (the transpose)
    to_object: Mat3,
    bbox: Option<Aabb>,
}

impl RotateY {
    /// Rotate `object` by `angle` degrees, counter-clockwise looking down -Y.
    pub fn new(object: Arc<dyn Hittable>, angle: f64) -> Self {
        let to_world = Mat3::from_rotation_y(angle.to_radians());
        let to_object = to_world.transpose();

        // Rotation breaks axis alignment: box every rotated corner
        let bbox = object
            .bounding_box()
            .map(|child| to_world.transform_aabb(&child));

        Self {
            object,
            to_world,
            to_object,
            bbox,
        }
    }
}

impl Hittable for RotateY {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let rotated = Ray::new(
            self.to_object * ray.origin(),
            self.to_object * ray.direction(),
            ray.time(),
        );

        if !self.object.hit(&rotated, ray_t, rec) {
            return false;
        }

        // Rotation preserves the dot product, so the child's face flag stays valid
        rec.p = self.to_world * rec.p;
        rec.normal = self.to_world * rec.normal;

        true
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.bbox
    }
}
