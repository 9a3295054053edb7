//! Axis-aligned rectangles.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use std::sync::Arc;
use umbra_math::{Aabb, Interval, Ray, Vec3};

/// Half-thickness given to a rectangle's box along its fixed axis.
const RECT_PADDING: f64 = 1e-4;

/// Which plane a rectangle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectPlane {
    /// Fixed z, spans x and y
    Xy,
    /// Fixed y, spans x and z
    Xz,
    /// Fixed x, spans y and z
    Yz,
}

impl RectPlane {
    /// Axis indices `(a, b, k)`: the two spanned axes, then the fixed one.
    #[inline]
    fn axes(self) -> (usize, usize, usize) {
        match self {
            RectPlane::Xy => (0, 1, 2),
            RectPlane::Xz => (0, 2, 1),
            RectPlane::Yz => (1, 2, 0),
        }
    }
}

/// A rectangle `[a0, a1] x [b0, b1]` on the plane `k` of the fixed axis.
pub struct AaRect {
    plane: RectPlane,
    a0: f64,
    a1: f64,
    b0: f64,
    b1: f64,
    k: f64,
    material: Arc<dyn Material>,
}

impl AaRect {
    pub fn new(
        plane: RectPlane,
        (a0, a1): (f64, f64),
        (b0, b1): (f64, f64),
        k: f64,
        material: Arc<dyn Material>,
    ) -> Self {
        Self {
            plane,
            a0,
            a1,
            b0,
            b1,
            k,
            material,
        }
    }

    /// Rectangle at `z = k`.
    pub fn xy(x0: f64, x1: f64, y0: f64, y1: f64, k: f64, material: Arc<dyn Material>) -> Self {
        Self::new(RectPlane::Xy, (x0, x1), (y0, y1), k, material)
    }

    /// Rectangle at `y = k`.
    pub fn xz(x0: f64, x1: f64, z0: f64, z1: f64, k: f64, material: Arc<dyn Material>) -> Self {
        Self::new(RectPlane::Xz, (x0, x1), (z0, z1), k, material)
    }

    /// Rectangle at `x = k`.
    pub fn yz(y0: f64, y1: f64, z0: f64, z1: f64, k: f64, material: Arc<dyn Material>) -> Self {
        Self::new(RectPlane::Yz, (y0, y1), (z0, z1), k, material)
    }
}

impl Hittable for AaRect {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let (a_axis, b_axis, k_axis) = self.plane.axes();
        let origin = ray.origin();
        let direction = ray.direction();

        let t = (self.k - origin[k_axis]) / direction[k_axis];
        if !ray_t.surrounds(t) {
            return false;
        }

        let a = origin[a_axis] + t * direction[a_axis];
        let b = origin[b_axis] + t * direction[b_axis];
        if a < self.a0 || a > self.a1 || b < self.b0 || b > self.b1 {
            return false;
        }

        rec.u = (a - self.a0) / (self.a1 - self.a0);
        rec.v = (b - self.b0) / (self.b1 - self.b0);
        rec.t = t;

        let mut outward_normal = Vec3::ZERO;
        outward_normal[k_axis] = 1.0;
        rec.set_face_normal(ray, outward_normal);
        rec.material = &*self.material;
        rec.p = ray.at(t);

        true
    }

    /// Padded along the fixed axis so the box has non-zero thickness.
    fn bounding_box(&self) -> Option<Aabb> {
        let (a_axis, b_axis, k_axis) = self.plane.axes();
        let mut min = Vec3::ZERO;
        let mut max = Vec3::ZERO;
        min[a_axis] = self.a0;
        max[a_axis] = self.a1;
        min[b_axis] = self.b0;
        max[b_axis] = self.b1;
        min[k_axis] = self.k - RECT_PADDING;
        max[k_axis] = self.k + RECT_PADDING;
        Some(Aabb::from_points(min, max))
    }
}
