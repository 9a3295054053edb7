//! Thin-lens camera for primary ray generation.

use crate::random::{gen_range_f64, random_in_unit_disk};
use rand::RngCore;
use umbra_math::{Ray, Vec3};

/// Camera that maps normalized image coordinates `(s, t)` to rays.
///
/// `s` runs left to right and `t` bottom to top, both over `[0, 1]`.
#[derive(Clone, Debug)]
pub struct Camera {
    // Positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens
    vfov: f64,         // Vertical field of view in degrees
    aspect_ratio: f64, // Width over height
    aperture: f64,     // Lens diameter; zero gives a pinhole
    focus_dist: f64,   // Distance to the plane of perfect focus

    // Shutter interval for motion blur
    time0: f64,
    time1: f64,

    // Derived from the settings above; every builder refreshes them
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Pinhole camera at the origin looking down -Z.
    pub fn new() -> Self {
        let mut camera = Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
            time0: 0.0,
            time1: 0.0,
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            lens_radius: 0.0,
        };
        camera.initialize();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, aperture: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self.initialize();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.initialize();
        self
    }

    /// Set the interval ray times are drawn from.
    pub fn with_shutter(mut self, time0: f64, time1: f64) -> Self {
        self.time0 = time0;
        self.time1 = time1;
        self
    }

    /// Recompute the cached basis and viewport.
    fn initialize(&mut self) {
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = self.aspect_ratio * viewport_height;

        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        self.origin = self.look_from;
        self.horizontal = self.focus_dist * viewport_width * self.u;
        self.vertical = self.focus_dist * viewport_height * self.v;
        self.lower_left_corner = self.origin
            - self.horizontal / 2.0
            - self.vertical / 2.0
            - self.focus_dist * self.w;

        self.lens_radius = self.aperture / 2.0;
    }

    /// Generate a ray through `(s, t)` at a time drawn from the shutter interval.
    pub fn make_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let time = if self.time1 > self.time0 {
            gen_range_f64(rng, self.time0, self.time1)
        } else {
            self.time0
        };
        self.make_ray_at(s, t, time, rng)
    }

    /// Generate a ray through `(s, t)` carrying an explicit time.
    pub fn make_ray_at(&self, s: f64, t: f64, time: f64, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        let direction = self.lower_left_corner + s * self.horizontal + t * self.vertical
            - self.origin
            - offset;

        Ray::new(self.origin + offset, direction, time)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
