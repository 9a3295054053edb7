//! umbra renderer - CPU path tracing
//!
//! A Monte Carlo path tracer: hittable geometry, a BVH over it, materials
//! and textures, a thin-lens camera, and a row-parallel integrator that
//! writes plain PPM.

mod aabox;
mod aarect;
mod bvh;
mod camera;
mod hittable;
mod instance;
mod material;
mod perlin;
mod ppm;
pub mod random;
mod renderer;
mod sphere;
mod texture;

pub use aabox::AaBox;
pub use aarect::{AaRect, RectPlane};
pub use bvh::{BvhError, BvhNode};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use instance::{RotateY, Translate};
pub use material::{
    reflect, reflectance, refract, Color, Dielectric, DiffuseLight, Lambertian, Material, Metal,
    ScatterResult,
};
pub use perlin::Perlin;
pub use ppm::write_ppm;
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    RenderConfig, RAY_EPSILON,
};
pub use sphere::{sphere_uv, MovingSphere, Sphere};
pub use texture::{CheckerTexture, ImageTexture, NoiseStyle, NoiseTexture, SolidColor, Texture};

/// Re-export Vec3 and common math types from umbra_math
pub use umbra_math::{Aabb, Interval, Ray, Vec3};
