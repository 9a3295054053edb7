//! Umbra math kernel.
//!
//! Double precision throughout: `Vec3` is `glam::DVec3`, so every geometric
//! test in the renderer runs on IEEE754 f64 arithmetic. Infinities and NaNs
//! produced by degenerate inputs are intentionally left to propagate.

// Re-export glam's f64 types under the names the renderer uses
pub use glam::DMat3 as Mat3;
pub use glam::DVec3 as Vec3;

mod aabb;
mod interval;
mod ray;
mod transform;
mod vec3;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;
pub use transform::Mat3Ext;
pub use vec3::Vec3Ext;
