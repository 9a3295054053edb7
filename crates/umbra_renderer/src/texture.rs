//! Textures: spatially varying colors looked up at a hit point.

use crate::perlin::Perlin;
use crate::Color;
use rand::RngCore;
use std::sync::Arc;
use umbra_core::Bitmap;
use umbra_math::{Interval, Vec3};

/// Maps a surface coordinate and position to a color.
pub trait Texture: Send + Sync {
    fn value(&self, u: f64, v: f64, p: Vec3) -> Color;
}

/// A constant color.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(Color::new(r, g, b))
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f64, _v: f64, _p: Vec3) -> Color {
        self.color
    }
}

/// 3-D checker: the sign of `sin(10x)·sin(10y)·sin(10z)` picks a sub-texture.
#[derive(Clone)]
pub struct CheckerTexture {
    odd: Arc<dyn Texture>,
    even: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(odd: Arc<dyn Texture>, even: Arc<dyn Texture>) -> Self {
        Self { odd, even }
    }

    pub fn from_colors(odd: Color, even: Color) -> Self {
        Self::new(Arc::new(SolidColor::new(odd)), Arc::new(SolidColor::new(even)))
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f64, v: f64, p: Vec3) -> Color {
        let sines = (10.0 * p.x).sin() * (10.0 * p.y).sin() * (10.0 * p.z).sin();
        if sines < 0.0 {
            self.odd.value(u, v, p)
        } else {
            self.even.value(u, v, p)
        }
    }
}

/// Bitmap lookup by surface (u, v).
#[derive(Clone)]
pub struct ImageTexture {
    bitmap: Arc<Bitmap>,
}

impl ImageTexture {
    pub fn new(bitmap: Arc<Bitmap>) -> Self {
        Self { bitmap }
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f64, v: f64, _p: Vec3) -> Color {
        // Debugging aid for missing data
        if self.bitmap.is_empty() {
            return Color::new(0.0, 1.0, 1.0);
        }

        let unit = Interval::new(0.0, 1.0);
        let u = unit.clamp(u);
        // Flip V to image coordinates
        let v = 1.0 - unit.clamp(v);

        let i = (u * self.bitmap.width as f64) as u32;
        let j = (v * self.bitmap.height as f64) as u32;

        // u == 1 or v == 0 lands one past the edge; Bitmap::pixel clamps it
        let [r, g, b] = self.bitmap.pixel(i, j);
        let scale = 1.0 / 255.0;
        Color::new(r as f64 * scale, g as f64 * scale, b as f64 * scale)
    }
}

/// How a [`NoiseTexture`] turns Perlin noise into an intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoiseStyle {
    /// `0.5 * (1 + noise(scale * p))`
    Smooth,
    /// `turb(scale * p)`
    Turbulence,
    /// `0.5 * (1 + sin(scale * p.z + 10 * turb(p)))`
    #[default]
    Marble,
}

/// Procedural gray-scale Perlin noise.
///
/// Parameters: `scale` is the spatial frequency, `turbulence_depth` the
/// number of octaves summed by the turbulence variants (7 by default).
pub struct NoiseTexture {
    noise: Perlin,
    scale: f64,
    style: NoiseStyle,
    turbulence_depth: u32,
}

impl NoiseTexture {
    pub const DEFAULT_TURBULENCE_DEPTH: u32 = 7;

    /// Marble-style noise at the given frequency.
    pub fn new(scale: f64, rng: &mut dyn RngCore) -> Self {
        Self::with_style(scale, NoiseStyle::default(), rng)
    }

    pub fn with_style(scale: f64, style: NoiseStyle, rng: &mut dyn RngCore) -> Self {
        Self {
            noise: Perlin::new(rng),
            scale,
            style,
            turbulence_depth: Self::DEFAULT_TURBULENCE_DEPTH,
        }
    }

    pub fn with_turbulence_depth(mut self, depth: u32) -> Self {
        self.turbulence_depth = depth;
        self
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _u: f64, _v: f64, p: Vec3) -> Color {
        let intensity = match self.style {
            NoiseStyle::Smooth => 0.5 * (1.0 + self.noise.noise(self.scale * p)),
            NoiseStyle::Turbulence => self.noise.turb(self.scale * p, self.turbulence_depth),
            NoiseStyle::Marble => {
                0.5 * (1.0 + (self.scale * p.z + 10.0 * self.noise.turb(p, self.turbulence_depth)).sin())
            }
        };
        Color::ONE * intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solid_color() {
        let tex = SolidColor::from_rgb(1.0, 0.5, 0.0);
        assert_eq!(tex.value(0.3, 0.9, Vec3::splat(7.0)), Color::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_checker_alternates() {
        let tex = CheckerTexture::from_colors(Color::ZERO, Color::ONE);

        // All three sines positive
        assert_eq!(tex.value(0.0, 0.0, Vec3::splat(0.1)), Color::ONE);
        // One negative sine flips the sign
        assert_eq!(tex.value(0.0, 0.0, Vec3::new(-0.1, 0.1, 0.1)), Color::ZERO);
        // Two negatives cancel
        assert_eq!(tex.value(0.0, 0.0, Vec3::new(-0.1, -0.1, 0.1)), Color::ONE);
    }

    fn two_by_two() -> ImageTexture {
        let pixels = vec![[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]];
        ImageTexture::new(Arc::new(Bitmap::new(2, 2, pixels, "<memory>")))
    }

    #[test]
    fn test_image_texture_flips_v() {
        let tex = two_by_two();

        // v near 1 is the top row of the image
        assert_eq!(tex.value(0.1, 0.9, Vec3::ZERO), Color::new(1.0, 0.0, 0.0));
        assert_eq!(tex.value(0.9, 0.9, Vec3::ZERO), Color::new(0.0, 1.0, 0.0));
        // v near 0 is the bottom row
        assert_eq!(tex.value(0.1, 0.1, Vec3::ZERO), Color::new(0.0, 0.0, 1.0));
        assert_eq!(tex.value(0.9, 0.1, Vec3::ZERO), Color::ONE);
    }

    #[test]
    fn test_image_texture_clamps_uv() {
        let tex = two_by_two();

        assert_eq!(tex.value(-3.0, 5.0, Vec3::ZERO), Color::new(1.0, 0.0, 0.0));
        assert_eq!(tex.value(1.0, 0.0, Vec3::ZERO), Color::ONE);
        assert_eq!(tex.value(7.0, -2.0, Vec3::ZERO), Color::ONE);
    }

    #[test]
    fn test_image_texture_empty_is_cyan() {
        let tex = ImageTexture::new(Arc::new(Bitmap::new(0, 0, Vec::new(), "<empty>")));
        assert_eq!(tex.value(0.5, 0.5, Vec3::ZERO), Color::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_noise_styles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(21);
        for style in [NoiseStyle::Smooth, NoiseStyle::Turbulence, NoiseStyle::Marble] {
            let tex = NoiseTexture::with_style(4.0, style, &mut rng);
            for i in 0..200 {
                let p = Vec3::new(i as f64 * 0.37, i as f64 * -0.11, i as f64 * 0.05);
                let c = tex.value(0.0, 0.0, p);
                assert!(c.x >= 0.0 && c.x <= 2.0, "{style:?} gave {c:?}");
                assert_eq!(c.x, c.y);
                assert_eq!(c.y, c.z);
            }
        }
    }

    #[test]
    fn test_noise_is_deterministic_per_seed() {
        let a = NoiseTexture::new(4.0, &mut StdRng::seed_from_u64(8));
        let b = NoiseTexture::new(4.0, &mut StdRng::seed_from_u64(8));
        let p = Vec3::new(1.3, -0.2, 4.4);
        assert_eq!(a.value(0.0, 0.0, p), b.value(0.0, 0.0, p));
    }
}
