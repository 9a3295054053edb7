//! Built-in scene presets.

use crate::cli::ScenePreset;
use anyhow::{bail, Context, Result};
use rand::RngCore;
use std::path::Path;
use std::sync::Arc;
use umbra_core::BitmapCache;
use umbra_math::Vec3;
use umbra_renderer::random::{gen_f64, gen_range_f64, random_vec3};
use umbra_renderer::{
    AaBox, AaRect, BvhNode, Camera, CheckerTexture, Color, Dielectric, DiffuseLight, Hittable,
    HittableList, ImageTexture, Lambertian, Material, Metal, MovingSphere, NoiseTexture, RotateY,
    Sphere, Texture, Translate,
};

/// Everything a preset decides besides render quality.
pub struct Scene {
    pub world: BvhNode,
    pub camera: Camera,
    pub aspect_ratio: f64,
    pub background: Color,
    pub use_sky_gradient: bool,
}

/// Camera placement, finalized once the aspect ratio is known.
struct View {
    look_from: Vec3,
    look_at: Vec3,
    vfov: f64,
    aperture: f64,
    focus_dist: f64,
    aspect_ratio: f64,
}

impl View {
    fn looking(look_from: Vec3, look_at: Vec3, vfov: f64) -> Self {
        Self {
            look_from,
            look_at,
            vfov,
            aperture: 0.0,
            focus_dist: 10.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }

    fn camera(&self, aspect_ratio: f64) -> Camera {
        Camera::new()
            .with_position(self.look_from, self.look_at, Vec3::Y)
            .with_lens(self.vfov, self.aperture, self.focus_dist)
            .with_aspect_ratio(aspect_ratio)
            .with_shutter(0.0, 1.0)
    }
}

/// Build `preset`. `aspect` overrides the preset's preferred ratio.
pub fn build(
    preset: ScenePreset,
    aspect: Option<f64>,
    texture: Option<&Path>,
    rng: &mut dyn RngCore,
) -> Result<Scene> {
    let (objects, view, background, use_sky_gradient) = match preset {
        ScenePreset::RandomSpheres => {
            let mut view = View::looking(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, 20.0);
            view.aperture = 0.1;
            (random_spheres(rng), view, Color::ZERO, true)
        }
        ScenePreset::TwoSpheres => (two_spheres(), classic_view(), Color::ZERO, true),
        ScenePreset::TwoPerlinSpheres => (two_perlin_spheres(rng), classic_view(), Color::ZERO, true),
        ScenePreset::Earth => {
            let Some(path) = texture else {
                bail!("the earth scene needs a bitmap; pass --texture <path>");
            };
            (earth(path)?, classic_view(), Color::ZERO, true)
        }
        ScenePreset::SimpleLight => {
            let view = View::looking(Vec3::new(26.0, 3.0, 6.0), Vec3::new(0.0, 2.0, 0.0), 20.0);
            (simple_light(rng), view, Color::ZERO, false)
        }
        ScenePreset::CornellBox => {
            let mut view =
                View::looking(Vec3::new(278.0, 278.0, -800.0), Vec3::new(278.0, 278.0, 0.0), 40.0);
            view.aspect_ratio = 1.0;
            (cornell_box(), view, Color::ZERO, false)
        }
    };

    log::info!("Scene {:?}: {} top-level objects", preset, objects.len());

    let aspect_ratio = aspect.unwrap_or(view.aspect_ratio);
    let world = BvhNode::from_list(objects, rng).context("building the scene hierarchy")?;

    Ok(Scene {
        world,
        camera: view.camera(aspect_ratio),
        aspect_ratio,
        background,
        use_sky_gradient,
    })
}

fn classic_view() -> View {
    View::looking(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, 20.0)
}

fn lambertian(albedo: Color) -> Arc<dyn Material> {
    Arc::new(Lambertian::new(albedo))
}

fn checker() -> Arc<dyn Texture> {
    Arc::new(CheckerTexture::from_colors(
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ))
}

fn random_spheres(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::with_texture(checker()));
    world.push(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(rng);
            let center = Vec3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            // Keep clear of the large metal sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                // Diffuse, bouncing upward during the shutter
                let albedo = random_vec3(rng, 0.0, 1.0) * random_vec3(rng, 0.0, 1.0);
                let center1 = center + Vec3::new(0.0, gen_range_f64(rng, 0.0, 0.5), 0.0);
                world.push(MovingSphere::new(center, center1, 0.0, 1.0, 0.2, lambertian(albedo)));
            } else if choose_mat < 0.95 {
                let albedo = random_vec3(rng, 0.5, 1.0);
                let fuzz = gen_range_f64(rng, 0.0, 0.5);
                world.push(Sphere::new(center, 0.2, Arc::new(Metal::new(albedo, fuzz))));
            } else {
                world.push(Sphere::new(center, 0.2, Arc::new(Dielectric::new(1.5))));
            }
        }
    }

    world.push(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, Arc::new(Dielectric::new(1.5))));
    world.push(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        lambertian(Color::new(0.4, 0.2, 0.1)),
    ));
    world.push(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    ));

    world
}

fn two_spheres() -> HittableList {
    let mut world = HittableList::new();
    let checkered: Arc<dyn Material> = Arc::new(Lambertian::with_texture(checker()));

    world.push(Sphere::new(Vec3::new(0.0, -10.0, 0.0), 10.0, checkered.clone()));
    world.push(Sphere::new(Vec3::new(0.0, 10.0, 0.0), 10.0, checkered));
    world
}

fn marble(rng: &mut dyn RngCore) -> Arc<dyn Material> {
    Arc::new(Lambertian::with_texture(Arc::new(NoiseTexture::new(4.0, rng))))
}

fn two_perlin_spheres(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();
    let material = marble(rng);

    world.push(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, material.clone()));
    world.push(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 2.0, material));
    world
}

fn earth(path: &Path) -> Result<HittableList> {
    let mut cache = BitmapCache::new();
    let name = path.to_string_lossy();
    let bitmap = cache
        .load(&name)
        .with_context(|| format!("loading earth texture {}", path.display()))?;

    let surface: Arc<dyn Material> =
        Arc::new(Lambertian::with_texture(Arc::new(ImageTexture::new(bitmap))));

    let mut world = HittableList::new();
    world.push(Sphere::new(Vec3::ZERO, 2.0, surface));
    Ok(world)
}

fn simple_light(rng: &mut dyn RngCore) -> HittableList {
    let mut world = two_perlin_spheres(rng);

    let light: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::splat(4.0)));
    world.push(AaRect::xy(3.0, 5.0, 1.0, 3.0, -2.0, light));
    world
}

fn cornell_box() -> HittableList {
    let mut world = HittableList::new();

    let red = lambertian(Color::new(0.65, 0.05, 0.05));
    let white = lambertian(Color::splat(0.73));
    let green = lambertian(Color::new(0.12, 0.45, 0.15));
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::splat(15.0)));

    world.push(AaRect::yz(0.0, 555.0, 0.0, 555.0, 555.0, green));
    world.push(AaRect::yz(0.0, 555.0, 0.0, 555.0, 0.0, red));
    world.push(AaRect::xz(213.0, 343.0, 227.0, 332.0, 554.0, light));
    world.push(AaRect::xz(0.0, 555.0, 0.0, 555.0, 0.0, white.clone()));
    world.push(AaRect::xz(0.0, 555.0, 0.0, 555.0, 555.0, white.clone()));
    world.push(AaRect::xy(0.0, 555.0, 0.0, 555.0, 555.0, white.clone()));

    world.add(placed_block(
        Vec3::new(165.0, 330.0, 165.0),
        15.0,
        Vec3::new(265.0, 0.0, 295.0),
        white.clone(),
    ));
    world.add(placed_block(
        Vec3::splat(165.0),
        -18.0,
        Vec3::new(130.0, 0.0, 65.0),
        white,
    ));

    world
}

/// Box from the origin to `size`, turned about Y then moved into place.
fn placed_block(size: Vec3, angle: f64, offset: Vec3, material: Arc<dyn Material>) -> Arc<dyn Hittable> {
    let block: Arc<dyn Hittable> = Arc::new(AaBox::new(Vec3::ZERO, size, material));
    let turned: Arc<dyn Hittable> = Arc::new(RotateY::new(block, angle));
    Arc::new(Translate::new(turned, offset))
}
