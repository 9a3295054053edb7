//! Simple path tracer example.
//!
//! Renders three large spheres over a checkered ground and saves to PPM.
//! Run with: cargo run --release --example simple_render -p umbra_renderer

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;
use umbra_renderer::{
    render, write_ppm, BvhNode, Camera, CheckerTexture, Color, Dielectric, HittableList,
    Lambertian, Material, Metal, RenderConfig, Sphere, Vec3,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let world = BvhNode::from_list(build_scene(), &mut rng)?;

    let camera = Camera::new()
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.1, 10.0)
        .with_aspect_ratio(16.0 / 9.0);

    let config = RenderConfig {
        samples_per_pixel: 32,
        max_depth: 10,
        use_sky_gradient: true,
        seed: 7,
        ..Default::default()
    };

    let image = render(&camera, &world, 400, 225, &config);

    let filename = "output.ppm";
    write_ppm(&image, &mut BufWriter::new(File::create(filename)?))?;
    log::info!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> HittableList {
    let mut objects = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::with_texture(Arc::new(
        CheckerTexture::from_colors(Color::new(0.2, 0.3, 0.1), Color::new(0.9, 0.9, 0.9)),
    )));
    objects.push(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    objects.push(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    ));
    objects.push(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    ));
    objects.push(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    ));

    objects
}
