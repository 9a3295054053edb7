//! End-to-end behavior of the integrator, camera and output stages.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use umbra_renderer::{
    color_to_rgb, ray_color, reflectance, render, write_ppm, Aabb, Camera, Color, HitRecord,
    Hittable, HittableList, Interval, Lambertian, Material, Ray, RenderConfig, Sphere, Vec3,
    RAY_EPSILON,
};

fn same_material(a: &dyn Material, b: &Arc<dyn Material>) -> bool {
    std::ptr::eq(a as *const dyn Material as *const (), Arc::as_ptr(b) as *const ())
}

#[test]
fn center_ray_hits_foreground_sphere_not_ground() {
    let foreground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3)));
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));

    let mut world = HittableList::new();
    world.push(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, foreground.clone()));
    world.push(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground));

    let camera = Camera::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let ray = camera.make_ray(0.5, 0.5, &mut rng);

    let mut rec = HitRecord::default();
    assert!(world.hit(&ray, Interval::new(RAY_EPSILON, f64::INFINITY), &mut rec));
    assert!(same_material(rec.material, &foreground));
    assert!((rec.t - 0.5).abs() < 1e-9);

    // Through one bounce the color is attenuated, never the raw background
    let config = RenderConfig {
        background: Color::new(0.5, 0.7, 1.0),
        ..Default::default()
    };
    for depth in [2, 50] {
        let color = ray_color(&ray, &world, depth, &config, &mut rng);
        assert_ne!(color, config.background);
        assert!(color.z < config.background.z);
    }
}

#[test]
fn axis_parallel_offset_rays_miss_box() {
    let bbox = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));
    let full = Interval::new(0.0, f64::INFINITY);

    for axis in 0..3 {
        for sign in [1.0, -1.0] {
            let mut direction = Vec3::ZERO;
            direction[axis] = sign;

            // Offset on both other axes, outside the box
            let mut origin = Vec3::splat(2.0);
            origin[axis] = -5.0 * sign;

            let ray = Ray::new_simple(origin, direction);
            assert!(!bbox.hit(&ray, full), "axis {axis}, sign {sign}");
        }
    }
}

#[test]
fn dielectric_normal_incidence_reflectance() {
    for ior in [1.0_f64, 1.33, 1.5, 2.4] {
        let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
        assert_eq!(reflectance(1.0, ior), r0);
    }
}

#[test]
fn gamma_round_trip_white_and_black() {
    let samples = 37;
    let white: Color = (0..samples).map(|_| Color::ONE).sum::<Color>() / samples as f64;
    let black: Color = (0..samples).map(|_| Color::ZERO).sum::<Color>() / samples as f64;

    assert_eq!(color_to_rgb(white), [255, 255, 255]);
    assert_eq!(color_to_rgb(black), [0, 0, 0]);
}

#[test]
fn rendered_ppm_has_one_line_per_pixel() {
    let world = Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Arc::new(Lambertian::new(Color::splat(0.5))),
    );
    let camera = Camera::new();
    let config = RenderConfig {
        samples_per_pixel: 2,
        max_depth: 3,
        use_sky_gradient: true,
        seed: 99,
        ..Default::default()
    };

    let image = render(&camera, &world, 8, 5, &config);
    let mut out = Vec::new();
    write_ppm(&image, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "P3");
    assert_eq!(lines[1], "8 5");
    assert_eq!(lines[2], "255");
    assert_eq!(lines.len(), 3 + 8 * 5);
    for line in &lines[3..] {
        let channels: Vec<u16> = line.split(' ').map(|c| c.parse().unwrap()).collect();
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|&c| c <= 255));
    }

    // Top-left corner looks up into the sky: brighter blue than red
    let top_left: Vec<u16> = lines[3].split(' ').map(|c| c.parse().unwrap()).collect();
    assert!(top_left[2] > top_left[0]);
}
