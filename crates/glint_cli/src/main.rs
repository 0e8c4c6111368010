//! Glint command line renderer.
//!
//! Renders a scene twice - once as built, once after an affine transform
//! of the scene geometry - and writes each pass as PNG and PPM. With no
//! argument a built-in demo scene is used; otherwise the argument names a
//! JSON scene description file.

use std::f32::consts::FRAC_PI_4;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use glint_core::{build_torus, load_scene, Color, Light, Material, Plane, Scene, Sphere};
use glint_math::{Mat4, Vec3};
use glint_renderer::{color_to_rgba, render, Camera, ImageBuffer, RenderConfig};

fn main() -> Result<()> {
    env_logger::init();

    let scene = match std::env::args().nth(1) {
        Some(path) => load_scene(&path).with_context(|| format!("loading scene from {path}"))?,
        None => demo_scene(),
    };

    let mut camera = Camera::new()
        .with_resolution(500, 500)
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_focal_distance(1.0);
    camera.initialize();

    let config = RenderConfig::default();

    // First pass: the scene as built
    let image = render(&camera, &scene, &config);
    save_outputs(&image, "render_before")?;

    // Second pass: the same scene with an affine transform applied
    let transform = Mat4::from_translation(Vec3::new(1.0, 1.0, 0.0))
        * Mat4::from_scale(Vec3::splat(1.5))
        * Mat4::from_rotation_z(FRAC_PI_4);
    let transformed = scene.transformed(transform);

    let image = render(&camera, &transformed, &config);
    save_outputs(&image, "render_after")?;

    Ok(())
}

/// A small built-in scene: reflective white floor, shiny red torus and a
/// pair of spheres under a single white point light.
fn demo_scene() -> Scene {
    let white_floor = Material::new(
        Color::ONE,
        Color::splat(0.5),
        Color::splat(0.1),
        Color::splat(0.5),
        Color::ZERO,
        32.0,
        0.0,
    );
    let shiny_red = Material::mirror(Color::new(1.0, 0.0, 0.0), Color::splat(0.8), 80.0);
    let cyan_glass = Material::glass(Color::splat(0.9), 1.5);
    let blue_matte = Material::matte(Color::new(0.0, 0.0, 1.0));

    let mut scene = Scene::new(Color::splat(0.1));
    scene.add_plane(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, white_floor));
    scene.add_mesh(build_torus(Vec3::ZERO, 0.3, 0.1, 10, 10, shiny_red));
    scene.add_sphere(Sphere::new(Vec3::new(-1.5, -1.5, -1.85), 0.8, cyan_glass));
    scene.add_sphere(Sphere::new(Vec3::new(2.5, 2.0, -3.5), 0.8, blue_matte));
    scene.add_light(Light::new(Vec3::new(5.0, 5.0, -5.0), Color::ONE));
    scene
}

/// Write the buffer as both `<stem>.png` and `<stem>.ppm`.
fn save_outputs(image: &ImageBuffer, stem: &str) -> Result<()> {
    let png_path = format!("{stem}.png");
    image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("pixel buffer size mismatch")?
        .save(&png_path)
        .with_context(|| format!("writing {png_path}"))?;

    let ppm_path = format!("{stem}.ppm");
    write_ppm(&ppm_path, image).with_context(|| format!("writing {ppm_path}"))?;

    log::info!("Wrote {png_path} and {ppm_path}");
    Ok(())
}

/// Plain-text PPM (P3) writer.
fn write_ppm<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "P3\n{} {}\n255", image.width, image.height)?;
    for color in &image.pixels {
        let [r, g, b, _] = color_to_rgba(*color);
        writeln!(out, "{r} {g} {b}")?;
    }
    out.flush()
}
