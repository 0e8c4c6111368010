//! Recursive ray tracing.
//!
//! `trace` combines the scene scan, local Phong shading and the
//! reflection/refraction recursion into a single color. Termination is
//! guaranteed by the depth bound: every recursive call increases `depth`
//! and there are no other recursive call sites.

use glint_core::{Color, Scene};
use glint_math::{Ray, Vec3};

use crate::intersect::find_closest_intersection;
use crate::shade::phong;

/// Offset applied to secondary ray origins along the new direction, so a
/// spawned ray cannot immediately re-hit the surface it left.
pub const RAY_BIAS: f32 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth for secondary rays
    pub max_depth: u32,
    /// Color returned when a ray hits nothing
    pub background: Color,
    /// Sentinel color returned when the depth budget is exhausted.
    /// Distinct from the background so runaway recursion shows up.
    pub overflow_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Color::ZERO,
            overflow_color: Color::ONE,
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Refract a vector through a surface by Snell's law.
///
/// Entering versus exiting is decided by the sign of `incident . normal`;
/// on exit the two indices swap and the normal flips. Returns `None` on
/// total internal reflection (negative discriminant), in which case the
/// transmitted contribution is zero.
pub fn refract(incident: Vec3, normal: Vec3, ior: f32) -> Option<Vec3> {
    let mut cos_i = incident.dot(normal).clamp(-1.0, 1.0);
    let mut eta_i = 1.0;
    let mut eta_t = ior;
    let mut n = normal;

    if cos_i < 0.0 {
        cos_i = -cos_i;
    } else {
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some(eta * incident + (eta * cos_i - k.sqrt()) * n)
}

/// Compute the color seen along a ray.
///
/// Resolution order: depth check, nearest intersection, local Phong
/// color, then the reflected and refracted contributions weighted by
/// `kr` and `kt`.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: u32) -> Color {
    if depth > config.max_depth {
        return config.overflow_color;
    }

    let Some(hit) = find_closest_intersection(ray, scene) else {
        return config.background;
    };

    let point = ray.at(hit.t);
    let view_dir = -ray.direction.normalize_or_zero();
    let mut color = phong(
        point,
        hit.normal,
        &hit.material,
        view_dir,
        &scene.lights,
        scene.ambient,
    );

    if hit.material.is_reflective() {
        let reflect_dir = reflect(ray.direction, hit.normal);
        let reflect_ray = Ray::new(point + reflect_dir * RAY_BIAS, reflect_dir);
        color += hit.material.kr * trace(&reflect_ray, scene, config, depth + 1);
    }

    // The refraction gate also requires a non-zero kt: with kt = 0 the
    // transmitted term is exactly zero, so skipping the recursion cannot
    // change the output.
    if hit.material.ior > 0.0 && hit.material.is_transmissive() {
        if let Some(refract_dir) = refract(ray.direction, hit.normal, hit.material.ior) {
            let refract_ray = Ray::new(point + refract_dir * RAY_BIAS, refract_dir);
            color += hit.material.kt * trace(&refract_ray, scene, config, depth + 1);
        }
    }

    color
}
