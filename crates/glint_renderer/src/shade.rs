//! Local Phong illumination.

use glint_core::{Color, Light, Material};
use glint_math::Vec3;

/// Compute Phong illumination at a hit point.
///
/// `normal` and `view_dir` must be unit vectors; `view_dir` points from
/// the hit point toward the viewer. The result is unclamped: ambient plus
/// the diffuse and specular sums over all lights. No shadow rays are
/// cast, every light contributes regardless of occluders.
pub fn phong(
    point: Vec3,
    normal: Vec3,
    material: &Material,
    view_dir: Vec3,
    lights: &[Light],
    ambient_light: Color,
) -> Color {
    let ambient = material.ka * ambient_light;
    let mut diffuse = Color::ZERO;
    let mut specular = Color::ZERO;

    for light in lights {
        let light_dir = (light.position - point).normalize_or_zero();
        let diff = normal.dot(light_dir).max(0.0);
        diffuse += light.intensity * material.kd * diff;

        // Light direction reflected about the normal
        let reflect_dir = (2.0 * normal.dot(light_dir) * normal - light_dir).normalize_or_zero();
        let spec = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess);
        specular += light.intensity * material.ks * spec;
    }

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_on_light() -> Light {
        // Light straight along +Z from the hit point at the origin
        Light::new(Vec3::new(0.0, 0.0, 10.0), Color::ONE)
    }

    #[test]
    fn test_ambient_only_without_lights() {
        let material = Material {
            ka: Color::new(0.2, 0.4, 0.6),
            kd: Color::ONE,
            ..Default::default()
        };

        let color = phong(Vec3::ZERO, Vec3::Z, &material, Vec3::Z, &[], Color::splat(0.5));
        assert!((color - Color::new(0.1, 0.2, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_diffuse_head_on() {
        let material = Material {
            kd: Color::new(0.8, 0.4, 0.2),
            ..Default::default()
        };

        // N.L = 1, no ambient, no specular
        let color = phong(
            Vec3::ZERO,
            Vec3::Z,
            &material,
            Vec3::Z,
            &[head_on_light()],
            Color::ZERO,
        );
        assert!((color - material.kd).length() < 1e-6);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let material = Material {
            kd: Color::ONE,
            ks: Color::ONE,
            shininess: 10.0,
            ..Default::default()
        };
        let behind = Light::new(Vec3::new(0.0, 0.0, -10.0), Color::ONE);

        let color = phong(Vec3::ZERO, Vec3::Z, &material, Vec3::Z, &[behind], Color::ZERO);
        // max(0, N.L) kills the diffuse term; the mirrored light direction
        // points away from the viewer so the specular term dies too
        assert!(color.length() < 1e-6);
    }

    #[test]
    fn test_specular_peaks_at_mirror_angle() {
        let material = Material {
            ks: Color::ONE,
            shininess: 50.0,
            ..Default::default()
        };
        let light = Light::new(Vec3::new(10.0, 0.0, 10.0), Color::ONE);

        // Viewer exactly along the mirrored light direction
        let mirror_view = Vec3::new(-1.0, 0.0, 1.0).normalize();
        let off_view = Vec3::new(-0.5, 0.5, 1.0).normalize();

        let at_mirror = phong(Vec3::ZERO, Vec3::Z, &material, mirror_view, &[light], Color::ZERO);
        let off_mirror = phong(Vec3::ZERO, Vec3::Z, &material, off_view, &[light], Color::ZERO);

        assert!(at_mirror.x > off_mirror.x);
        assert!((at_mirror.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_output_is_unclamped() {
        let material = Material {
            kd: Color::splat(2.0),
            ..Default::default()
        };
        let bright = Light::new(Vec3::new(0.0, 0.0, 10.0), Color::splat(3.0));

        let color = phong(Vec3::ZERO, Vec3::Z, &material, Vec3::Z, &[bright], Color::ZERO);
        assert!(color.x > 1.0);
    }
}
