//! Phong material definition.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// A Phong material: per-channel coefficients plus shininess and
/// index of refraction.
///
/// Coefficients are taken as-is; no validation or clamping happens here.
/// Clamping to the displayable range is the pixel writer's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse coefficient
    pub kd: Color,
    /// Specular coefficient
    pub ks: Color,
    /// Ambient coefficient
    pub ka: Color,
    /// Reflective coefficient
    pub kr: Color,
    /// Transmissive coefficient
    pub kt: Color,
    /// Shininess exponent for the specular highlight
    pub shininess: f32,
    /// Index of refraction (1.0 = no bending)
    pub ior: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kd: Color::ZERO,
            ks: Color::ZERO,
            ka: Color::ZERO,
            kr: Color::ZERO,
            kt: Color::ZERO,
            shininess: 0.0,
            ior: 1.0,
        }
    }
}

impl Material {
    /// Create a material from the full Phong coefficient set.
    pub fn new(
        kd: Color,
        ks: Color,
        ka: Color,
        kr: Color,
        kt: Color,
        shininess: f32,
        ior: f32,
    ) -> Self {
        Self {
            kd,
            ks,
            ka,
            kr,
            kt,
            shininess,
            ior,
        }
    }

    /// A matte material: diffuse color only, with a small ambient term.
    pub fn matte(kd: Color) -> Self {
        Self {
            kd,
            ka: Color::splat(0.1),
            shininess: 10.0,
            ..Default::default()
        }
    }

    /// A mirror-like material: strong specular and reflective terms.
    pub fn mirror(kd: Color, kr: Color, shininess: f32) -> Self {
        Self {
            kd,
            ks: Color::ONE,
            ka: Color::splat(0.1),
            kr,
            shininess,
            ..Default::default()
        }
    }

    /// A glass-like material: transmissive with the given index of refraction.
    pub fn glass(kt: Color, ior: f32) -> Self {
        Self {
            ks: Color::splat(0.1),
            kr: Color::splat(0.1),
            kt,
            shininess: 100.0,
            ior,
            ..Default::default()
        }
    }

    /// True if any reflective channel is non-zero.
    pub fn is_reflective(&self) -> bool {
        self.kr.dot(Color::ONE) > 0.0
    }

    /// True if any transmissive channel is non-zero.
    pub fn is_transmissive(&self) -> bool {
        self.kt.dot(Color::ONE) > 0.0
    }
}
