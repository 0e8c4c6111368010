//! Point light sources.

use crate::material::Color;
use glint_math::Vec3;

/// A point light with position and RGB intensity.
///
/// Lights are scene-static and read-only during a render pass. No shadow
/// rays are cast; every light contributes regardless of occluders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
