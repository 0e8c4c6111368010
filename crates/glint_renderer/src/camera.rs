//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// Camera generating one ray per pixel through the pixel center.
///
/// The viewport is 2 units tall at the focal plane (a focal distance of
/// 1 spans [-1, 1] vertically), scaled horizontally by the aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,

    /// Distance from the eye to the focal plane
    focal_distance: f32,

    // Cached computed values (set by initialize())
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 500,
            image_height: 500,
            eye: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            focal_distance: 1.0,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, eye: Vec3, look_at: Vec3, up: Vec3) -> Self {
        self.eye = eye;
        self.look_at = look_at;
        self.up = up;
        self
    }

    /// Set the focal distance.
    pub fn with_focal_distance(mut self, focal_distance: f32) -> Self {
        self.focal_distance = focal_distance;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        // Orthonormal camera basis
        let w = (self.eye - self.look_at).normalize();
        let u = self.up.cross(w).normalize();
        let v = w.cross(u);

        let viewport_height = 2.0;
        let viewport_width = viewport_height * (self.image_width as f32 / self.image_height as f32);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left =
            self.eye - self.focal_distance * w - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Generate the ray through the center of pixel (i, j).
    ///
    /// Deterministic: the same pixel always yields the same ray. The
    /// direction is normalized so shading formulas can assume unit length.
    pub fn ray_for(&self, i: u32, j: u32) -> Ray {
        let pixel = self.pixel00_loc
            + (i as f32) * self.pixel_delta_u
            + (j as f32) * self.pixel_delta_v;

        Ray::new(self.eye, (pixel - self.eye).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
