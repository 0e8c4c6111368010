//! Whole-image rendering.
//!
//! Each pixel's trace is independent and the scene is immutable during a
//! pass, so rows are rendered in parallel with rayon. This is purely a
//! performance optimization; output is identical to a serial loop.

use std::time::Instant;

use glint_core::{Color, Scene};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::tracer::{trace, RenderConfig};

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> Color {
    let ray = camera.ray_for(x, y);
    trace(&ray, scene, config, 0)
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major pixel colors
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to row-major RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Convert a color to 8-bit RGBA: clamp each channel to [0, 1], scale to
/// 255. Always fully opaque, no gamma correction.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u8;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u8;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u8;
    [r, g, b, 255]
}

/// Render the scene into an image buffer, one trace per pixel.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let width = image.width;

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, scene, config, x as u32, y as u32);
            }
        });

    log::info!(
        "Rendered {}x{} ({} primitives, {} triangles) in {:.2?}",
        image.width,
        image.height,
        scene.primitive_count(),
        scene.triangle_count(),
        start.elapsed(),
    );

    image
}
