//! Glint renderer - recursive Whitted ray tracing.
//!
//! The pipeline: a pinhole [`Camera`] generates one primary ray per
//! pixel, [`find_closest_intersection`] scans the scene linearly for the
//! nearest hit, [`phong`] computes the local color and [`trace`] spawns
//! reflected and refracted secondary rays up to a fixed depth bound.

mod camera;
mod intersect;
mod renderer;
mod shade;
mod tracer;

pub use camera::Camera;
pub use intersect::{
    find_closest_intersection, Intersect, Intersection, AREA_EPSILON, MIN_HIT_DISTANCE,
    PARALLEL_EPSILON,
};
pub use renderer::{color_to_rgba, render, render_pixel, ImageBuffer};
pub use shade::phong;
pub use tracer::{reflect, refract, trace, RenderConfig, RAY_BIAS};

/// Re-export common math and scene types
pub use glint_core::{Color, Light, Material, Mesh, Plane, Scene, Sphere};
pub use glint_math::{Interval, Ray, Vec3};
