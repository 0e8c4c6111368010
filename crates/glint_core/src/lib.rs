//! Glint Core - scene data for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Plane`, `Mesh`, `Light`, `Material`
//! - **Procedural geometry**: `build_torus` (torus tessellated into a `Mesh`)
//! - **Scene descriptions**: JSON loading via `describe::load_scene`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::describe::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} triangles",
//!     scene.spheres.len(),
//!     scene.triangle_count());
//! ```

pub mod describe;
pub mod light;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod torus;

// Re-export commonly used types
pub use describe::{load_scene, DescribeError, SceneDescription};
pub use light::Light;
pub use material::{Color, Material};
pub use mesh::{Mesh, MeshError};
pub use scene::{Plane, Scene, Sphere};
pub use torus::build_torus;
