//! Procedural torus tessellation.
//!
//! A torus is not a runtime primitive of its own: it is generated once at
//! construction time as an ordinary triangle [`Mesh`] and intersected like
//! any other mesh afterwards.

use std::f32::consts::TAU;

use glint_math::Vec3;

use crate::material::Material;
use crate::mesh::Mesh;

/// Tessellate a torus into a triangle mesh.
///
/// `major_radius` is the distance from the torus center to the tube
/// center, `minor_radius` the tube radius. `num_sides` steps the angle
/// around the major circle, `num_rings` the angle around the tube. Both
/// are clamped to at least 3 so the surface stays closed.
///
/// Each quad of the wrapped parameter grid is split into two triangles
/// with consistent winding.
pub fn build_torus(
    center: Vec3,
    major_radius: f32,
    minor_radius: f32,
    num_sides: u32,
    num_rings: u32,
    material: Material,
) -> Mesh {
    let num_sides = num_sides.max(3);
    let num_rings = num_rings.max(3);

    let mut positions = Vec::with_capacity((num_sides * num_rings) as usize);
    let mut indices = Vec::with_capacity((num_sides * num_rings * 6) as usize);

    for i in 0..num_sides {
        let theta = i as f32 * TAU / num_sides as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for j in 0..num_rings {
            let phi = j as f32 * TAU / num_rings as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let ring = major_radius + minor_radius * cos_phi;
            positions.push(center + Vec3::new(ring * cos_theta, ring * sin_theta, minor_radius * sin_phi));
        }
    }

    // Quad grid wraps in both directions (modulo the step counts)
    for i in 0..num_sides {
        for j in 0..num_rings {
            let next_i = (i + 1) % num_sides;
            let next_j = (j + 1) % num_rings;

            let i0 = i * num_rings + j;
            let i1 = next_i * num_rings + j;
            let i2 = i * num_rings + next_j;
            let i3 = next_i * num_rings + next_j;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i1, i3, i2]);
        }
    }

    // Indices are in range by construction
    Mesh {
        positions,
        indices,
        material,
    }
}
