//! Triangle mesh geometry.
//!
//! A mesh is a flat vertex list plus triangle index triples sharing one
//! material. Intersection is a linear scan over the triangles; there is
//! deliberately no spatial index.

use glint_math::Vec3;
use thiserror::Error;

use crate::material::Material;

/// Errors from mesh construction.
#[derive(Error, Debug, PartialEq)]
pub enum MeshError {
    #[error("index count {index_count} is not a multiple of 3")]
    PartialTriangle { index_count: usize },

    #[error("triangle index {index} out of bounds (vertex count {vertex_count})")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// A triangle mesh with a shared material.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Material shared by every triangle
    pub material: Material,
}

impl Mesh {
    /// Create a new mesh from positions and triangle indices.
    ///
    /// Fails fast on malformed input: a dangling index or a partial
    /// triangle is rejected here rather than misbehaving during tracing.
    pub fn new(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        material: Material,
    ) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle {
                index_count: indices.len(),
            });
        }

        let vertex_count = positions.len();
        for &index in &indices {
            if index as usize >= vertex_count {
                return Err(MeshError::IndexOutOfBounds {
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            positions,
            indices,
            material,
        })
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over triangles as [v0, v1, v2] vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> (Vec<Vec3>, Vec<u32>) {
        (
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_mesh_creation() {
        let (positions, indices) = unit_triangle();
        let mesh = Mesh::new(positions, indices, Material::default()).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_dangling_index_rejected() {
        let (positions, _) = unit_triangle();
        let result = Mesh::new(positions, vec![0, 1, 3], Material::default());

        assert_eq!(
            result.unwrap_err(),
            MeshError::IndexOutOfBounds {
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_partial_triangle_rejected() {
        let (positions, _) = unit_triangle();
        let result = Mesh::new(positions, vec![0, 1], Material::default());

        assert_eq!(
            result.unwrap_err(),
            MeshError::PartialTriangle { index_count: 2 }
        );
    }

    #[test]
    fn test_triangles_iterator() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)];
        let indices = vec![0, 1, 2, 1, 3, 2];
        let mesh = Mesh::new(positions.clone(), indices, Material::default()).unwrap();

        let triangles: Vec<_> = mesh.triangles().collect();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0], [positions[0], positions[1], positions[2]]);
        assert_eq!(triangles[1], [positions[1], positions[3], positions[2]]);
    }
}
