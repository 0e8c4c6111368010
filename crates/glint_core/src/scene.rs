//! Scene representation for the ray tracer.
//!
//! A scene owns homogeneous lists of each primitive kind plus the light
//! list and ambient color. During a render pass it is read-only; geometry
//! changes go through [`Scene::transformed`], which returns a new scene so
//! render passes stay reentrant.

use glam::Mat4;
use glint_math::{Mat4Ext, Vec3};

use crate::light::Light;
use crate::material::{Color, Material};
use crate::mesh::Mesh;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius is clamped to be non-negative.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized at construction; a
    /// zero-length normal collapses to the zero vector, which no ray can
    /// hit (the parallel test rejects it).
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

/// A complete scene: primitives, lights and the ambient term.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
    pub meshes: Vec<Mesh>,
    pub lights: Vec<Light>,
    pub ambient: Color,
}

impl Scene {
    /// Create an empty scene with the given ambient color.
    pub fn new(ambient: Color) -> Self {
        Self {
            ambient,
            ..Default::default()
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_plane(&mut self, plane: Plane) {
        self.planes.push(plane);
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Total triangle count across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.triangle_count()).sum()
    }

    /// Total primitive count (spheres + planes + meshes).
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.meshes.len()
    }

    /// Return a copy of the scene with the affine `matrix` applied to all
    /// position-like geometry: sphere centers, plane points and every mesh
    /// vertex. Plane normals use only the linear part of the matrix and
    /// are renormalized. Lights, materials and the ambient term are
    /// unchanged.
    pub fn transformed(&self, matrix: Mat4) -> Scene {
        let mut scene = self.clone();

        for sphere in &mut scene.spheres {
            sphere.center = matrix.transform_point3(sphere.center);
        }

        for plane in &mut scene.planes {
            plane.point = matrix.transform_point3(plane.point);
            plane.normal = matrix.transform_vector3(plane.normal).normalize_or_zero();
        }

        for mesh in &mut scene.meshes {
            for position in &mut mesh.positions {
                *position = matrix.transform_point3(*position);
            }
        }

        scene
    }
}
