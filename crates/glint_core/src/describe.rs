//! Scene description files.
//!
//! A description is a plain JSON document listing spheres, planes, meshes,
//! tori and lights. Colors and positions are `[f32; 3]` arrays so the
//! format stays independent of the math types. Conversion to a [`Scene`]
//! validates mesh indices fail-fast.

use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::Light;
use crate::material::Material;
use crate::mesh::{Mesh, MeshError};
use crate::scene::{Plane, Scene, Sphere};
use crate::torus::build_torus;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}

/// Material coefficients as they appear in description files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    pub kd: [f32; 3],
    pub ks: [f32; 3],
    pub ka: [f32; 3],
    pub kr: [f32; 3],
    pub kt: [f32; 3],
    pub shininess: f32,
    pub ior: f32,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        Self {
            kd: [0.0; 3],
            ks: [0.0; 3],
            ka: [0.0; 3],
            kr: [0.0; 3],
            kt: [0.0; 3],
            shininess: 0.0,
            ior: 1.0,
        }
    }
}

impl From<MaterialDescription> for Material {
    fn from(desc: MaterialDescription) -> Self {
        Material::new(
            vec3(desc.kd),
            vec3(desc.ks),
            vec3(desc.ka),
            vec3(desc.kr),
            vec3(desc.kt),
            desc.shininess,
            desc.ior,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneDescription {
    pub point: [f32; 3],
    pub normal: [f32; 3],
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshDescription {
    pub vertices: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorusDescription {
    pub center: [f32; 3],
    pub major_radius: f32,
    pub minor_radius: f32,
    pub num_sides: u32,
    pub num_rings: u32,
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    pub intensity: [f32; 3],
}

/// A full scene description document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub spheres: Vec<SphereDescription>,
    pub planes: Vec<PlaneDescription>,
    pub meshes: Vec<MeshDescription>,
    pub tori: Vec<TorusDescription>,
    pub lights: Vec<LightDescription>,
    pub ambient: [f32; 3],
}

impl SceneDescription {
    /// Build a [`Scene`] from this description.
    ///
    /// Tori are tessellated here and become ordinary meshes, appended
    /// after the explicit mesh list so scan order stays deterministic.
    pub fn build(self) -> Result<Scene, DescribeError> {
        let mut scene = Scene::new(vec3(self.ambient));

        for sphere in self.spheres {
            scene.add_sphere(Sphere::new(
                vec3(sphere.center),
                sphere.radius,
                sphere.material.into(),
            ));
        }

        for plane in self.planes {
            scene.add_plane(Plane::new(
                vec3(plane.point),
                vec3(plane.normal),
                plane.material.into(),
            ));
        }

        for mesh in self.meshes {
            let positions = mesh.vertices.into_iter().map(vec3).collect();
            let indices = mesh
                .triangles
                .into_iter()
                .flat_map(|tri| tri.into_iter())
                .collect();
            scene.add_mesh(Mesh::new(positions, indices, mesh.material.into())?);
        }

        for torus in self.tori {
            scene.add_mesh(build_torus(
                vec3(torus.center),
                torus.major_radius,
                torus.minor_radius,
                torus.num_sides,
                torus.num_rings,
                torus.material.into(),
            ));
        }

        for light in self.lights {
            scene.add_light(Light::new(vec3(light.position), vec3(light.intensity)));
        }

        Ok(scene)
    }
}

/// Load a scene description file and build the scene.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, DescribeError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let description: SceneDescription = serde_json::from_str(&text)?;
    let scene = description.build()?;

    log::info!(
        "Loaded scene from {}: {} spheres, {} planes, {} meshes ({} triangles), {} lights",
        path.display(),
        scene.spheres.len(),
        scene.planes.len(),
        scene.meshes.len(),
        scene.triangle_count(),
        scene.lights.len(),
    );

    Ok(scene)
}
