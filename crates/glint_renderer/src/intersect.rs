//! Ray-primitive intersection.
//!
//! Every primitive answers the same query: the nearest hit of a ray
//! within an acceptable distance range, or nothing. Intersection is a
//! pure test; degenerate geometry (zero-area triangles, zero-length
//! normals) reads as "no hit", never as an error.

use glint_core::{Material, Mesh, Plane, Scene, Sphere};
use glint_math::{DVec3, Interval, Ray, Vec3};

/// Minimum accepted hit distance, guards against self-intersection.
pub const MIN_HIT_DISTANCE: f32 = 1e-4;

/// A ray whose direction is closer than this to perpendicular with a
/// surface normal counts as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Tolerance for the triangle area-ratio test: minimum triangle area and
/// allowed deviation of the ratio sum from 1. The test runs in f64, where
/// this tolerance is meaningful.
pub const AREA_EPSILON: f64 = 1e-6;

/// Record of the nearest ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Distance along the ray where the hit occurs
    pub t: f32,
    /// Outward surface normal at the hit point (unit length)
    pub normal: Vec3,
    /// Material at the hit point
    pub material: Material,
}

/// Trait for primitives that can be intersected by rays.
pub trait Intersect {
    /// Test for the nearest hit within `t_range`.
    fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<Intersection>;
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<Intersection> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in the acceptable range, else the far one
        let mut root = (h - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t_range.surrounds(root) {
                return None;
            }
        }

        // Outward geometric normal. Not flipped toward the ray: the
        // tracer decides entry/exit from the sign of incident . normal.
        let normal = (ray.at(root) - self.center).normalize_or_zero();

        Some(Intersection {
            t: root,
            normal,
            material: self.material,
        })
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<Intersection> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if !t_range.surrounds(t) {
            return None;
        }

        Some(Intersection {
            t,
            normal: self.normal,
            material: self.material,
        })
    }
}

/// Triangle area: half the cross-product magnitude.
fn triangle_area(x: DVec3, y: DVec3, z: DVec3) -> f64 {
    (y - x).cross(z - x).length() / 2.0
}

/// Ray-triangle test: intersect the supporting plane, then classify the
/// hit point by sub-triangle area ratios.
///
/// This is the area-ratio formulation, not a signed barycentric test; the
/// ratios are always non-negative, so the ratio-sum tolerance carries the
/// whole inside/outside decision. Runs in f64 because the 1e-6 sum
/// tolerance is below f32 round-off for typical meshes.
fn triangle_intersect(a: Vec3, b: Vec3, c: Vec3, ray: &Ray, t_range: Interval) -> Option<f32> {
    let (a, b, c) = (a.as_dvec3(), b.as_dvec3(), c.as_dvec3());
    let origin = ray.origin.as_dvec3();
    let direction = ray.direction.as_dvec3();

    let normal = (b - a).cross(c - a);
    let denom = direction.dot(normal);
    if denom.abs() <= PARALLEL_EPSILON as f64 {
        return None;
    }

    let t = (a - origin).dot(normal) / denom;
    let t32 = t as f32;
    if !t_range.surrounds(t32) {
        return None;
    }

    let area = triangle_area(a, b, c);
    if area <= AREA_EPSILON {
        // Degenerate triangle, treat as a miss rather than divide by ~0
        return None;
    }

    let p = origin + direction * t;
    let alpha = triangle_area(p, b, c) / area;
    let beta = triangle_area(p, a, c) / area;
    let gamma = triangle_area(p, a, b) / area;

    let inside = alpha >= 0.0
        && beta >= 0.0
        && gamma >= 0.0
        && (alpha + beta + gamma - 1.0).abs() < AREA_EPSILON;

    inside.then_some(t32)
}

impl Intersect for Mesh {
    /// Nearest hit over the triangle list. Linear scan, no spatial index.
    fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<Intersection> {
        let mut closest = t_range.max;
        let mut best: Option<(f32, [Vec3; 3])> = None;

        for [a, b, c] in self.triangles() {
            let range = Interval::new(t_range.min, closest);
            if let Some(t) = triangle_intersect(a, b, c, ray, range) {
                closest = t;
                best = Some((t, [a, b, c]));
            }
        }

        best.map(|(t, [a, b, c])| Intersection {
            t,
            normal: (b - a).cross(c - a).normalize_or_zero(),
            material: self.material,
        })
    }
}

/// Find the globally nearest hit of `ray` across the whole scene.
///
/// Fixed scan order: spheres, then planes, then meshes (tori are meshes).
/// Only a strictly closer hit replaces the current best, so ties resolve
/// to the first primitive in scan order, deterministically.
pub fn find_closest_intersection(ray: &Ray, scene: &Scene) -> Option<Intersection> {
    let mut closest = f32::INFINITY;
    let mut best = None;

    for sphere in &scene.spheres {
        if let Some(hit) = sphere.intersect(ray, Interval::new(MIN_HIT_DISTANCE, closest)) {
            closest = hit.t;
            best = Some(hit);
        }
    }

    for plane in &scene.planes {
        if let Some(hit) = plane.intersect(ray, Interval::new(MIN_HIT_DISTANCE, closest)) {
            closest = hit.t;
            best = Some(hit);
        }
    }

    for mesh in &scene.meshes {
        if let Some(hit) = mesh.intersect(ray, Interval::new(MIN_HIT_DISTANCE, closest)) {
            closest = hit.t;
            best = Some(hit);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Color;

    fn full_range() -> Interval {
        Interval::new(MIN_HIT_DISTANCE, f32::INFINITY)
    }

    #[test]
    fn test_sphere_head_on() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray, full_range()).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(sphere.intersect(&ray, full_range()).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 0.5, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Both roots negative
        assert!(sphere.intersect(&ray, full_range()).is_none());
    }

    #[test]
    fn test_sphere_from_inside_takes_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray, full_range()).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
        // Outward normal points away from the ray origin here
        assert!((hit.normal - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_plane_hit() {
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        let hit = plane.intersect(&ray, full_range()).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_parallel() {
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert!(plane.intersect(&ray, full_range()).is_none());
    }

    #[test]
    fn test_plane_behind() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, Material::default());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        assert!(plane.intersect(&ray, full_range()).is_none());
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = triangle_intersect(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            &ray,
            full_range(),
        );

        assert!((t.unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_outside() {
        let ray = Ray::new(Vec3::new(5.0, 5.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let t = triangle_intersect(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            &ray,
            full_range(),
        );

        assert!(t.is_none());
    }

    #[test]
    fn test_degenerate_triangle_is_a_miss() {
        // All three vertices collinear: zero area
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = triangle_intersect(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            &ray,
            full_range(),
        );

        assert!(t.is_none());
    }

    #[test]
    fn test_mesh_nearest_triangle_wins() {
        // Two parallel triangles, the ray hits both
        let positions = vec![
            Vec3::new(-1.0, -1.0, -2.0),
            Vec3::new(1.0, -1.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        ];
        let mesh = Mesh::new(positions, vec![0, 1, 2, 3, 4, 5], Material::default()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = mesh.intersect(&ray, full_range()).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_scene_scan_picks_global_nearest() {
        let mut scene = Scene::new(Color::ZERO);
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default()));
        scene.add_plane(Plane::new(Vec3::new(0.0, 0.0, -2.0), Vec3::Z, Material::default()));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = find_closest_intersection(&ray, &scene).unwrap();

        // Plane at t=2 is closer than sphere at t=4
        assert!((hit.t - 2.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_tie_break_is_scan_order() {
        // Sphere and plane both intersect at exactly t=1; the sphere is
        // scanned first and must win.
        let sphere_material = Material::matte(Color::new(1.0, 0.0, 0.0));
        let plane_material = Material::matte(Color::new(0.0, 1.0, 0.0));

        let mut scene = Scene::new(Color::ZERO);
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, sphere_material));
        scene.add_plane(Plane::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, plane_material));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        for _ in 0..10 {
            let hit = find_closest_intersection(&ray, &scene).unwrap();
            assert!((hit.t - 1.0).abs() < 1e-6);
            assert_eq!(hit.material.kd, sphere_material.kd);
        }
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new(Color::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(find_closest_intersection(&ray, &scene).is_none());
    }
}
