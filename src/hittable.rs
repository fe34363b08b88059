//! Ray-object intersection.
//!
//! Defines the [`Hittable`] trait for geometric primitives, the
//! [`HitRecord`] a successful test produces, and [`HittableList`], a flat
//! scene searched linearly for the nearest hit.

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
///
/// Borrows the material of the surface that was hit; the record never owns
/// it and cannot outlive the scene.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Unit surface normal, always facing against the incident ray
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub t: f32,
    /// True if the ray arrived from the outside of the surface
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the geometric outward normal, orienting it
    /// against the incident ray.
    pub fn new(r: &Ray, t: f32, p: Point3, outward_normal: Vec3, material: &'a Material) -> Self {
        let (front_face, normal) = face_normal(r, outward_normal);
        Self {
            p,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Orient a unit outward normal so it points against `r`.
///
/// Returns `(front_face, normal)`.
pub fn face_normal(r: &Ray, outward_normal: Vec3) -> (bool, Vec3) {
    let front_face = r.direction.dot(outward_normal) < 0.0;
    let normal = if front_face {
        outward_normal
    } else {
        -outward_normal
    };
    (front_face, normal)
}

/// Objects that can be intersected by rays.
///
/// Implementations are shared read-only between render threads.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with `ray_t.min <= t <= ray_t.max`, or `None` on
    /// a miss.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Collection of objects forming a scene.
///
/// Intersection is a linear scan over every object.
#[derive(Default)]
pub struct HittableList {
    /// Boxed scene objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every object.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let search = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = object.hit(r, search) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;
    use crate::vec3::Color3;
    use std::sync::Arc;

    fn grey() -> Arc<Material> {
        Arc::new(Material::lambertian(Color3::splat(0.5)))
    }

    #[test]
    fn test_face_normal() {
        let n = Vec3::new(0.0, 0.0, -1.0);
        let towards = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(face_normal(&towards, n), (true, n));
        let away = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(face_normal(&away, n), (false, -n));
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(world.is_empty());
        assert!(world.hit(&r, Interval::new(0.0, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_list_returns_nearest_hit() {
        let near_material = Arc::new(Material::metal(Color3::ONE, 0.0));
        let mut world = HittableList::new();
        // Insert the far sphere first so order cannot decide the result.
        world.add(Sphere::new(Point3::new(0.0, 0.0, 10.0), 1.0, grey()).unwrap());
        world.add(Sphere::new(Point3::new(0.0, 0.0, 4.0), 1.0, near_material.clone()).unwrap());
        world.add(Sphere::new(Point3::new(0.0, 0.0, 20.0), 1.0, grey()).unwrap());
        assert_eq!(world.len(), 3);

        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let rec = world.hit(&r, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 3.0);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, 3.0));
        assert!(std::ptr::eq(rec.material, near_material.as_ref()));
    }

    #[test]
    fn test_list_respects_interval() {
        let mut world = HittableList::new();
        world.add(Sphere::new(Point3::new(0.0, 0.0, 4.0), 1.0, grey()).unwrap());
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(world.hit(&r, Interval::new(0.001, 2.0)).is_none());
        // Past the front face only the back face remains.
        let rec = world.hit(&r, Interval::new(3.5, 10.0)).unwrap();
        assert_eq!(rec.t, 5.0);
        assert!(!rec.front_face);
    }

    #[test]
    fn test_clear() {
        let mut world = HittableList::new();
        world.add(Sphere::new(Point3::ZERO, 1.0, grey()).unwrap());
        world.clear();
        assert!(world.is_empty());
    }
}
