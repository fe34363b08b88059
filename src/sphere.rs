//! Sphere primitive for ray tracing.
//!
//! Ray-sphere intersection uses the half-b form of the quadratic formula.

use std::sync::Arc;

use crate::error::KernelError;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Sphere primitive defined by center, radius, and material.
///
/// Immutable once built; the material is shared with any other primitive
/// that uses it.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails with [`KernelError::InvalidRadius`] unless the radius is finite
    /// and strictly positive.
    pub fn new(center: Point3, radius: f32, material: Arc<Material>) -> Result<Self, KernelError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(KernelError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Center point in world coordinates.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Radius, always positive.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Material of the surface.
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root first, the far one only if the near one is out of range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = r.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(r, root, p, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::{Color3, Vec3};

    fn unit_sphere() -> Sphere {
        let material = Arc::new(Material::lambertian(Color3::splat(0.5)));
        Sphere::new(Point3::ZERO, 1.0, material).unwrap()
    }

    fn forward() -> Interval {
        Interval::new(0.0, f32::INFINITY)
    }

    #[test]
    fn test_hit_from_outside() {
        let sphere = unit_sphere();
        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let rec = sphere.hit(&r, forward()).unwrap();
        assert_eq!(rec.t, 4.0);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, -1.0));
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, -1.0));
        assert!(rec.front_face);
    }

    #[test]
    fn test_hit_from_inside_flips_normal() {
        let sphere = unit_sphere();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let rec = sphere.hit(&r, forward()).unwrap();
        assert_eq!(rec.t, 1.0);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, 1.0));
        // Outward normal is +z; it must be turned back towards the origin.
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, -1.0));
        assert!(!rec.front_face);
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere();
        let r = Ray::new(Point3::new(5.0, 5.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&r, forward()).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        let sphere = unit_sphere();
        let r = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&r, forward()).is_none());
    }

    #[test]
    fn test_interval_bounds_are_inclusive() {
        let sphere = unit_sphere();
        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(sphere.hit(&r, Interval::new(4.0, 4.0)).unwrap().t, 4.0);
        assert_eq!(sphere.hit(&r, Interval::new(4.5, 6.0)).unwrap().t, 6.0);
        assert!(sphere.hit(&r, Interval::new(4.5, 5.9)).is_none());
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = unit_sphere();
        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 2.0));
        let rec = sphere.hit(&r, forward()).unwrap();
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, -1.0));
        assert!((rec.normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_offset_sphere_normal() {
        let material = Arc::new(Material::lambertian(Color3::ONE));
        let sphere = Sphere::new(Point3::new(0.0, 2.0, 0.0), 0.5, material).unwrap();
        let r = Ray::new(Point3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, forward()).unwrap();
        assert_eq!(rec.t, 4.5);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hit_is_idempotent() {
        let sphere = unit_sphere();
        let r = Ray::new(Point3::new(0.3, -0.2, -5.0), Vec3::new(0.01, 0.05, 1.0));
        let a = sphere.hit(&r, forward()).unwrap();
        let b = sphere.hit(&r, forward()).unwrap();
        assert_eq!(a.t.to_bits(), b.t.to_bits());
        assert_eq!(a.p, b.p);
        assert_eq!(a.normal, b.normal);
        assert_eq!(a.front_face, b.front_face);
        assert!(std::ptr::eq(a.material, b.material));
    }

    #[test]
    fn test_rejects_bad_radius() {
        let material = Arc::new(Material::dielectric(1.5));
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                Sphere::new(Point3::ZERO, radius, material.clone()),
                Err(KernelError::InvalidRadius(_))
            ));
        }
    }
}
