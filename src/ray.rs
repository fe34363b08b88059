//! Rays for intersection testing.
//!
//! A ray is the half-line r(t) = origin + t * direction.

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point, the camera for primary rays or a surface point for
    /// scattered rays.
    pub origin: Point3,

    /// Direction of travel. Not required to be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}
