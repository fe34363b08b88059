//! Three-component vector algebra.
//!
//! A single [`Vec3`] type serves as a position ([`Point3`]), a direction and
//! an RGB color ([`Color3`]). Every operator works strictly per axis: an
//! output component only ever depends on the same component of its inputs.

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Absolute per-axis threshold used by [`Vec3::near_zero`].
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// 3D vector of `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// First component (red channel when used as a color).
    pub x: f32,
    /// Second component (green channel when used as a color).
    pub y: f32,
    /// Third component (blue channel when used as a color).
    pub z: f32,
}

/// A position in world space.
pub type Point3 = Vec3;

/// A linear RGB color. `x`, `y`, `z` hold red, green and blue.
///
/// Channels are expected in `[0, 1]` before display conversion, but the type
/// itself does not enforce a range: accumulated sample sums grow past 1.
pub type Color3 = Vec3;

impl Vec3 {
    /// All components zero.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// All components one.
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// Create a vector from its three components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector with every component set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Red channel of a color.
    pub fn r(&self) -> f32 {
        self.x
    }

    /// Green channel of a color.
    pub fn g(&self) -> f32 {
        self.y
    }

    /// Blue channel of a color.
    pub fn b(&self) -> f32 {
        self.z
    }

    /// Dot product.
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product `self × rhs`.
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// True when every component is within [`NEAR_ZERO_EPSILON`] of zero.
    ///
    /// Diffuse scattering uses this to catch a random direction that cancels
    /// the surface normal out.
    pub fn near_zero(self) -> bool {
        self.x.abs() < NEAR_ZERO_EPSILON
            && self.y.abs() < NEAR_ZERO_EPSILON
            && self.z.abs() < NEAR_ZERO_EPSILON
    }

    /// The vector scaled to unit length.
    ///
    /// The length must be non-zero. Callers guarantee this by construction
    /// (sampling rejects degenerate draws); debug builds assert it. Use
    /// [`Vec3::try_unit_vector`] when the input may be degenerate.
    pub fn unit_vector(self) -> Vec3 {
        let len = self.length();
        debug_assert!(
            len > 0.0 && len.is_finite(),
            "unit_vector of a vector with length {len}"
        );
        self / len
    }

    /// [`Vec3::unit_vector`], or `None` when the length is zero or not finite.
    pub fn try_unit_vector(self) -> Option<Vec3> {
        let len = self.length();
        (len > 0.0 && len.is_finite()).then(|| self / len)
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Free-function form of [`Vec3::dot`].
pub fn dot(u: Vec3, v: Vec3) -> f32 {
    u.dot(v)
}

/// Free-function form of [`Vec3::cross`].
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

/// Free-function form of [`Vec3::unit_vector`].
pub fn unit_vector(v: Vec3) -> Vec3 {
    v.unit_vector()
}

/// Mirror `v` about the plane with unit normal `n`.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract unit direction `uv` through a surface with unit normal `n`
/// (Snell's law), `etai_over_etat` being the ratio of refractive indices.
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

// Vector (op) vector, vector (op) scalar and their compound forms. Each arm
// spells out all three axes so no component can read from a sibling.
macro_rules! impl_componentwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $Op for Vec3 {
            type Output = Vec3;
            fn $op(self, rhs: Vec3) -> Vec3 {
                Vec3::new(self.x $sym rhs.x, self.y $sym rhs.y, self.z $sym rhs.z)
            }
        }

        impl $Op<f32> for Vec3 {
            type Output = Vec3;
            fn $op(self, rhs: f32) -> Vec3 {
                Vec3::new(self.x $sym rhs, self.y $sym rhs, self.z $sym rhs)
            }
        }

        impl $OpAssign for Vec3 {
            fn $op_assign(&mut self, rhs: Vec3) {
                *self = *self $sym rhs;
            }
        }

        impl $OpAssign<f32> for Vec3 {
            fn $op_assign(&mut self, rhs: f32) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_componentwise!(Add, add, AddAssign, add_assign, +);
impl_componentwise!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise!(Div, div, DivAssign, div_assign, /);

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, axis: usize) -> &f32 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 axis index out of range: {axis}"),
        }
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Vec3 {
        iter.fold(Vec3::ZERO, |acc, v| acc + v)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_scalar_add_sub_are_per_axis() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(v - 1.0, Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_compound_assignment_is_per_axis() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += 1.0;
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= 2.0;
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v += Vec3::new(10.0, 20.0, 30.0);
        assert_eq!(v, Vec3::new(10.0, 21.0, 32.0));
        v -= Vec3::new(10.0, 20.0, 30.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vec3::new(0.0, 3.0, 6.0));
        v /= 3.0;
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(dot(a, b), 32.0);
        assert_eq!(
            cross(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            Vec3::new(0.0, 0.0, 1.0)
        );
        let c = a.cross(b);
        assert!(c.dot(a).abs() < EPS);
        assert!(c.dot(b).abs() < EPS);
    }

    #[test]
    fn test_length() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn test_unit_vector_has_unit_length() {
        let samples = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1e-3, 2e-3, 5e-4),
            Vec3::new(1e4, -2e4, 3e4),
            Vec3::new(0.0, 0.0, -7.0),
        ];
        for v in samples {
            assert!((unit_vector(v).length() - 1.0).abs() < EPS, "{v}");
        }
    }

    #[test]
    fn test_try_unit_vector_rejects_zero() {
        assert_eq!(Vec3::ZERO.try_unit_vector(), None);
        assert_eq!(
            Vec3::new(0.0, 2.0, 0.0).try_unit_vector(),
            Some(Vec3::new(0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_near_zero_checks_every_axis() {
        assert!(Vec3::new(1e-9, -1e-9, 1e-9).near_zero());
        assert!(!Vec3::new(0.0, 0.0, -1.0).near_zero());
        assert!(!Vec3::new(0.0, 0.0, 1.0).near_zero());
        assert!(!Vec3::new(-1.0, 0.0, 0.0).near_zero());
        assert!(!Vec3::new(0.0, 1e-3, 0.0).near_zero());
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let dirs = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.3, 0.7, -2.0),
            Vec3::new(-4.0, -0.5, 1.5),
        ];
        for v in dirs {
            let r = reflect(v, n);
            assert!((r.dot(n) + v.dot(n)).abs() < EPS);
            assert!((r.length() - v.length()).abs() < EPS);
        }

        let tilted = Vec3::new(1.0, 1.0, 1.0).unit_vector();
        let v = Vec3::new(0.2, -3.0, 0.9);
        assert!((reflect(v, tilted).dot(tilted) + v.dot(tilted)).abs() < 1e-4);
    }

    #[test]
    fn test_refract_straight_through_at_normal_incidence() {
        let n = Vec3::new(0.0, 0.0, 1.0);
        let uv = Vec3::new(0.0, 0.0, -1.0);
        assert!(approx(refract(uv, n, 1.0 / 1.5), uv));
    }

    #[test]
    fn test_refract_matching_indices_keeps_direction() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let uv = Vec3::new(1.0, -1.0, 0.0).unit_vector();
        assert!(approx(refract(uv, n, 1.0), uv));
    }

    #[test]
    fn test_index_and_sum() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((v[0], v[1], v[2]), (1.0, 2.0, 3.0));
        let total: Vec3 = vec![v, v, Vec3::ONE].into_iter().sum();
        assert_eq!(total, Vec3::new(3.0, 5.0, 7.0));
    }

    #[test]
    fn test_color_accessors() {
        let c: Color3 = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!((c.r(), c.g(), c.b()), (0.1, 0.2, 0.3));
    }
}
