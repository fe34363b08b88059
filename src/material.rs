//! Material system for ray tracing.
//!
//! Three surface types: Lambertian (diffuse), Metal (specular) and
//! Dielectric (transparent). A material either absorbs an incoming ray or
//! scatters it into a new ray with an attenuation color.

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{reflect, refract, Color3};

/// Outcome of a ray that was not absorbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Color the continuing path is multiplied by.
    pub attenuation: Color3,
    /// Ray continuing the path from the hit point.
    pub scattered: Ray,
}

/// Surface materials.
///
/// Built once during scene setup and shared read-only by every primitive
/// that uses it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color3,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color3,
        /// Surface roughness in `[0, 1]` (0 = mirror).
        fuzz: f32,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction relative to the enclosing medium (glass ~1.5).
        refraction_index: f32,
    },
}

impl Material {
    /// Diffuse material.
    pub fn lambertian(albedo: Color3) -> Self {
        Material::Lambertian { albedo }
    }

    /// Metal; `fuzz` is clamped to `[0, 1]`.
    pub fn metal(albedo: Color3, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Clear dielectric with the given index of refraction.
    pub fn dielectric(refraction_index: f32) -> Self {
        Material::Dielectric { refraction_index }
    }

    /// Scatter `r_in` at the hit described by `rec`.
    ///
    /// Returns `None` if the ray is absorbed. Draws from the thread-local
    /// generator, so repeated calls generally differ.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord<'_>) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec)),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec),
            Material::Dielectric { refraction_index } => {
                Some(scatter_dielectric(refraction_index, r_in, rec))
            }
        }
    }
}

fn scatter_lambertian(albedo: Color3, rec: &HitRecord<'_>) -> Scatter {
    let mut scatter_direction = rec.normal + random::random_unit_vector();

    // The random vector can cancel the normal out
    if scatter_direction.near_zero() {
        scatter_direction = rec.normal;
    }

    Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, scatter_direction),
    }
}

fn scatter_metal(albedo: Color3, fuzz: f32, r_in: &Ray, rec: &HitRecord<'_>) -> Option<Scatter> {
    let reflected = reflect(r_in.direction, rec.normal).unit_vector();
    let direction = reflected + fuzz * random::random_unit_vector();

    // Fuzz pushed the ray below the surface
    if direction.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    })
}

fn scatter_dielectric(refraction_index: f32, r_in: &Ray, rec: &HitRecord<'_>) -> Scatter {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.unit_vector();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;
    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f32() {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Scatter {
        attenuation: Color3::ONE,
        scattered: Ray::new(rec.p, direction),
    }
}

/// Fresnel reflectance, Schlick's approximation.
pub fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
