//! ChromaCore ray tracing kernel
//!
//! Vector algebra, ray-sphere intersection, material scattering, stochastic
//! sampling and radiance-to-pixel color resolution, plus a small CPU camera
//! that drives them.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod color;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod sphere;
pub mod vec3;

pub use camera::{Camera, CameraSettings, Frame};
pub use error::KernelError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Material, Scatter};
pub use ray::Ray;
pub use sphere::Sphere;
pub use vec3::{Color3, Point3, Vec3};
