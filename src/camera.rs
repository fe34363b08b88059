//! Camera for ray generation and scene rendering.
//!
//! A look-at pinhole camera with optional defocus blur. Rendering fans out
//! one rayon task per image row; the scene is only ever read.

use std::num::NonZeroU32;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::color::color3_to_argb_multisample;
use crate::error::KernelError;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{Color3, Point3, Vec3};

/// Hits closer than this to the ray origin are ignored, so a scattered ray
/// does not re-hit the surface it left due to rounding.
const SHADOW_ACNE_EPSILON: f32 = 0.001;

const DEFAULT_SAMPLES_PER_PIXEL: NonZeroU32 = NonZeroU32::new(50).unwrap();

/// User-facing camera parameters.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Number of random samples for each pixel
    pub samples_per_pixel: NonZeroU32,
    /// Maximum number of ray bounces
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Point camera is looking from
    pub lookfrom: Point3,
    /// Point camera is looking at
    pub lookat: Point3,
    /// Camera-relative "up" direction vector
    pub vup: Vec3,
    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: f32,
    /// Distance from `lookfrom` to the plane of perfect focus
    pub focus_dist: f32,
    /// Seed for reproducible renders; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            image_width: 100,
            image_height: 100,
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
            max_depth: 50,
            vfov: 90.0,
            lookfrom: Point3::ZERO,
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
            seed: None,
            show_progress: false,
        }
    }
}

/// Camera with its viewing frame computed from [`CameraSettings`].
#[derive(Debug, Clone)]
pub struct Camera {
    settings: CameraSettings,
    /// Camera position in world space (same as lookfrom)
    center: Point3,
    /// World position of the top-left pixel (pixel 0,0)
    pixel00_loc: Point3,
    /// Offset vector from pixel to pixel horizontally
    pixel_delta_u: Vec3,
    /// Offset vector from pixel to pixel vertically (downwards)
    pixel_delta_v: Vec3,
    /// Defocus disk horizontal radius vector
    defocus_disk_u: Vec3,
    /// Defocus disk vertical radius vector
    defocus_disk_v: Vec3,
}

/// Accumulated radiance for every pixel of a render.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Samples summed into each pixel
    pub samples: NonZeroU32,
    /// Per-pixel sum of samples, row-major from the top-left pixel
    pub accumulated: Vec<Color3>,
}

impl Frame {
    /// Display pixels, packed ARGB, averaged and gamma corrected.
    pub fn to_argb(&self) -> Vec<u32> {
        self.accumulated
            .iter()
            .map(|&sum| color3_to_argb_multisample(sum, self.samples))
            .collect()
    }

    /// Averaged linear radiance, no clamping or gamma.
    pub fn to_linear(&self) -> Vec<Color3> {
        let scale = 1.0 / self.samples.get() as f32;
        self.accumulated.iter().map(|&sum| sum * scale).collect()
    }
}

fn invalid(reason: impl Into<String>) -> KernelError {
    KernelError::InvalidCamera(reason.into())
}

impl Camera {
    /// Validate settings and build the viewing frame.
    pub fn new(settings: CameraSettings) -> Result<Self, KernelError> {
        if settings.image_width == 0 || settings.image_height == 0 {
            return Err(invalid(format!(
                "image size must be non-zero, got {}x{}",
                settings.image_width, settings.image_height
            )));
        }
        if settings.max_depth == 0 {
            return Err(invalid("max depth must be at least 1"));
        }
        if !(settings.vfov > 0.0 && settings.vfov < 180.0) {
            return Err(invalid(format!("vfov must be in (0, 180), got {}", settings.vfov)));
        }
        if !(settings.focus_dist > 0.0 && settings.focus_dist.is_finite()) {
            return Err(invalid(format!(
                "focus distance must be positive, got {}",
                settings.focus_dist
            )));
        }
        if !(settings.defocus_angle >= 0.0 && settings.defocus_angle < 180.0) {
            return Err(invalid(format!(
                "defocus angle must be in [0, 180), got {}",
                settings.defocus_angle
            )));
        }

        let center = settings.lookfrom;

        // Viewport dimensions
        let theta = settings.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * settings.focus_dist;
        let viewport_width =
            viewport_height * (settings.image_width as f32 / settings.image_height as f32);

        // u, v, w unit basis vectors for the camera coordinate frame
        let w = (settings.lookfrom - settings.lookat)
            .try_unit_vector()
            .ok_or_else(|| invalid("lookfrom and lookat coincide"))?;
        let u = settings
            .vup
            .cross(w)
            .try_unit_vector()
            .ok_or_else(|| invalid("vup is parallel to the view direction"))?;
        let v = w.cross(u);

        // Vectors across the horizontal and down the vertical viewport edges
        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;

        let pixel_delta_u = viewport_u / settings.image_width as f32;
        let pixel_delta_v = viewport_v / settings.image_height as f32;

        let viewport_upper_left =
            center - settings.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = settings.focus_dist * (settings.defocus_angle.to_radians() / 2.0).tan();

        debug!(
            "Camera at {} looking at {}, viewport {:.3}x{:.3}, defocus radius {:.4}",
            settings.lookfrom, settings.lookat, viewport_width, viewport_height, defocus_radius
        );

        Ok(Self {
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
            settings,
        })
    }

    /// Settings this camera was built from.
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Render `world`, summing `samples_per_pixel` paths into every pixel.
    pub fn render(&self, world: &dyn Hittable) -> Frame {
        let width = self.settings.image_width;
        let height = self.settings.image_height;
        let samples = self.settings.samples_per_pixel;

        info!(
            "Rendering {}x{} at {} spp on {} threads",
            width,
            height,
            samples,
            rayon::current_num_threads()
        );
        let start = std::time::Instant::now();

        let pb = if self.settings.show_progress {
            let pb = ProgressBar::new(height as u64);
            if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rows ETA: {eta}") {
                pb.set_style(style);
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let rows: Vec<Vec<Color3>> = (0..height)
            .into_par_iter()
            .map(|j| {
                if let Some(seed) = self.settings.seed {
                    random::reseed(seed.wrapping_add(j as u64));
                }
                let row: Vec<Color3> = (0..width)
                    .map(|i| {
                        (0..samples.get())
                            .map(|_| self.ray_color(&self.get_ray(i, j), world, self.settings.max_depth))
                            .sum::<Color3>()
                    })
                    .collect();
                pb.inc(1);
                row
            })
            .collect();

        pb.finish_and_clear();
        info!("Image rendered in {:.2?}", start.elapsed());

        Frame {
            width,
            height,
            samples,
            accumulated: rows.into_iter().flatten().collect(),
        }
    }

    /// Ray through pixel `(i, j)` with a random offset inside the pixel,
    /// starting on the defocus disk when blur is enabled.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let offset = sample_square();
        let pixel_sample = self.pixel00_loc
            + (i as f32 + offset.x) * self.pixel_delta_u
            + (j as f32 + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.settings.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample()
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    fn defocus_disk_sample(&self) -> Point3 {
        let p = random::random_in_unit_disk();
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    /// Radiance carried back along `r`, following at most `depth` bounces.
    pub fn ray_color(&self, r: &Ray, world: &dyn Hittable, depth: u32) -> Color3 {
        // Bounce limit reached, no more light is gathered
        if depth == 0 {
            return Color3::ZERO;
        }

        if let Some(rec) = world.hit(r, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) {
            return match rec.material.scatter(r, &rec) {
                Some(s) => s.attenuation * self.ray_color(&s.scattered, world, depth - 1),
                None => Color3::ZERO,
            };
        }

        sky(r)
    }
}

/// Random offset in the `[-0.5, 0.5)` square around a pixel center.
fn sample_square() -> Vec3 {
    Vec3::new(random::random_f32() - 0.5, random::random_f32() - 0.5, 0.0)
}

/// White-to-blue vertical gradient seen by rays that escape the scene.
fn sky(r: &Ray) -> Color3 {
    let unit_direction = r.direction.unit_vector();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color3::ONE + a * Color3::new(0.5, 0.7, 1.0)
}
