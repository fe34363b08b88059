use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use chromacore::camera::{Camera, CameraSettings};
use chromacore::hittable::HittableList;
use chromacore::material::Material;
use chromacore::sphere::Sphere;
use chromacore::vec3::{Point3, Vec3};
use chromacore::{output, random, KernelError};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Create the book cover scene with random spheres
fn create_scene() -> Result<HittableList, KernelError> {
    let mut world = HittableList::new();

    let ground_material = Arc::new(Material::lambertian(Vec3::new(0.5, 0.5, 0.5)));
    world.add(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground_material)?);

    // 22x22 grid of small spheres
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f32();
            let center = Point3::new(
                a as f32 + 0.9 * random::random_f32(),
                0.2,
                b as f32 + 0.9 * random::random_f32(),
            );

            // Keep clear of the large metal sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let sphere_material = if choose_mat < 0.8 {
                Material::lambertian(random::random_color() * random::random_color())
            } else if choose_mat < 0.95 {
                Material::metal(
                    random::random_color_range(0.5, 1.0),
                    random::random_f32_range(0.0, 0.5),
                )
            } else {
                Material::dielectric(1.5)
            };
            world.add(Sphere::new(center, 0.2, Arc::new(sphere_material))?);
        }
    }

    // Three large feature spheres
    let glass = Arc::new(Material::dielectric(1.5));
    world.add(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass)?);

    let matte = Arc::new(Material::lambertian(Vec3::new(0.4, 0.2, 0.1)));
    world.add(Sphere::new(Point3::new(-4.0, 1.0, 0.0), 1.0, matte)?);

    let mirror = Arc::new(Material::metal(Vec3::new(0.7, 0.6, 0.5), 0.0));
    world.add(Sphere::new(Point3::new(4.0, 1.0, 0.0), 1.0, mirror)?);

    Ok(world)
}

/// Camera settings for the book cover shot
fn camera_settings(args: &Args) -> Result<CameraSettings> {
    let samples_per_pixel = NonZeroU32::new(args.samples_per_pixel)
        .context("samples per pixel must be at least 1")?;
    Ok(CameraSettings {
        image_width: args.width,
        image_height: args.height,
        samples_per_pixel,
        max_depth: args.max_depth,
        vfov: args.vfov,
        lookfrom: Point3::new(13.0, 2.0, 3.0),
        lookat: Point3::new(0.0, 0.0, 0.0),
        vup: Vec3::new(0.0, 1.0, 0.0),
        defocus_angle: args.defocus_angle,
        focus_dist: args.focus_dist,
        seed: args.seed,
        show_progress: !args.quiet,
    })
}

fn run(args: &Args) -> Result<()> {
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        args.width, args.height, args.samples_per_pixel, args.max_depth
    );

    if let Some(seed) = args.seed {
        info!("Using seed {}", seed);
        random::reseed(seed);
    }

    let world = create_scene().context("failed to build scene")?;
    info!("Scene has {} spheres", world.len());

    let camera = Camera::new(camera_settings(args)?).context("failed to set up camera")?;
    let frame = camera.render(&world);

    output::save(&frame, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.log_level());

    info!("ChromaCore - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
