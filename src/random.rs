//! Random number generation and geometric sampling.
//!
//! Each thread owns a ChaCha20 generator, so rayon workers never share or
//! contend on random state. All samplers draw from the calling thread's
//! generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

use crate::vec3::{Color3, Vec3};

/// Draws whose squared length falls below this are too short to normalize.
const MIN_NORMALIZABLE_LENGTH_SQUARED: f32 = 1e-30;

thread_local! {
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rand::rng()));
}

/// Re-seed the calling thread's generator.
///
/// Sampling after a reseed with the same seed repeats the same sequence on
/// this thread. Other threads are unaffected.
pub fn reseed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Uniform `f32` in `[0, 1)`.
pub fn random_f32() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Uniform `f32` in `[min, max)`.
pub fn random_f32_range(min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32()
}

/// Vector with each component uniform in `[0, 1)`.
pub fn random_vec3() -> Vec3 {
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        Vec3::new(rng.random(), rng.random(), rng.random())
    })
}

/// Vector with each component independently uniform in `[min, max)`.
pub fn random_vec3_range(min: f32, max: f32) -> Vec3 {
    Vec3::splat(min) + (max - min) * random_vec3()
}

/// Point uniformly distributed inside the unit disk in the `z = 0` plane.
pub fn random_in_unit_disk() -> Vec3 {
    loop {
        let p = Vec3::new(
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Point uniformly distributed inside the unit ball.
pub fn random_in_unit_sphere() -> Vec3 {
    loop {
        let p = random_vec3_range(-1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Direction uniformly distributed on the unit sphere.
///
/// Normalizes a unit-ball sample; draws too close to the origin are rejected
/// so the normalization is always well defined.
pub fn random_unit_vector() -> Vec3 {
    loop {
        let p = random_in_unit_sphere();
        if p.length_squared() > MIN_NORMALIZABLE_LENGTH_SQUARED {
            return p.unit_vector();
        }
    }
}

/// Random color with channels in `[0, 1)`.
pub fn random_color() -> Color3 {
    random_vec3()
}

/// Random color with channels in `[min, max)`.
pub fn random_color_range(min: f32, max: f32) -> Color3 {
    random_vec3_range(min, max)
}
