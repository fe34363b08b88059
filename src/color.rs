//! Conversion from linear radiance to display pixels.
//!
//! Pixels are packed as 8-bit ARGB, `0xAARRGGBB`, alpha always opaque.

use std::num::NonZeroU32;

use crate::interval::Interval;
use crate::vec3::Color3;

/// Fully opaque alpha, already shifted into place.
const OPAQUE: u32 = 0xFF << 24;

/// Channel range after averaging, kept just below 1 before gamma.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Channel range for the single-sample preview path.
const UNIT: Interval = Interval::new(0.0, 1.0);

/// Map a `[0, 1]` channel to a byte, rounding to nearest.
fn channel_to_byte(c: f32) -> u32 {
    (c * 255.0 + 0.5) as u8 as u32
}

fn pack(r: f32, g: f32, b: f32) -> u32 {
    OPAQUE | (channel_to_byte(r) << 16) | (channel_to_byte(g) << 8) | channel_to_byte(b)
}

/// Linear to gamma 2 transform.
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Pack a single color sample directly, with no averaging or gamma.
///
/// Meant for previews and debugging. Channels are clamped to `[0, 1]`.
pub fn color3_to_argb(color: Color3) -> u32 {
    pack(UNIT.clamp(color.r()), UNIT.clamp(color.g()), UNIT.clamp(color.b()))
}

/// Resolve an accumulated sum of `samples` color samples into a pixel.
///
/// The sum is averaged, each channel clamped to `[0, 0.999]`, gamma
/// corrected with a square root, then packed. Clamping happens before the
/// square root so negative or NaN channels resolve to black.
pub fn color3_to_argb_multisample(color: Color3, samples: NonZeroU32) -> u32 {
    let scale = 1.0 / samples.get() as f32;
    let resolve = |c: f32| linear_to_gamma(INTENSITY.clamp(c * scale));
    pack(resolve(color.r()), resolve(color.g()), resolve(color.b()))
}

/// Split a packed pixel into `[r, g, b, a]` bytes.
pub fn argb_channels(pixel: u32) -> [u8; 4] {
    let [a, r, g, b] = pixel.to_be_bytes();
    [r, g, b, a]
}
