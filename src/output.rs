//! Image output.
//!
//! PNG files get the display pixels (averaged, gamma corrected, 8-bit).
//! EXR files get the averaged linear radiance at full f32 precision, with no
//! clamping or gamma, for HDR viewers and post-processing.

use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgba, RgbaImage};
use log::{debug, info};

use crate::camera::Frame;
use crate::color::argb_channels;
use crate::error::KernelError;

/// Save the frame, choosing the format from the file extension.
pub fn save(frame: &Frame, path: &Path) -> Result<(), KernelError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => save_png(frame, path),
        Some("exr") => save_exr(frame, path),
        _ => Err(KernelError::UnsupportedOutput(path.display().to_string())),
    }
}

/// Convert the frame's packed display pixels into an RGBA image buffer.
pub fn to_rgba_image(frame: &Frame) -> RgbaImage {
    let pixels = frame.to_argb();
    ImageBuffer::from_fn(frame.width, frame.height, |x, y| {
        let index = (y * frame.width + x) as usize;
        Rgba(argb_channels(pixels[index]))
    })
}

/// Save the gamma corrected 8-bit image as PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<(), KernelError> {
    debug!("Encoding {}x{} PNG", frame.width, frame.height);
    to_rgba_image(frame).save(path)?;
    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save the linear radiance as a 32-bit float RGB EXR.
pub fn save_exr(frame: &Frame, path: &Path) -> Result<(), KernelError> {
    let linear = frame.to_linear();
    let width = frame.width as usize;
    write_rgb_file(path, width, frame.height as usize, |x, y| {
        let c = linear[y * width + x];
        (c.r(), c.g(), c.b())
    })?;
    info!("HDR image saved as EXR: {}", path.display());
    Ok(())
}
