//! Error type for scene construction and image output.

use std::fmt;

/// Errors raised at construction and I/O boundaries.
///
/// Ray misses and absorbed rays are not errors; they are `None` results of
/// the intersection and scattering calls.
#[derive(Debug)]
pub enum KernelError {
    /// Sphere radius that is zero, negative or not finite.
    InvalidRadius(f32),
    /// Camera settings that cannot produce a viewing frame.
    InvalidCamera(String),
    /// Output path whose extension is neither `.png` nor `.exr`.
    UnsupportedOutput(String),
    /// Failure writing an 8-bit image.
    Image(image::ImageError),
    /// Failure writing an EXR image.
    Exr(exr::error::Error),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidRadius(r) => {
                write!(f, "sphere radius must be finite and positive, got {r}")
            }
            KernelError::InvalidCamera(reason) => write!(f, "invalid camera: {reason}"),
            KernelError::UnsupportedOutput(path) => {
                write!(f, "unsupported output format '{path}', expected .png or .exr")
            }
            KernelError::Image(e) => write!(f, "image output failed: {e}"),
            KernelError::Exr(e) => write!(f, "EXR output failed: {e}"),
        }
    }
}

impl std::error::Error for KernelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KernelError::Image(e) => Some(e),
            KernelError::Exr(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for KernelError {
    fn from(e: image::ImageError) -> Self {
        KernelError::Image(e)
    }
}

impl From<exr::error::Error> for KernelError {
    fn from(e: exr::error::Error) -> Self {
        KernelError::Exr(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            KernelError::InvalidRadius(-1.0).to_string(),
            "sphere radius must be finite and positive, got -1"
        );
        assert_eq!(
            KernelError::InvalidCamera("zero width".into()).to_string(),
            "invalid camera: zero width"
        );
    }
}
