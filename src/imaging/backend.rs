//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the three codec-facing operations the
//! collage pipeline needs: identify, load-and-fit, and JPEG write. The
//! production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests script failures
//! and sizes through a `MockBackend` without real files.

use super::params::{Quality, ThumbBox};
use image::RgbImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Width over height.
    pub fn aspect(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Trait for image processing backends.
///
/// Decode and encode codecs live behind this seam; everything else in the
/// pipeline is pixel math on buffers the backend hands back.
pub trait ImageBackend {
    /// Read a source's pixel dimensions without decoding the full image.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode a source and shrink it to fit `bounds`, preserving its own
    /// aspect ratio. Never upscales.
    fn load_fit(&self, path: &Path, bounds: ThumbBox) -> Result<RgbImage, BackendError>;

    /// Encode an RGB buffer to `path` as JPEG at the given quality.
    fn write_jpeg(
        &self,
        image: &RgbImage,
        path: &Path,
        quality: Quality,
    ) -> Result<(), BackendError>;
}
