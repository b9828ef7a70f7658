//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header read, no full decode) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Shrink to fit | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::fit_within;
use super::params::{Quality, ThumbBox};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, RgbImage};
use std::path::Path;
use std::sync::LazyLock;

/// Extensions whose decoders are compiled in and known to work.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::Decode(format!("{}: {}", path.display(), e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn load_fit(&self, path: &Path, bounds: ThumbBox) -> Result<RgbImage, BackendError> {
        let img = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;

        let source = (img.width(), img.height());
        let (width, height) = fit_within(source, bounds);
        if (width, height) == source {
            return Ok(img.into_rgb8());
        }
        Ok(img.resize_exact(width, height, FilterType::Lanczos3).into_rgb8())
    }

    fn write_jpeg(
        &self,
        image: &RgbImage,
        path: &Path,
        quality: Quality,
    ) -> Result<(), BackendError> {
        let file = std::fs::File::create(path).map_err(BackendError::Io)?;
        let writer = std::io::BufWriter::new(file);
        // The encoder writes every component at full resolution — no chroma
        // subsampling.
        let encoder = JpegEncoder::new_with_quality(writer, quality.value() as u8);
        encoder
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| BackendError::Encode(format!("{}: {}", path.display(), e)))
    }
}
