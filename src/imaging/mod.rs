//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Shrink to fit** | Lanczos3 via `resize_exact` |
//! | **Encode** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: pure functions for batch sizing math (unit testable)
//! - **Parameters**: [`Quality`] and the shared [`ThumbBox`] bound
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub(crate) mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{centered_offset, fit_within, median_aspect, thumb_box};
pub use params::{Quality, ThumbBox};
pub use rust_backend::{RustBackend, supported_input_extensions};
