//! Pure calculation functions for batch sizing and placement.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::ThumbBox;

/// Largest thumbnail edge for a landscape-leaning batch.
const LANDSCAPE_EDGE: u32 = 800;

/// Largest thumbnail edge for a portrait-leaning (or square) batch.
const PORTRAIT_EDGE: u32 = 600;

/// Median aspect ratio of a batch.
///
/// Sorts ascending and takes the element at index `len / 2` (the upper
/// median for even counts). Input order carries no meaning; only the
/// distribution does.
///
/// The caller must pass at least one ratio.
pub fn median_aspect(mut ratios: Vec<f64>) -> f64 {
    debug_assert!(!ratios.is_empty(), "median of an empty batch");
    ratios.sort_by(f64::total_cmp);
    ratios[ratios.len() / 2]
}

/// Derive the shared thumbnail box from the batch's median aspect ratio.
///
/// A landscape-leaning batch (median > 1) is bounded by width: up to 800px
/// wide (never wider than `max_width`), with the height following the
/// median. Portrait and square batches are bounded by height analogously,
/// up to 600px. Degenerate medians clamp both edges to at least 1px.
pub fn thumb_box(median_aspect: f64, max_width: u32, max_height: u32) -> ThumbBox {
    if median_aspect > 1.0 {
        let width = LANDSCAPE_EDGE.min(max_width).max(1);
        let height = ((width as f64 / median_aspect).floor() as u32).max(1);
        ThumbBox { width, height }
    } else {
        let height = PORTRAIT_EDGE.min(max_height).max(1);
        let width = ((height as f64 * median_aspect).floor() as u32).max(1);
        ThumbBox { width, height }
    }
}

/// Shrink source dimensions to fit within `bounds`, preserving aspect ratio.
///
/// Returns the source unchanged when it already fits — images are never
/// upscaled. Otherwise both edges scale by the same factor, so the result
/// touches the box on at least one axis and never exceeds it.
pub fn fit_within(source: (u32, u32), bounds: ThumbBox) -> (u32, u32) {
    let (width, height) = source;
    if width <= bounds.width && height <= bounds.height {
        return (width, height);
    }

    let scale = (bounds.width as f64 / width as f64).min(bounds.height as f64 / height as f64);
    let fit_width = ((width as f64 * scale).round() as u32).max(1);
    let fit_height = ((height as f64 * scale).round() as u32).max(1);
    (fit_width, fit_height)
}

/// Offset that centers an edge of `image` pixels inside an edge of `cell`
/// pixels. Integer division floors the odd-slack case.
pub fn centered_offset(cell: u32, image: u32) -> u32 {
    debug_assert!(image <= cell, "image larger than its cell");
    (cell - image) / 2
}
