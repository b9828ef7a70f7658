//! # Quilt
//!
//! Batch image collage composer with automatic grid layout. Point it at a
//! set of images and it arranges them into one grid-composited picture:
//! the grid shape is chosen for the batch size, the thumbnail size for the
//! batch's typical proportions.
//!
//! # Architecture: Two-Pass Pipeline
//!
//! One invocation is one batch job, processed in a fixed sequence:
//!
//! ```text
//! 1. Inspect    read every source's dimensions   (failures shrink the batch)
//! 2. Shrink     decode + fit a shared bound      (failures shrink it again)
//!    Layout     survivor count -> (columns, rows)
//!    Composite  centered cells on a white canvas
//!    Encode     one JPEG write, after everything else succeeded
//! ```
//!
//! The first pass only reads headers, so the batch's median aspect ratio —
//! which determines the shared thumbnail bound — is known before any full
//! decode happens. Per-source failures are diagnostics, not errors; the
//! operation only aborts when nothing usable remains, or when the single
//! final write fails.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Grid shape selection — pure scoring scan over column counts |
//! | [`collage`] | The pipeline: inspection, shrinking, compositing, encoding |
//! | [`imaging`] | Codec seam: [`imaging::ImageBackend`] trait, pure sizing math |
//! | [`sources`] | CLI input expansion (files pass through, directories walked) |
//! | [`output`] | Output formatting — pure `format_*` functions + print wrappers |
//!
//! # Design Decisions
//!
//! ## One Shared Thumbnail Bound
//!
//! Thumbnail size is derived once per batch from the median aspect ratio,
//! not per image. A batch of landscapes gets a wide bound, a batch of
//! portraits a tall one, and every image shrinks into the same box while
//! keeping its own proportions. Cells are then sized by the largest
//! survivor, so nothing is ever cropped or clipped — mixed-orientation
//! batches simply get more background around the odd ones out.
//!
//! ## Codecs Behind a Trait
//!
//! Decode and encode live behind [`imaging::ImageBackend`]. The production
//! backend is the pure-Rust `image` crate stack (Lanczos3 resampling, JPEG
//! output with no chroma subsampling); tests drive the pipeline through a
//! scripted mock, so failure handling is exercised without fixture files.
//!
//! ## Degrade, Don't Abort
//!
//! A corrupt file in a batch of hundreds should cost one cell, not the
//! whole run. Both passes record skipped sources as explicit values that
//! travel with the result — there is no ambient error state — and the two
//! abort conditions (nothing readable, nothing decodable) still carry the
//! full skip list so every diagnostic reaches the user.

pub mod collage;
pub mod imaging;
pub mod layout;
pub mod output;
pub mod sources;
