//! Collage assembly pipeline.
//!
//! Takes an ordered batch of source paths and composites every readable
//! image into one grid picture. The pipeline runs in two passes over the
//! sources:
//!
//! ```text
//! 1. Inspect   read dimensions only        -> batch median aspect ratio
//! 2. Shrink    decode + fit shared bound   -> one thumbnail per survivor
//!    Layout    count -> grid shape         (see crate::layout)
//!    Composite centered cells, white canvas
//!    Encode    single JPEG write
//! ```
//!
//! Unreadable sources never abort the batch — they are recorded as
//! [`SkippedSource`] entries and the grid shrinks around them. The two
//! passes are diagnosed independently: a source can pass inspection and
//! still fail to decode on reopen. Only an empty batch or the final write
//! aborts the operation, and the output file is written exactly once,
//! after all compositing has succeeded in memory.
//!
//! Decoder handles are scoped to a single loop iteration in each pass, so
//! a mid-batch failure never holds descriptors open across the remaining
//! sources.

use crate::imaging::{
    BackendError, Dimensions, ImageBackend, Quality, ThumbBox, centered_offset, median_aspect,
    thumb_box,
};
use crate::layout::{GridShape, select_layout};
use image::{Rgb, RgbImage, imageops};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Canvas fill for cells an image does not cover.
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Error, Debug)]
pub enum CollageError {
    #[error("no valid images found among {total} inputs")]
    NoValidImages {
        total: usize,
        skipped: Vec<SkippedSource>,
    },
    #[error("no images left to composite")]
    NothingToComposite { skipped: Vec<SkippedSource> },
    #[error("{0}")]
    Backend(#[from] BackendError),
}

/// Which pass gave up on a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipStage {
    /// Dimension inspection could not read the source.
    Inspect,
    /// The source identified fine but failed to decode on reopen.
    Resize,
}

/// One source that was dropped from the batch, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub stage: SkipStage,
    pub reason: String,
}

/// Parameters for one collage build.
#[derive(Debug, Clone)]
pub struct CollageRequest {
    /// Upper bound on the shared thumbnail width.
    pub max_width: u32,
    /// Upper bound on the shared thumbnail height.
    pub max_height: u32,
    /// Destination file; always JPEG-encoded regardless of extension.
    pub output: PathBuf,
    pub quality: Quality,
}

impl Default for CollageRequest {
    fn default() -> Self {
        Self {
            max_width: 3840,
            max_height: 2160,
            output: PathBuf::from("collage.jpg"),
            quality: Quality::default(),
        }
    }
}

/// What a successful build produced.
#[derive(Debug)]
pub struct CollageReport {
    pub output: PathBuf,
    /// Final canvas width in pixels.
    pub width: u32,
    /// Final canvas height in pixels.
    pub height: u32,
    pub grid: GridShape,
    /// Number of images composited onto the canvas.
    pub composited: usize,
    /// Sources dropped along the way, in discovery order.
    pub skipped: Vec<SkippedSource>,
}

/// A source that passed the inspection pass.
struct InspectedSource {
    path: PathBuf,
    dimensions: Dimensions,
}

/// Build one collage from `paths`, in order, and write it to
/// `request.output`.
///
/// Per-source failures degrade the batch; see the [module docs](self) for
/// the abort conditions. On abort no output file is written and the error
/// carries the skip list gathered so far, so callers can still surface
/// every per-source diagnostic.
pub fn build_collage(
    backend: &impl ImageBackend,
    paths: &[PathBuf],
    request: &CollageRequest,
) -> Result<CollageReport, CollageError> {
    // Pass 1: dimensions only.
    let (inspected, mut skipped) = inspect_sources(backend, paths);
    if inspected.is_empty() {
        return Err(CollageError::NoValidImages {
            total: paths.len(),
            skipped,
        });
    }

    // One shared bound for the whole batch, derived from its typical shape.
    let aspects = inspected.iter().map(|s| s.dimensions.aspect()).collect();
    let bounds = thumb_box(median_aspect(aspects), request.max_width, request.max_height);

    // Pass 2: decode and shrink. Failures here are a second, independent
    // opportunity to drop a source.
    let (thumbnails, resize_skips) = shrink_sources(backend, &inspected, bounds);
    skipped.extend(resize_skips);
    if thumbnails.is_empty() {
        return Err(CollageError::NothingToComposite { skipped });
    }

    let grid = select_layout(thumbnails.len());

    // Cells are sized by the largest survivors, so no thumbnail can clip —
    // individual images may be smaller than the nominal bound.
    let cell_width = thumbnails.iter().map(RgbImage::width).max().unwrap_or(1);
    let cell_height = thumbnails.iter().map(RgbImage::height).max().unwrap_or(1);

    let width = grid.columns * cell_width;
    let height = grid.rows * cell_height;
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    // Row-major placement in original relative order, centered per cell.
    for (index, thumb) in thumbnails.iter().enumerate() {
        let row = index as u32 / grid.columns;
        let column = index as u32 % grid.columns;
        let x = column * cell_width + centered_offset(cell_width, thumb.width());
        let y = row * cell_height + centered_offset(cell_height, thumb.height());
        imageops::replace(&mut canvas, thumb, i64::from(x), i64::from(y));
    }

    backend.write_jpeg(&canvas, &request.output, request.quality)?;

    Ok(CollageReport {
        output: request.output.clone(),
        width,
        height,
        grid,
        composited: thumbnails.len(),
        skipped,
    })
}

fn inspect_sources(
    backend: &impl ImageBackend,
    paths: &[PathBuf],
) -> (Vec<InspectedSource>, Vec<SkippedSource>) {
    let mut inspected = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        match backend.identify(path) {
            Ok(dimensions) => inspected.push(InspectedSource {
                path: path.clone(),
                dimensions,
            }),
            Err(err) => skipped.push(skip(path, SkipStage::Inspect, &err)),
        }
    }

    (inspected, skipped)
}

fn shrink_sources(
    backend: &impl ImageBackend,
    sources: &[InspectedSource],
    bounds: ThumbBox,
) -> (Vec<RgbImage>, Vec<SkippedSource>) {
    let mut thumbnails = Vec::new();
    let mut skipped = Vec::new();

    for source in sources {
        match backend.load_fit(&source.path, bounds) {
            Ok(thumb) => thumbnails.push(thumb),
            Err(err) => skipped.push(skip(&source.path, SkipStage::Resize, &err)),
        }
    }

    (thumbnails, skipped)
}

fn skip(path: &Path, stage: SkipStage, err: &BackendError) -> SkippedSource {
    SkippedSource {
        path: path.to_path_buf(),
        stage,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;

    fn request_to(output: &str) -> CollageRequest {
        CollageRequest {
            output: PathBuf::from(output),
            ..CollageRequest::default()
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn square_batch_composites_two_by_two() {
        let backend = MockBackend::new()
            .with_image("/a.jpg", 100, 100)
            .with_image("/b.jpg", 100, 100)
            .with_image("/c.jpg", 100, 100)
            .with_image("/d.jpg", 100, 100);

        let report = build_collage(
            &backend,
            &paths(&["/a.jpg", "/b.jpg", "/c.jpg", "/d.jpg"]),
            &request_to("/out.jpg"),
        )
        .unwrap();

        // Median aspect 1.0 -> 600x600 bound, no image touched
        assert_eq!(report.grid, GridShape { columns: 2, rows: 2 });
        assert_eq!((report.width, report.height), (200, 200));
        assert_eq!(report.composited, 4);
        assert!(report.skipped.is_empty());

        let writes = backend.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].path, PathBuf::from("/out.jpg"));
        assert_eq!((writes[0].width, writes[0].height), (200, 200));
    }

    #[test]
    fn cells_track_the_largest_survivor() {
        // 100x100 and 50x50: both fit the shared bound untouched, so the
        // cell must grow to the larger one and the small image centers.
        let backend = MockBackend::new()
            .with_image("/big.jpg", 100, 100)
            .with_image("/small.jpg", 50, 50);

        let report = build_collage(
            &backend,
            &paths(&["/big.jpg", "/small.jpg"]),
            &request_to("/out.jpg"),
        )
        .unwrap();

        assert_eq!(report.grid, GridShape { columns: 2, rows: 1 });
        assert_eq!((report.width, report.height), (200, 100));
    }

    #[test]
    fn landscape_batch_shrinks_to_shared_bound() {
        // Median aspect 2.0 -> bound 800x400; the 1600x800 source halves.
        let backend = MockBackend::new()
            .with_image("/a.jpg", 1600, 800)
            .with_image("/b.jpg", 1600, 800);

        let report = build_collage(
            &backend,
            &paths(&["/a.jpg", "/b.jpg"]),
            &request_to("/out.jpg"),
        )
        .unwrap();

        assert_eq!(report.grid, GridShape { columns: 2, rows: 1 });
        assert_eq!((report.width, report.height), (1600, 400));
    }

    #[test]
    fn unreadable_sources_shrink_the_batch() {
        // Two of five paths are unknown to the backend: the collage is
        // built from the remaining three, with one skip record each.
        let backend = MockBackend::new()
            .with_image("/a.jpg", 120, 90)
            .with_image("/b.jpg", 120, 90)
            .with_image("/c.jpg", 120, 90);

        let report = build_collage(
            &backend,
            &paths(&["/a.jpg", "/bad1.jpg", "/b.jpg", "/bad2.jpg", "/c.jpg"]),
            &request_to("/out.jpg"),
        )
        .unwrap();

        assert_eq!(report.composited, 3);
        assert_eq!(report.grid, GridShape { columns: 3, rows: 1 });
        assert_eq!(report.skipped.len(), 2);
        assert!(report.skipped.iter().all(|s| s.stage == SkipStage::Inspect));
        assert_eq!(report.skipped[0].path, PathBuf::from("/bad1.jpg"));
        assert_eq!(report.skipped[1].path, PathBuf::from("/bad2.jpg"));
    }

    #[test]
    fn resize_failures_are_diagnosed_separately() {
        let backend = MockBackend::new()
            .with_image("/ok.jpg", 100, 100)
            .with_load_failure("/flaky.jpg", 100, 100);

        let report = build_collage(
            &backend,
            &paths(&["/ok.jpg", "/flaky.jpg", "/gone.jpg"]),
            &request_to("/out.jpg"),
        )
        .unwrap();

        assert_eq!(report.composited, 1);
        assert_eq!(report.skipped.len(), 2);
        let stages: Vec<SkipStage> = report.skipped.iter().map(|s| s.stage).collect();
        assert!(stages.contains(&SkipStage::Inspect));
        assert!(stages.contains(&SkipStage::Resize));
    }

    #[test]
    fn all_unreadable_aborts_without_writing() {
        let backend = MockBackend::new();

        let result = build_collage(
            &backend,
            &paths(&["/x.jpg", "/y.jpg", "/z.jpg"]),
            &request_to("/out.jpg"),
        );

        match result {
            Err(CollageError::NoValidImages { total, skipped }) => {
                assert_eq!(total, 3);
                assert_eq!(skipped.len(), 3);
            }
            other => panic!("expected NoValidImages, got {other:?}"),
        }
        assert!(backend.writes().is_empty());
    }

    #[test]
    fn losing_every_survivor_in_resize_aborts() {
        let backend = MockBackend::new()
            .with_load_failure("/a.jpg", 100, 100)
            .with_load_failure("/b.jpg", 100, 100);

        let result = build_collage(
            &backend,
            &paths(&["/a.jpg", "/b.jpg"]),
            &request_to("/out.jpg"),
        );

        match result {
            Err(CollageError::NothingToComposite { skipped }) => {
                assert_eq!(skipped.len(), 2);
                assert!(skipped.iter().all(|s| s.stage == SkipStage::Resize));
            }
            other => panic!("expected NothingToComposite, got {other:?}"),
        }
        assert!(backend.writes().is_empty());
    }

    #[test]
    fn write_failure_is_fatal() {
        let backend = MockBackend::new()
            .with_image("/a.jpg", 100, 100)
            .failing_writes();

        let result = build_collage(&backend, &paths(&["/a.jpg"]), &request_to("/out.jpg"));
        assert!(matches!(result, Err(CollageError::Backend(_))));
    }

    #[test]
    fn quality_reaches_the_encoder() {
        let backend = MockBackend::new().with_image("/a.jpg", 100, 100);
        let request = CollageRequest {
            quality: Quality::new(80),
            ..request_to("/out.jpg")
        };

        build_collage(&backend, &paths(&["/a.jpg"]), &request).unwrap();
        assert_eq!(backend.writes()[0].quality, 80);
    }
}
