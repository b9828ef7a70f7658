//! CLI output formatting.
//!
//! Each outcome has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes it out. Format functions
//! are pure — no I/O, no side effects. Skip diagnostics go first in both
//! the success and the failure shape, so a user always sees what was
//! dropped before the verdict.

use crate::collage::{CollageError, CollageReport, SkipStage, SkippedSource};

/// One line per dropped source.
pub fn format_skip(skip: &SkippedSource) -> String {
    match skip.stage {
        SkipStage::Inspect => format!("Skipping {}: {}", skip.path.display(), skip.reason),
        SkipStage::Resize => {
            format!("Skipping {} during resize: {}", skip.path.display(), skip.reason)
        }
    }
}

/// Format a successful build: skip diagnostics, then the summary.
///
/// ```text
/// Skipping holiday/broken.jpg: decode failed: ...
/// Collage saved to collage.jpg (2400x1800)
///     9 images in a 3x3 grid, 2 sources skipped
/// ```
pub fn format_report(report: &CollageReport) -> Vec<String> {
    let mut lines: Vec<String> = report.skipped.iter().map(format_skip).collect();

    lines.push(format!(
        "Collage saved to {} ({}x{})",
        report.output.display(),
        report.width,
        report.height
    ));

    let detail = if report.skipped.is_empty() {
        format!("    {} images in a {} grid", report.composited, report.grid)
    } else {
        format!(
            "    {} images in a {} grid, {} sources skipped",
            report.composited,
            report.grid,
            report.skipped.len()
        )
    };
    lines.push(detail);

    lines
}

/// Format a failed build: skip diagnostics, then the error itself.
pub fn format_failure(err: &CollageError) -> Vec<String> {
    let skipped: &[SkippedSource] = match err {
        CollageError::NoValidImages { skipped, .. } => skipped,
        CollageError::NothingToComposite { skipped } => skipped,
        CollageError::Backend(_) => &[],
    };

    let mut lines: Vec<String> = skipped.iter().map(format_skip).collect();
    lines.push(format!("Error: {err}"));
    lines
}

/// Print a success report to stdout.
pub fn print_report(report: &CollageReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

/// Print a failure to stderr.
pub fn print_failure(err: &CollageError) {
    for line in format_failure(err) {
        eprintln!("{}", line);
    }
}
