//! Input expansion for the CLI.
//!
//! The pipeline itself takes a flat, ordered list of file paths. This module
//! turns what the user typed into that list: plain paths pass through in
//! argument order (including paths that do not exist — the inspection pass
//! owns that diagnostic), and a directory argument expands to the image
//! files under it, recursively, in file-name order.
//!
//! Wildcards are the shell's job; nothing here globs.

use crate::imaging::supported_input_extensions;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand CLI inputs into the ordered list of candidate source files.
pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            paths.extend(collect_images(input));
        } else {
            paths.push(input.clone());
        }
    }
    paths
}

/// All image files under `dir`, depth-first, siblings in file-name order.
fn collect_images(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| has_supported_extension(path))
        .collect()
}

/// Whether a path's extension names a format we have a decoder for.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            supported_input_extensions().contains(&ext.as_str())
        })
}
