//! Candidate discovery: every SVG under a root, skipping excluded directories.

#[cfg(test)]
#[path = "discover_test.rs"]
mod discover_test;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::consts::{EXCLUDED_DIRS, SVG_EXTENSION};

/// List SVG files under `root`, recursing into every directory except
/// [`EXCLUDED_DIRS`]. Paths are returned sorted by file name per directory.
///
/// Unreadable entries are logged and skipped.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry));

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_svg(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => warn!(error = %err, "skipping unreadable entry"),
        }
    }
    files
}

/// Whether `path` has the candidate extension, ignoring case.
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SVG_EXTENSION))
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}
