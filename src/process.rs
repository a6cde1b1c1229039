//! Per-file processing: read, transform, and replace when smaller.

#[cfg(test)]
#[path = "process_test.rs"]
mod process_test;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::BACKUP_SUFFIX;
use crate::error::{OptimizeError, TransformError};
use crate::transform::{Transformer, ensure_fidelity, strip_redundant_attributes};

/// Result of processing one candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Original backed up and replaced with smaller output.
    Optimized,
    /// Output was not smaller; file untouched.
    NoGain,
    /// Processing failed; file untouched unless the final write failed.
    Failed,
}

/// What happened to one file during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Byte length before processing (0 if unread).
    pub original_len: usize,
    /// Byte length of the transformed output, if the transform ran.
    pub optimized_len: Option<usize>,
    pub outcome: Outcome,
}

/// Sibling path holding the pre-optimization copy of `path`.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Transform one file, replacing it only when the output is strictly smaller
/// and keeps everything [`ensure_fidelity`] checks.
///
/// The original is copied to [`backup_path`] before it is overwritten.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the transformer rejects it, the
/// smaller output drops content, or the backup or replacement cannot be
/// written. The file is left untouched in every case but a failed final write.
pub fn process(path: &Path, transformer: &dyn Transformer) -> Result<FileReport, OptimizeError> {
    let source = fs::read_to_string(path).map_err(|source| OptimizeError::Read { path: path.to_path_buf(), source })?;
    let original_len = source.len();
    let transform_failed =
        |source: TransformError| OptimizeError::Transform { path: path.to_path_buf(), original_len, source };
    let transformed = transformer.transform(&source, path).map_err(transform_failed)?;
    let optimized = strip_redundant_attributes(&transformed);

    let mut report = FileReport {
        path: path.to_path_buf(),
        original_len,
        optimized_len: Some(optimized.len()),
        outcome: Outcome::NoGain,
    };
    if optimized.len() >= original_len {
        return Ok(report);
    }
    ensure_fidelity(&source, &optimized).map_err(transform_failed)?;

    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|source| OptimizeError::Backup { path: backup.clone(), original_len, source })?;
    fs::write(path, optimized)
        .map_err(|source| OptimizeError::Write { path: path.to_path_buf(), original_len, source })?;
    report.outcome = Outcome::Optimized;
    Ok(report)
}
