//! Error types for the optimizer.

use std::io;
use std::path::PathBuf;

/// Failure inside the SVG transformer.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The input could not be parsed as SVG.
    #[error("svg parse failed: {0}")]
    Parse(#[from] roxmltree::Error),
    /// The transformer produced no output.
    #[error("transformer produced empty output")]
    Empty,
    /// The output would render differently from the input.
    #[error("output drops content: {0}")]
    Lossy(String),
}

/// Failure processing one candidate file. Never fatal to the run.
///
/// Every variant after `Read` carries the length of the source that was read.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to transform {}: {source}", path.display())]
    Transform { path: PathBuf, original_len: usize, source: TransformError },
    #[error("failed to write backup {}: {source}", path.display())]
    Backup { path: PathBuf, original_len: usize, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, original_len: usize, source: io::Error },
}

impl OptimizeError {
    /// Byte length of the file as read, or 0 if it could not be read.
    #[must_use]
    pub fn original_len(&self) -> usize {
        match self {
            Self::Read { .. } => 0,
            Self::Transform { original_len, .. }
            | Self::Backup { original_len, .. }
            | Self::Write { original_len, .. } => *original_len,
        }
    }
}
