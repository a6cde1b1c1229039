//! Whole-tree run: discover candidates, process each, summarize.
//!
//! ERROR HANDLING
//! ==============
//! Every file is independent. A failure is logged and recorded as
//! [`Outcome::Failed`]; the run always continues to the next file and always
//! returns a summary. Writes are not transactional, so an interrupted run may
//! leave some files optimized and others not.

#[cfg(test)]
#[path = "run_test.rs"]
mod run_test;

use std::path::Path;

use tracing::{error, info, warn};

use crate::discover::discover;
use crate::error::OptimizeError;
use crate::process::{FileReport, Outcome, process};
use crate::transform::Transformer;

/// Per-file reports for one run, in processing order.
#[derive(Debug, Default)]
pub struct Summary {
    pub reports: Vec<FileReport>,
}

impl Summary {
    /// Number of candidate files.
    #[must_use]
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn optimized(&self) -> usize {
        self.count(Outcome::Optimized)
    }

    #[must_use]
    pub fn no_gain(&self) -> usize {
        self.count(Outcome::NoGain)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(Outcome::Failed)
    }

    /// Bytes saved across optimized files.
    #[must_use]
    pub fn bytes_saved(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == Outcome::Optimized)
            .map(|r| r.original_len.saturating_sub(r.optimized_len.unwrap_or(r.original_len)))
            .sum()
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.reports.iter().filter(|r| r.outcome == outcome).count()
    }
}

/// Optimize every SVG under `root` with `transformer`.
pub fn run(root: &Path, transformer: &dyn Transformer) -> Summary {
    let files = discover(root);
    if files.is_empty() {
        info!(root = %root.display(), "No SVG files found.");
        return Summary::default();
    }

    let mut summary = Summary::default();
    for path in &files {
        let report = match process(path, transformer) {
            Ok(report) => report,
            Err(err) => {
                log_failure(&err);
                FileReport {
                    path: path.clone(),
                    original_len: err.original_len(),
                    optimized_len: None,
                    outcome: Outcome::Failed,
                }
            }
        };
        log_report(root, &report);
        summary.reports.push(report);
    }

    info!(
        optimized = summary.optimized(),
        total = summary.total(),
        no_gain = summary.no_gain(),
        failed = summary.failed(),
        bytes_saved = summary.bytes_saved(),
        "Done. Optimized {} of {} SVG(s). Backups: *.bak",
        summary.optimized(),
        summary.total()
    );
    summary
}

fn log_failure(err: &OptimizeError) {
    match err {
        OptimizeError::Transform { .. } => error!(error = %err, "transformer rejected file"),
        OptimizeError::Read { .. } | OptimizeError::Backup { .. } | OptimizeError::Write { .. } => {
            error!(error = %err, "filesystem error");
        }
    }
}

fn log_report(root: &Path, report: &FileReport) {
    let rel = report.path.strip_prefix(root).unwrap_or(&report.path).display();
    match report.outcome {
        Outcome::Optimized => info!(
            path = %rel,
            before = report.original_len,
            after = report.optimized_len.unwrap_or_default(),
            "optimized"
        ),
        Outcome::NoGain => info!(path = %rel, "no gain"),
        Outcome::Failed => warn!(path = %rel, "left untouched"),
    }
}
