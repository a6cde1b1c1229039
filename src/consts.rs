//! Fixed settings for an optimization run.

// ── Discovery ───────────────────────────────────────────────────

/// Environment variable naming the directory to scan.
pub const ROOT_ENV: &str = "SVG_OPTIMIZE_ROOT";

/// Directory scanned when `ROOT_ENV` is unset.
pub const DEFAULT_ROOT: &str = ".";

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", ".vscode", "dist"];

/// Extension of candidate files, compared case-insensitively.
pub const SVG_EXTENSION: &str = "svg";

// ── Output ──────────────────────────────────────────────────────

/// Appended to a file path to name its backup.
pub const BACKUP_SUFFIX: &str = ".bak";

// ── Transformer ─────────────────────────────────────────────────

/// Decimal places kept for numeric geometry attributes.
pub const FLOAT_PRECISION: u8 = 2;

/// Upper bound on repeated transformer passes over one file.
pub const MAX_PASSES: usize = 10;
