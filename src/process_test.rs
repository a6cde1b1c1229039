use std::fs;

use tempfile::TempDir;

use super::*;
use crate::minify::SvgMinifier;

// =============================================================
// Helpers
// =============================================================

/// Returns a fixed string regardless of input.
struct Fixed(&'static str);

impl Transformer for Fixed {
    fn transform(&self, _source: &str, _path: &Path) -> Result<String, TransformError> {
        Ok(self.0.to_owned())
    }
}

/// Appends padding so the output is never smaller.
struct Grow;

impl Transformer for Grow {
    fn transform(&self, source: &str, _path: &Path) -> Result<String, TransformError> {
        Ok(format!("{source}   "))
    }
}

struct Fail;

impl Transformer for Fail {
    fn transform(&self, _source: &str, _path: &Path) -> Result<String, TransformError> {
        Err(TransformError::Empty)
    }
}

const ORIGINAL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">  <rect width="10" height="10"/>  </svg>"#;

/// `ORIGINAL` without its formatting whitespace.
const SMALL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="10" height="10"/></svg>"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================
// backup_path
// =============================================================

#[test]
fn backup_path_appends_suffix() {
    assert_eq!(backup_path(Path::new("img/a.svg")), PathBuf::from("img/a.svg.bak"));
    assert_eq!(backup_path(Path::new("A.SVG")), PathBuf::from("A.SVG.bak"));
}

// =============================================================
// process
// =============================================================

#[test]
fn smaller_output_replaces_file_and_backs_up_original() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "a.svg", ORIGINAL);

    let report = process(&path, &Fixed(SMALL)).unwrap();
    assert_eq!(report.outcome, Outcome::Optimized);
    assert_eq!(report.original_len, ORIGINAL.len());
    assert_eq!(report.optimized_len, Some(SMALL.len()));
    assert_eq!(fs::read_to_string(&path).unwrap(), SMALL);
    assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), ORIGINAL);
}

#[test]
fn larger_output_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "b.svg", ORIGINAL);

    let report = process(&path, &Grow).unwrap();
    assert_eq!(report.outcome, Outcome::NoGain);
    assert_eq!(fs::read_to_string(&path).unwrap(), ORIGINAL);
    assert!(!backup_path(&path).exists());
}

#[test]
fn equal_length_output_is_no_gain() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "eq.svg", "<svg>ab</svg>");

    let report = process(&path, &Fixed("<svg>cd</svg>")).unwrap();
    assert_eq!(report.outcome, Outcome::NoGain);
    assert_eq!(fs::read_to_string(&path).unwrap(), "<svg>ab</svg>");
    assert!(!backup_path(&path).exists());
}

#[test]
fn post_processing_counts_toward_gain() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "named.svg", r#"<svg><g/></svg>"#);

    // Same length as the input once `data-name` is stripped.
    let report = process(&path, &Fixed(r#"<svg><g data-name="L"/></svg>"#)).unwrap();
    assert_eq!(report.optimized_len, Some(r#"<svg><g/></svg>"#.len()));
    assert_eq!(report.outcome, Outcome::NoGain);
}

#[test]
fn transformer_failure_leaves_file_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.svg", ORIGINAL);

    let err = process(&path, &Fail).unwrap_err();
    assert!(matches!(err, OptimizeError::Transform { .. }));
    assert_eq!(err.original_len(), ORIGINAL.len());
    assert_eq!(fs::read(&path).unwrap(), ORIGINAL.as_bytes());
    assert!(!backup_path(&path).exists());
}

#[test]
fn smaller_output_that_drops_content_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "lossy.svg", ORIGINAL);

    let err = process(&path, &Fixed(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#)).unwrap_err();
    assert!(matches!(err, OptimizeError::Transform { source: TransformError::Lossy(_), .. }));
    assert_eq!(err.original_len(), ORIGINAL.len());
    assert_eq!(fs::read(&path).unwrap(), ORIGINAL.as_bytes());
    assert!(!backup_path(&path).exists());
}

#[test]
fn minifier_keeps_text_image_and_view_box_on_disk() {
    let source = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 100 50">
    <text x="10.000" y="20.000">Hello  FAQ</text>
    <image xlink:href="https://cdn.example.com/logo.png" width="40" height="20"/>
    <use xlink:href="#logo"/>
</svg>
"##;
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "mixed.svg", source);

    let report = process(&path, &SvgMinifier::default()).unwrap();
    assert_eq!(report.outcome, Outcome::Optimized);
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains(r#"viewBox="0 0 100 50""#), "{written}");
    assert!(written.contains("<text x=\"10\" y=\"20\">Hello  FAQ</text>"), "{written}");
    assert!(written.contains(r#"xlink:href="https://cdn.example.com/logo.png""#), "{written}");
    assert!(written.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#), "{written}");
}

#[test]
fn missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = process(&dir.path().join("gone.svg"), &Fixed(SMALL)).unwrap_err();
    assert!(matches!(err, OptimizeError::Read { .. }));
    assert_eq!(err.original_len(), 0);
}

#[test]
fn existing_backup_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "a.svg", ORIGINAL);
    fs::write(backup_path(&path), "stale").unwrap();

    process(&path, &Fixed(SMALL)).unwrap();
    assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), ORIGINAL);
}
