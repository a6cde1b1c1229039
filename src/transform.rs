//! The SVG transformer seam, multipass driver, and output checks.
//!
//! DESIGN
//! ======
//! [`Transformer`] is the seam to the optimizer proper ([`crate::minify`]).
//! [`Multipass`] repeats a transformer while it keeps shrinking the output.
//! A final text pass ([`strip_redundant_attributes`]) removes attributes the
//! site never reads. Before anything is written back, [`ensure_fidelity`]
//! compares the document outline of input and output, so a transformer that
//! drops content can never be reported as a gain.
//!
//! ERROR HANDLING
//! ==============
//! A failure on the first pass fails the file. A failure on a later pass ends
//! the loop and keeps the last good output.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;
use tracing::{debug, warn};

use crate::error::TransformError;
use crate::minify::{self, is_metadata};

/// Rewrites SVG source for size. Implementations must not touch the filesystem.
pub trait Transformer {
    /// Transform `source`, read from `path`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input is rejected.
    fn transform(&self, source: &str, path: &Path) -> Result<String, TransformError>;
}

impl<T: Transformer + ?Sized> Transformer for &T {
    fn transform(&self, source: &str, path: &Path) -> Result<String, TransformError> {
        (**self).transform(source, path)
    }
}

/// Runs `inner` repeatedly while each pass shrinks the output, up to
/// `max_passes` passes.
pub struct Multipass<T> {
    inner: T,
    max_passes: usize,
}

impl<T: Transformer> Multipass<T> {
    #[must_use]
    pub fn new(inner: T, max_passes: usize) -> Self {
        Self { inner, max_passes: max_passes.max(1) }
    }
}

impl<T: Transformer> Transformer for Multipass<T> {
    fn transform(&self, source: &str, path: &Path) -> Result<String, TransformError> {
        let mut output = self.inner.transform(source, path)?;
        let mut passes = 1;
        while passes < self.max_passes {
            let next = match self.inner.transform(&output, path) {
                Ok(next) => next,
                Err(err) => {
                    warn!(path = %path.display(), pass = passes + 1, %err, "pass failed, keeping previous output");
                    break;
                }
            };
            passes += 1;
            if next.len() >= output.len() {
                break;
            }
            output = next;
        }
        debug!(path = %path.display(), passes, "transform finished");
        if output.trim().is_empty() {
            return Err(TransformError::Empty);
        }
        Ok(output)
    }
}

static DATA_NAME_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+data-name\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("static regex"));

static XLINK_NS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+xmlns:xlink\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("static regex"));

/// Remove `data-name` attributes, and the `xmlns:xlink` declaration when no
/// `xlink:` name is left to need it.
#[must_use]
pub fn strip_redundant_attributes(svg: &str) -> String {
    let stripped = DATA_NAME_ATTR.replace_all(svg, "").into_owned();
    let without_ns = XLINK_NS_ATTR.replace_all(&stripped, "").into_owned();
    if without_ns.contains("xlink:") { stripped } else { without_ns }
}

/// What a rendering of the document depends on, for comparing two versions
/// of it.
#[derive(Debug, PartialEq)]
struct Outline {
    view_box: Option<String>,
    elements: Vec<String>,
    references: Vec<String>,
    text: Vec<String>,
}

impl Outline {
    fn of(source: &str) -> Result<Self, TransformError> {
        let doc = minify::parse(source)?;
        let root = doc.root_element();
        let mut outline = Self {
            view_box: root.attribute("viewBox").map(normalize_list),
            elements: Vec::new(),
            references: Vec::new(),
            text: Vec::new(),
        };
        outline.visit(root);
        Ok(outline)
    }

    fn visit(&mut self, node: Node<'_, '_>) {
        if is_metadata(node) {
            return;
        }
        if node.is_element() {
            self.elements.push(node.tag_name().name().to_owned());
            for attr in node.attributes().filter(|a| a.name() == "href") {
                self.references.push(attr.value().to_owned());
            }
        } else if node.is_text() {
            let text = node.text().unwrap_or_default().trim();
            if !text.is_empty() {
                self.text.push(text.to_owned());
            }
        }
        for child in node.children() {
            self.visit(child);
        }
    }
}

fn normalize_list(value: &str) -> String {
    value.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Check that `output` keeps everything of `source` that affects rendering:
/// the root `viewBox`, every element outside `<metadata>`, every `href`, and
/// all non-blank text.
///
/// # Errors
///
/// Returns [`TransformError::Lossy`] naming the first difference, or
/// [`TransformError::Parse`] if either document does not parse.
pub fn ensure_fidelity(source: &str, output: &str) -> Result<(), TransformError> {
    let before = Outline::of(source)?;
    let after = Outline::of(output)?;
    if before.view_box != after.view_box {
        return Err(TransformError::Lossy(format!("viewBox {:?} became {:?}", before.view_box, after.view_box)));
    }
    if before.elements != after.elements {
        return Err(TransformError::Lossy(format!(
            "element structure changed ({} elements became {})",
            before.elements.len(),
            after.elements.len()
        )));
    }
    if before.references != after.references {
        return Err(TransformError::Lossy("href references changed".to_owned()));
    }
    if before.text != after.text {
        return Err(TransformError::Lossy("text content changed".to_owned()));
    }
    Ok(())
}
