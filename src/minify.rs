//! Conservative SVG minifier.
//!
//! The document is parsed with `roxmltree` and the same element tree is
//! written back without the XML declaration, DOCTYPE, comments, processing
//! instructions, `<metadata>`, and formatting whitespace. Plain numeric
//! geometry attributes are rounded to `precision` decimals. Every other
//! element, attribute, and text node is written unchanged, so `viewBox`,
//! `<text>`, and `<image>` references survive.

#[cfg(test)]
#[path = "minify_test.rs"]
mod minify_test;

use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::consts::FLOAT_PRECISION;
use crate::error::TransformError;
use crate::transform::Transformer;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Elements whose whitespace-only text is significant.
pub const TEXT_CONTENT: &[&str] = &["text", "tspan", "textPath", "style", "script", "title", "desc"];

/// Attributes holding a single unitless number that may be rounded.
const NUMERIC_ATTRS: &[&str] = &[
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "width",
    "height",
    "stroke-width",
    "opacity",
    "fill-opacity",
    "stroke-opacity",
];

/// Minification options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct MinifyOptions {
    /// Decimal places kept for numeric attributes (default: 2)
    pub precision: u8,
    /// Remove comments
    pub remove_comments: bool,
    /// Remove `<metadata>` elements
    pub remove_metadata: bool,
    /// Drop whitespace-only text outside text content elements
    pub collapse_whitespace: bool,
    /// Round numeric geometry attributes
    pub round_numbers: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            precision: FLOAT_PRECISION,
            remove_comments: true,
            remove_metadata: true,
            collapse_whitespace: true,
            round_numbers: true,
        }
    }
}

/// [`Transformer`] backed by [`minify`].
#[derive(Debug, Clone, Default)]
pub struct SvgMinifier {
    options: MinifyOptions,
}

impl SvgMinifier {
    #[must_use]
    pub fn new(options: MinifyOptions) -> Self {
        Self { options }
    }
}

impl Transformer for SvgMinifier {
    fn transform(&self, source: &str, _path: &Path) -> Result<String, TransformError> {
        minify(source, &self.options)
    }
}

/// Parse SVG source, accepting a DOCTYPE.
///
/// # Errors
///
/// Returns `Err` if `source` is not well-formed XML.
pub fn parse(source: &str) -> Result<Document<'_>, roxmltree::Error> {
    Document::parse_with_options(source, ParsingOptions { allow_dtd: true, ..ParsingOptions::default() })
}

/// Minify an SVG string.
///
/// # Errors
///
/// Returns `Err` if `source` is not well-formed XML.
pub fn minify(source: &str, options: &MinifyOptions) -> Result<String, TransformError> {
    let doc = parse(source)?;
    let mut out = String::with_capacity(source.len());
    write_element(&mut out, doc.root_element(), options, false);
    Ok(out)
}

/// Round a plain number to `precision` decimals, returning the rounded text
/// only when it is shorter than `value`.
#[must_use]
pub fn round_number(value: &str, precision: u8) -> Option<String> {
    let n: f64 = value.trim().parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    let mut text = format!("{:.*}", usize::from(precision), n);
    if text.contains('.') {
        let len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(len);
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    (text.len() < value.len()).then_some(text)
}

/// Whether `node` is an SVG `<metadata>` element.
#[must_use]
pub fn is_metadata(node: Node<'_, '_>) -> bool {
    node.is_element()
        && node.tag_name().name() == "metadata"
        && node.tag_name().namespace().is_none_or(|ns| ns == SVG_NS)
}

fn write_element(out: &mut String, node: Node<'_, '_>, options: &MinifyOptions, preserve_space: bool) {
    let local = node.tag_name().name();
    let name = qualified(node, node.tag_name().namespace(), local, false);
    out.push('<');
    out.push_str(&name);

    write_namespace_declarations(out, node);
    for attr in node.attributes() {
        out.push(' ');
        out.push_str(&qualified(node, attr.namespace(), attr.name(), true));
        out.push_str("=\"");
        let rounded = if options.round_numbers && attr.namespace().is_none() && NUMERIC_ATTRS.contains(&attr.name()) {
            round_number(attr.value(), options.precision)
        } else {
            None
        };
        push_escaped(out, rounded.as_deref().unwrap_or(attr.value()), true);
        out.push('"');
    }

    let preserve = preserve_space
        || TEXT_CONTENT.contains(&local)
        || node.attribute((XML_NS, "space")) == Some("preserve");
    let children: Vec<Node<'_, '_>> = node.children().filter(|c| keep(*c, options, preserve)).collect();
    if children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in children {
        if child.is_element() {
            write_element(out, child, options, preserve);
        } else if child.is_comment() {
            out.push_str("<!--");
            out.push_str(child.text().unwrap_or_default());
            out.push_str("-->");
        } else {
            push_escaped(out, child.text().unwrap_or_default(), false);
        }
    }
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

fn keep(node: Node<'_, '_>, options: &MinifyOptions, preserve: bool) -> bool {
    if node.is_element() {
        return !(options.remove_metadata && is_metadata(node));
    }
    if node.is_text() {
        return preserve || !options.collapse_whitespace || !node.text().unwrap_or_default().trim().is_empty();
    }
    if node.is_comment() {
        return !options.remove_comments;
    }
    false
}

/// Emit the namespaces in scope on `node` that its parent does not already declare.
fn write_namespace_declarations(out: &mut String, node: Node<'_, '_>) {
    let parent = node.parent_element();
    for ns in node.namespaces() {
        if ns.uri() == XML_NS {
            continue;
        }
        let inherited = parent.is_some_and(|p| p.namespaces().any(|pns| pns.name() == ns.name() && pns.uri() == ns.uri()));
        if inherited {
            continue;
        }
        match ns.name() {
            Some(prefix) => {
                out.push_str(" xmlns:");
                out.push_str(prefix);
            }
            None => out.push_str(" xmlns"),
        }
        out.push_str("=\"");
        push_escaped(out, ns.uri(), true);
        out.push('"');
    }
}

/// Qualified name for `local` in namespace `uri`, as seen from `node`.
///
/// Unprefixed attributes carry no namespace, so attributes never resolve to
/// the default namespace.
fn qualified(node: Node<'_, '_>, uri: Option<&str>, local: &str, attribute: bool) -> String {
    let Some(uri) = uri else {
        return local.to_owned();
    };
    if uri == XML_NS {
        return format!("xml:{local}");
    }
    let mut prefix = None;
    for ns in node.namespaces() {
        if ns.uri() != uri {
            continue;
        }
        match ns.name() {
            None if !attribute => return local.to_owned(),
            Some(name) => {
                prefix.get_or_insert_with(|| name.to_owned());
            }
            None => {}
        }
    }
    match prefix {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_owned(),
    }
}

fn push_escaped(out: &mut String, text: &str, attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
