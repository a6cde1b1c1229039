//! Class-name configuration for one family of FAQ widgets.
//!
//! Every brand renders the same markup and differs only in the BEM prefix, so
//! one [`Selectors`] value fully describes which elements are widgets, which
//! child toggles them, and which child collapses.

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ACTIVE_CLASS, ITEM_BLOCK, PANEL_ELEMENT, TOGGLER_ELEMENT};

/// Class names identifying the parts of a widget.
///
/// All fields are bare class names (no leading `.`). Use [`Selectors::query`]
/// to turn one into a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    /// Class on the widget root element.
    pub item: String,
    /// Class on the clickable header.
    pub toggler: String,
    /// Class on the collapsible content region.
    pub panel: String,
    /// Marker class present on the widget root while open.
    pub active: String,
}

impl Selectors {
    /// Build the selector set for a brand prefix such as `"haier"`.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        let item = format!("{prefix}__{ITEM_BLOCK}");
        Self {
            toggler: format!("{item}-{TOGGLER_ELEMENT}"),
            panel: format!("{item}-{PANEL_ELEMENT}"),
            item,
            active: ACTIVE_CLASS.to_owned(),
        }
    }

    /// CSS class selector for a bare class name.
    #[must_use]
    pub fn query(class: &str) -> String {
        format!(".{class}")
    }

    /// CSS selector matching widget roots.
    #[must_use]
    pub fn item_query(&self) -> String {
        Self::query(&self.item)
    }

    /// CSS selector matching the panel inside a widget.
    #[must_use]
    pub fn panel_query(&self) -> String {
        Self::query(&self.panel)
    }
}
