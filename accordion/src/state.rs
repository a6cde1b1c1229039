//! Widget model: the open/closed state machine and its rendered view.
//!
//! A widget is either `Closed` or `Open`. The only transition is a click on
//! its toggler, which flips the state. Everything the renderer needs is
//! derived from [`WidgetState`] through [`WidgetState::view`]; no state lives
//! in the DOM.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Index of a widget inside an [`crate::engine::AccordionCore`].
pub type WidgetId = usize;

/// Where a click on a widget landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The designated toggle control.
    Toggler,
    /// Anywhere else inside the widget, including the panel body.
    Other,
}

/// Open/closed state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Panel collapsed (initial unless pre-marked active).
    #[default]
    Closed,
    /// Panel expanded to its natural height.
    Open,
}

impl PanelState {
    /// The state after a toggler click.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Value of the panel's `max-height` style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "px", rename_all = "lowercase")]
pub enum MaxHeight {
    /// Property removed; the stylesheet collapses the panel.
    Unset,
    /// Explicit height in CSS pixels.
    Px(f64),
}

impl MaxHeight {
    /// CSS text for the style property, or `None` when it should be removed.
    #[must_use]
    pub fn css(self) -> Option<String> {
        match self {
            Self::Unset => None,
            Self::Px(px) => Some(format!("{px}px")),
        }
    }
}

/// What the renderer applies to one widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetView {
    /// Whether the active marker class is present.
    pub active: bool,
    /// Panel `max-height`.
    pub max_height: MaxHeight,
}

/// Per-widget state held by the core.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetState {
    /// Current open/closed state.
    pub state: PanelState,
    /// Last measured natural height of the panel content, or `None` if the
    /// widget has no panel.
    pub content_height: Option<f64>,
}

impl WidgetState {
    #[must_use]
    pub fn new(open: bool, content_height: Option<f64>) -> Self {
        let state = if open { PanelState::Open } else { PanelState::Closed };
        Self { state, content_height }
    }

    #[must_use]
    pub fn has_panel(&self) -> bool {
        self.content_height.is_some()
    }

    /// Rendered view, or `None` for a widget without a panel.
    #[must_use]
    pub fn view(&self) -> Option<WidgetView> {
        let height = self.content_height?;
        let max_height = if self.state.is_open() { MaxHeight::Px(height) } else { MaxHeight::Unset };
        Some(WidgetView { active: self.state.is_open(), max_height })
    }
}
