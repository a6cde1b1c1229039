//! Rendering: writes a [`WidgetView`] onto a widget's DOM.
//!
//! This module is the only place that mutates widget classes and inline
//! styles. It reads nothing back from the DOM and holds no state.
//!
//! All fallible DOM calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::engine::Accordion`]) logs and moves on.

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

use crate::consts::MAX_HEIGHT_PROPERTY;
use crate::state::WidgetView;

/// Apply `view` to one widget: set or clear `active_class` on `item` and set
/// or remove the panel's `max-height`.
///
/// # Errors
///
/// Returns `Err` if the class list or style declaration rejects the update.
pub fn apply(item: &Element, panel: &HtmlElement, active_class: &str, view: &WidgetView) -> Result<(), JsValue> {
    item.class_list().toggle_with_force(active_class, view.active)?;

    let style = panel.style();
    match view.max_height.css() {
        Some(value) => style.set_property(MAX_HEIGHT_PROPERTY, &value)?,
        None => {
            style.remove_property(MAX_HEIGHT_PROPERTY)?;
        }
    }
    Ok(())
}
