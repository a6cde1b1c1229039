//! JavaScript entry points.
//!
//! The page script constructs one [`FaqAccordion`] per widget family and hands
//! it the widget roots to manage:
//!
//! ```js
//! const haier = new FaqAccordion("haier");
//! haier.bind_document();
//! // later, after injecting more cards:
//! haier.init(Array.from(container.querySelectorAll(".haier__card-faq-card")));
//! ```

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::engine::Accordion;
use crate::selectors::Selectors;

/// Install the panic hook and console logger once per module instance.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
}

/// Accordion handle exported to JavaScript.
#[wasm_bindgen]
pub struct FaqAccordion {
    inner: Accordion,
}

#[wasm_bindgen]
impl FaqAccordion {
    /// Create an accordion for the widget family with class prefix `prefix`.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(prefix: &str) -> FaqAccordion {
        Self { inner: Accordion::new(Selectors::with_prefix(prefix)) }
    }

    /// Create an accordion from a JSON selector set
    /// (`{"item", "toggler", "panel", "active"}`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if `json` is not a valid selector set.
    pub fn with_selectors(json: &str) -> Result<FaqAccordion, JsValue> {
        let selectors: Selectors =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("invalid selectors: {e}")))?;
        Ok(Self { inner: Accordion::new(selectors) })
    }

    /// Bind the given widget roots. Non-element entries are skipped.
    /// Returns the number of newly bound widgets.
    pub fn init(&mut self, items: &Array) -> usize {
        let elements: Vec<Element> = items.iter().filter_map(|v| v.dyn_ref::<Element>().cloned()).collect();
        if elements.len() < items.length() as usize {
            log::warn!("accordion: skipped {} non-element item(s)", items.length() as usize - elements.len());
        }
        self.inner.init(&elements)
    }

    /// Bind every widget root currently in the document.
    pub fn bind_document(&mut self) -> usize {
        self.inner.bind_document()
    }

    /// Number of bound widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// JSON array of widget views (`null` for widgets without a panel).
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.views()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
