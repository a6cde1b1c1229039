//! FAQ accordion engine for the brand product pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! open/closed state of every FAQ card it is given, reacts to clicks on each
//! card's toggler, and keeps the panel's inline `max-height` in sync so the
//! stylesheet can animate it. The host page only constructs an accordion per
//! brand prefix and hands it the card elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | DOM-bound [`engine::Accordion`] and testable [`engine::AccordionCore`] |
//! | [`state`] | Per-widget state machine and rendered view |
//! | [`selectors`] | Class-name configuration per widget family |
//! | [`render`] | Writes views onto the DOM |
//! | [`bindings`] | `#[wasm_bindgen]` exports |
//! | [`consts`] | Class names and brand prefixes |

pub mod bindings;
pub mod consts;
pub mod engine;
pub mod render;
pub mod selectors;
pub mod state;
