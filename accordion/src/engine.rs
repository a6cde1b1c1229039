//! Accordion engine: pure per-widget state plus the browser binding.
//!
//! DESIGN
//! ======
//! [`AccordionCore`] owns every widget's open/closed state and answers clicks
//! with [`Action`]s. It never sees the DOM, so it is tested natively.
//! [`Accordion`] measures panels, attaches one click listener per widget root,
//! and hands each action to `render::apply`.
//!
//! A widget exists in the core only if its listener was attached, so core ids
//! and bound elements always correspond one to one.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, Node};

use crate::render;
use crate::selectors::Selectors;
use crate::state::{ClickTarget, WidgetId, WidgetState, WidgetView};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from the core for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Bring the widget's marker class and panel height in line with `view`.
    Render { id: WidgetId, view: WidgetView },
}

/// Core accordion state: all logic that doesn't depend on the DOM.
///
/// Separated from `Accordion` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct AccordionCore {
    widgets: Vec<WidgetState>,
}

impl AccordionCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Registration ---

    /// Add a widget. `open` is whether it was rendered with the active marker;
    /// `content_height` is its panel's natural height, or `None` without a panel.
    pub fn register(&mut self, open: bool, content_height: Option<f64>) -> WidgetId {
        self.widgets.push(WidgetState::new(open, content_height));
        self.widgets.len() - 1
    }

    /// Add a widget only if `attach` succeeds for the id it will receive.
    ///
    /// # Errors
    ///
    /// Returns the error from `attach`; nothing is registered in that case.
    pub fn register_with<T, E>(
        &mut self,
        open: bool,
        content_height: Option<f64>,
        attach: impl FnOnce(WidgetId) -> Result<T, E>,
    ) -> Result<(WidgetId, T), E> {
        let id = self.widgets.len();
        let handle = attach(id)?;
        self.widgets.push(WidgetState::new(open, content_height));
        Ok((id, handle))
    }

    /// Render action that syncs one widget's panel with its initial state.
    #[must_use]
    pub fn init(&self, id: WidgetId) -> Option<Action> {
        let view = self.view(id)?;
        Some(Action::Render { id, view })
    }

    /// Render actions for every widget that has a panel.
    #[must_use]
    pub fn init_all(&self) -> Vec<Action> {
        (0..self.widgets.len()).filter_map(|id| self.init(id)).collect()
    }

    // --- Input ---

    /// Handle a click inside widget `id`.
    ///
    /// `content_height` is the panel's natural height measured at click time.
    /// Clicks off the toggler, unknown ids, and widgets without a panel are no-ops.
    pub fn on_click(&mut self, id: WidgetId, target: ClickTarget, content_height: Option<f64>) -> Vec<Action> {
        if target != ClickTarget::Toggler {
            return Vec::new();
        }
        let Some(widget) = self.widgets.get_mut(id) else {
            return Vec::new();
        };
        let Some(height) = content_height.or(widget.content_height) else {
            return Vec::new();
        };
        widget.content_height = Some(height);
        widget.state = widget.state.toggled();
        self.init(id).into_iter().collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    #[must_use]
    pub fn widget(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widgets.get(id)
    }

    /// Rendered view of a widget, or `None` if unknown or panel-less.
    #[must_use]
    pub fn view(&self, id: WidgetId) -> Option<WidgetView> {
        self.widgets.get(id)?.view()
    }

    /// Views of all widgets in registration order.
    #[must_use]
    pub fn views(&self) -> Vec<Option<WidgetView>> {
        self.widgets.iter().map(WidgetState::view).collect()
    }
}

/// DOM handles for one bound widget.
struct BoundWidget {
    id: WidgetId,
    item: Element,
    _listener: Closure<dyn FnMut(Event)>,
}

/// The browser accordion. Wraps a shared `AccordionCore` and owns the click
/// listeners it attached.
pub struct Accordion {
    selectors: Selectors,
    core: Rc<RefCell<AccordionCore>>,
    bound: Vec<BoundWidget>,
}

impl Accordion {
    #[must_use]
    pub fn new(selectors: Selectors) -> Self {
        Self { selectors, core: Rc::new(RefCell::new(AccordionCore::new())), bound: Vec::new() }
    }

    #[must_use]
    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Bind every element in `items` not already bound: sync its panel with
    /// the active marker and attach one click listener.
    ///
    /// Safe to call again with a collection that overlaps earlier ones.
    /// Returns the number of newly bound widgets.
    pub fn init(&mut self, items: &[Element]) -> usize {
        let mut added = 0;
        for item in items {
            if self.is_bound(item) {
                continue;
            }
            if self.bind(item) {
                added += 1;
            }
        }
        log::debug!("accordion bound {added} new widget(s), {} total", self.bound.len());
        added
    }

    /// Query the current document for widget roots and bind them.
    pub fn bind_document(&mut self) -> usize {
        let items = query_document(&self.selectors.item_query());
        self.init(&items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Current views of all bound widgets, in binding order.
    #[must_use]
    pub fn views(&self) -> Vec<Option<WidgetView>> {
        let core = self.core.borrow();
        self.bound.iter().map(|b| core.view(b.id)).collect()
    }

    fn is_bound(&self, item: &Element) -> bool {
        let node: &Node = item;
        self.bound.iter().any(|b| b.item.is_same_node(Some(node)))
    }

    fn bind(&mut self, item: &Element) -> bool {
        let panel = find_panel(item, &self.selectors);
        let open = item.class_list().contains(&self.selectors.active);
        let height = panel.as_ref().map(measure);

        let registered = self.core.borrow_mut().register_with(open, height, |id| {
            let listener = click_listener(Rc::clone(&self.core), id, item, panel.clone(), &self.selectors);
            item.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref()).map(|()| listener)
        });
        let (id, listener) = match registered {
            Ok(bound) => bound,
            Err(err) => {
                log::warn!("accordion: failed to attach click listener: {err:?}");
                return false;
            }
        };

        if let Some(action) = self.core.borrow().init(id) {
            apply(item, panel.as_ref(), &self.selectors.active, action);
        }
        self.bound.push(BoundWidget { id, item: item.clone(), _listener: listener });
        true
    }
}

/// Click handler for widget `id`: classify, measure, step the core, render.
fn click_listener(
    core: Rc<RefCell<AccordionCore>>,
    id: WidgetId,
    item: &Element,
    panel: Option<HtmlElement>,
    selectors: &Selectors,
) -> Closure<dyn FnMut(Event)> {
    let item = item.clone();
    let toggler = selectors.toggler.clone();
    let active = selectors.active.clone();
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = classify(&event, &toggler);
        let height = panel.as_ref().map(measure);
        let actions = core.borrow_mut().on_click(id, target, height);
        for action in actions {
            apply(&item, panel.as_ref(), &active, action);
        }
    })
}

/// Classify a click by whether its target carries the toggler class.
fn classify(event: &Event, toggler: &str) -> ClickTarget {
    let on_toggler = event
        .target()
        .is_some_and(|t| t.dyn_ref::<Element>().is_some_and(|el| el.class_list().contains(toggler)));
    if on_toggler { ClickTarget::Toggler } else { ClickTarget::Other }
}

fn find_panel(item: &Element, selectors: &Selectors) -> Option<HtmlElement> {
    match item.query_selector(&selectors.panel_query()) {
        Ok(Some(el)) => el.dyn_ref::<HtmlElement>().cloned(),
        Ok(None) => None,
        Err(err) => {
            log::warn!("accordion: panel query failed: {err:?}");
            None
        }
    }
}

fn measure(panel: &HtmlElement) -> f64 {
    f64::from(panel.scroll_height())
}

fn apply(item: &Element, panel: Option<&HtmlElement>, active_class: &str, action: Action) {
    let Action::Render { id, view } = action;
    let Some(panel) = panel else {
        return;
    };
    if let Err(err) = render::apply(item, panel, active_class, &view) {
        log::warn!("accordion: render of widget {id} failed: {err:?}");
    }
}

fn query_document(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("accordion: query {selector} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}
