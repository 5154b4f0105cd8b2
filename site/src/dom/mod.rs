//! Browser bindings for the interaction cores.
//!
//! Everything here is glue: query the markup, forward DOM events to the
//! cores in this crate, and carry out what they return. A controller whose
//! anchor element is missing is skipped without error; DOM calls that fail
//! after that surface as `Err(JsValue)` and are logged by the caller.

mod annotate;
mod metrics;
mod monolith;
mod theme;

pub use metrics::ProbeMetrics;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

use crate::consts::{HOME_CLASS, PAGE_CLASS};
use crate::state;

/// Initialize every controller that applies to the current page.
///
/// # Errors
///
/// Returns `Err` if the window/document is unavailable or a DOM call fails
/// while wiring a controller.
pub fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(body) = document.body() else {
        log::debug!("no <body>, nothing to boot");
        return Ok(());
    };

    let shared = state::shared();
    let classes = body.class_list();

    if classes.contains(PAGE_CLASS) {
        theme::mount(&document, &body, &shared)?;
    }

    annotate::mount(&window, &document)?;

    if classes.contains(HOME_CLASS) {
        monolith::mount(&window, &document, &body, &shared)?;
    }
    Ok(())
}

/// Attach `handler` to `target` for the page's lifetime.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>())?;
    closure.forget();
    Ok(())
}

/// All elements matching `selector` that are `HtmlElement`s, in document order.
fn query_html_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

/// The current location hash, or `""` if it cannot be read.
fn location_hash(window: &Window) -> String {
    match window.location().hash() {
        Ok(hash) => hash,
        Err(err) => {
            log::warn!("could not read location hash: {err:?}");
            String::new()
        }
    }
}

fn log_failure(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {err:?}");
    }
}
