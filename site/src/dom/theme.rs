use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use super::{listen, log_failure};
use crate::consts::{THEME_ATTR, THEME_TOGGLE_SELECTOR};
use crate::state::SharedState;
use crate::theme::{ThemeCore, ToggleAttrs};

/// Wire the theme toggle. Skipped when the page has no toggle control.
pub(super) fn mount(document: &Document, body: &HtmlElement, shared: &SharedState) -> Result<(), JsValue> {
    let Some(toggle) = document.query_selector(THEME_TOGGLE_SELECTOR)? else {
        log::debug!("no theme toggle on page");
        return Ok(());
    };

    let mut core = ThemeCore::new(Rc::clone(shared));
    let attrs = core.initialize(body.get_attribute(THEME_ATTR).as_deref());
    write(body, &toggle, &core, attrs)?;

    let core = Rc::new(RefCell::new(core));
    let body = body.clone();
    let target = toggle.clone();
    listen(&toggle, "click", move |_| {
        let mut core = core.borrow_mut();
        let attrs = core.toggle();
        log_failure("theme toggle", write(&body, &target, &core, attrs));
    })
}

fn write(body: &HtmlElement, toggle: &Element, core: &ThemeCore, attrs: ToggleAttrs) -> Result<(), JsValue> {
    body.set_attribute(THEME_ATTR, core.state().as_str())?;
    toggle.set_attribute("aria-pressed", attrs.pressed_str())?;
    toggle.set_attribute("aria-label", attrs.label)
}
