use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Window};

use super::{ProbeMetrics, listen, location_hash, log_failure, query_html_all};
use crate::consts::{LINKS_ATTR, LINKS_CONTAINER_SELECTOR, MONOLITH_ID, NAV_LINK_SELECTOR, REDUCED_MOTION_QUERY, STATE_ATTR};
use crate::fragment::{self, hash_for};
use crate::geometry::{Rect, compute_row_widths, px};
use crate::monolith::{Action, MonolithCore, Timing, is_activation_key};
use crate::state::{Activation, Links, SharedState};

/// The monolith core plus the DOM nodes its actions touch.
struct MonolithHost {
    core: MonolithCore,
    window: Window,
    body: HtmlElement,
    monolith: HtmlElement,
    links: Vec<HtmlElement>,
    container: Option<Element>,
    metrics: ProbeMetrics,
    settle_timer: Option<Timeout>,
    this: Weak<RefCell<MonolithHost>>,
}

/// Wire the monolith. Skipped when the page has no `#monolith`.
pub(super) fn mount(window: &Window, document: &Document, body: &HtmlElement, shared: &SharedState) -> Result<(), JsValue> {
    let Some(monolith) = document.get_element_by_id(MONOLITH_ID) else {
        log::debug!("no monolith on page");
        return Ok(());
    };
    let monolith = monolith.dyn_into::<HtmlElement>()?;
    let links = query_html_all(document, NAV_LINK_SELECTOR)?;
    let container = document.query_selector(LINKS_CONTAINER_SELECTOR)?;
    let reduced_motion = matches!(window.match_media(REDUCED_MOTION_QUERY), Ok(Some(mq)) if mq.matches());

    let host = Rc::new_cyclic(|this| {
        RefCell::new(MonolithHost {
            core: MonolithCore::new(Rc::clone(shared), Timing::new(reduced_motion)),
            window: window.clone(),
            body: body.clone(),
            monolith: monolith.clone(),
            links: links.clone(),
            container,
            metrics: ProbeMetrics::new(window.clone(), document.clone(), body.clone()),
            settle_timer: None,
            this: this.clone(),
        })
    });

    {
        let mut h = host.borrow_mut();
        let actions = h.core.setup(&location_hash(window));
        h.perform(actions)?;
        h.relayout();
    }

    let on_click = Rc::clone(&host);
    listen(&monolith, "click", move |_| on_click.borrow_mut().toggle())?;

    let on_key = Rc::clone(&host);
    listen(&monolith, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_activation_key(&key_event.key()) {
            event.prevent_default();
            on_key.borrow_mut().toggle();
        }
    })?;

    for link in &links {
        let guard = Rc::clone(&host);
        listen(link, "click", move |event| {
            event.stop_propagation();
            if !guard.borrow().core.link_click().allow_navigation {
                event.prevent_default();
            }
        })?;
    }

    for event in ["resize", "load"] {
        let on_layout = Rc::clone(&host);
        listen(window, event, move |_| on_layout.borrow().relayout())?;
    }

    log::info!("monolith ready ({})", host.borrow().core.state().as_str());
    Ok(())
}

impl MonolithHost {
    fn toggle(&mut self) {
        let actions = self.core.toggle(&location_hash(&self.window));
        log_failure("monolith toggle", self.perform(actions));
    }

    fn settle(&mut self, ticket: u64) {
        let actions = self.core.settle(ticket);
        log_failure("monolith settle", self.perform(actions));
    }

    fn perform(&mut self, actions: Vec<Action>) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::SetActivation(state) => self.set_activation(state)?,
                Action::SetLinksEnabled(enabled) => self.set_links_enabled(enabled)?,
                Action::RewriteLinks(state) => self.rewrite_links(state)?,
                Action::ReplaceFragment(state) => self.replace_fragment(state)?,
                // Dropping a gloo `Timeout` clears it.
                Action::CancelSettle => self.settle_timer = None,
                Action::ScheduleSettle { ticket, delay_ms } => self.schedule_settle(ticket, delay_ms),
            }
        }
        Ok(())
    }

    fn set_activation(&self, state: Activation) -> Result<(), JsValue> {
        self.body.set_attribute(STATE_ATTR, state.as_str())?;
        self.monolith
            .set_attribute("aria-pressed", if state.is_active() { "true" } else { "false" })
    }

    fn set_links_enabled(&self, enabled: bool) -> Result<(), JsValue> {
        self.body.set_attribute(LINKS_ATTR, Links::from_enabled(enabled).as_str())?;
        for link in &self.links {
            if enabled {
                link.remove_attribute("tabindex")?;
            } else {
                link.set_attribute("tabindex", "-1")?;
            }
        }
        if let Some(container) = &self.container {
            container.set_attribute("aria-hidden", if enabled { "false" } else { "true" })?;
        }
        Ok(())
    }

    fn rewrite_links(&self, state: Activation) -> Result<(), JsValue> {
        for link in &self.links {
            let raw = link.get_attribute("href").unwrap_or_default();
            link.set_attribute("href", &fragment::with_fragment(&raw, state))?;
        }
        Ok(())
    }

    /// Swap the fragment in place via `history.replaceState`, falling back to
    /// assigning `location.hash` when history is unavailable.
    fn replace_fragment(&self, state: Activation) -> Result<(), JsValue> {
        let location = self.window.location();
        if let Ok(history) = self.window.history() {
            let url = fragment::replacement_url(&location.pathname()?, &location.search()?, state);
            match history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                Ok(()) => return Ok(()),
                Err(err) => log::debug!("replaceState failed, assigning hash: {err:?}"),
            }
        }
        location.set_hash(hash_for(state))
    }

    fn schedule_settle(&mut self, ticket: u64, delay_ms: u32) {
        let this = self.this.clone();
        self.settle_timer = Some(Timeout::new(delay_ms, move || {
            if let Some(host) = this.upgrade() {
                host.borrow_mut().settle(ticket);
            }
        }));
    }

    /// Fit every nav link's row inside the monolith's ellipse.
    fn relayout(&self) {
        if self.links.is_empty() {
            return;
        }
        let monolith = to_rect(&self.monolith);
        let rows: Vec<Rect> = self.links.iter().map(|link| to_rect(link)).collect();
        let fits = compute_row_widths(&monolith, &rows, &self.metrics);
        for (link, fit) in self.links.iter().zip(fits) {
            let style = link.style();
            let result = style
                .set_property("max-width", &px(fit.max_width))
                .and_then(|()| style.set_property("padding-inline", &px(fit.padding_inline)))
                .and_then(|()| style.set_property("margin-inline", "auto"));
            log_failure("link layout", result);
        }
    }
}

fn to_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}
