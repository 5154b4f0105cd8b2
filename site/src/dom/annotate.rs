use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use super::{listen, location_hash, log_failure, query_html_all};
use crate::annotate::{home_link_indices, home_target};

/// Keep links to the home page in step with the current fragment.
///
/// The set of home links is fixed at load; it is re-annotated on every
/// `hashchange`.
pub(super) fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let anchors = query_html_all(document, "a[href]")?;
    let hrefs: Vec<Option<String>> = anchors.iter().map(|a| a.get_attribute("href")).collect();
    let home_links: Vec<HtmlElement> = home_link_indices(hrefs.iter().map(Option::as_deref))
        .into_iter()
        .map(|i| anchors[i].clone())
        .collect();
    if home_links.is_empty() {
        return Ok(());
    }

    apply(window, &home_links)?;

    let win = window.clone();
    listen(window, "hashchange", move |_| {
        log_failure("home link annotation", apply(&win, &home_links));
    })
}

fn apply(window: &Window, home_links: &[HtmlElement]) -> Result<(), JsValue> {
    let Some(target) = home_target(&location_hash(window)) else {
        return Ok(());
    };
    for link in home_links {
        link.set_attribute("href", &target)?;
    }
    Ok(())
}
