use web_sys::{Document, HtmlElement, Window};
use wasm_bindgen::{JsCast, JsValue};

use crate::geometry::{LayoutMetrics, parse_css_px};

/// Resolves custom properties by laying out a hidden probe element.
///
/// The probe gets `padding-left: var(<name>)`, is appended to `<body>`, and
/// its computed padding is read back and parsed. The probe is removed again
/// before returning.
pub struct ProbeMetrics {
    window: Window,
    document: Document,
    body: HtmlElement,
}

impl ProbeMetrics {
    #[must_use]
    pub fn new(window: Window, document: Document, body: HtmlElement) -> Self {
        Self { window, document, body }
    }

    fn measure(&self, name: &str) -> Result<f64, JsValue> {
        let probe = self.document.create_element("div")?.dyn_into::<HtmlElement>()?;
        let style = probe.style();
        style.set_property("position", "absolute")?;
        style.set_property("visibility", "hidden")?;
        style.set_property("padding-left", &format!("var({name})"))?;

        self.body.append_child(&probe)?;
        let value = match self.window.get_computed_style(&probe) {
            Ok(Some(computed)) => computed.get_property_value("padding-left").map(|raw| parse_css_px(&raw)),
            Ok(None) => Ok(0.0),
            Err(err) => Err(err),
        };
        probe.remove();
        value
    }
}

impl LayoutMetrics for ProbeMetrics {
    fn resolve_pixel_length(&self, name: &str) -> f64 {
        match self.measure(name) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not resolve {name}: {err:?}");
                0.0
            }
        }
    }
}
