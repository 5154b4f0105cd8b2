//! Client-side interaction layer for the Time Machines static site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns two
//! small controllers: the light/dark theme switch on content pages, and the
//! "monolith" on the home page, whose open/closed state reveals the
//! navigation links and lays them out inside its ellipse. A third pass keeps
//! links back to the home page carrying the current open/closed fragment.
//!
//! All logic lives in browser-free modules so it can be tested natively. The
//! [`dom`] module (behind the `hydrate` feature) only wires DOM events to the
//! cores and performs the [`monolith::Action`]s they return.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Page-level state container shared by the controllers |
//! | [`fragment`] | URL fragment protocol (`#open` / `#closed`) |
//! | [`theme`] | Theme toggle core |
//! | [`monolith`] | Activation state machine with busy guard and settle timer |
//! | [`geometry`] | Elliptical row-width layout for the nav links |
//! | [`annotate`] | Home-link fragment carry-over |
//! | [`consts`] | Selectors, timings, and other shared constants |
//! | `dom` | Browser bindings (`hydrate` feature only) |

pub mod annotate;
pub mod consts;
pub mod fragment;
pub mod geometry;
pub mod monolith;
pub mod state;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: install the panic hook and logger, then boot the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"site: logger already initialized".into());
    }
    if let Err(err) = dom::boot() {
        log::error!("site boot failed: {err:?}");
    }
}
