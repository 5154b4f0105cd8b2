//! Router assembly.
//!
//! The whole site is static: every path other than `/healthz` is looked up
//! in the site directory, with `index.html` appended for directory requests.
//! Fragments (`#open` / `#closed`) never reach the server.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the dev server router for `site_dir`.
pub fn app(site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(trace)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
