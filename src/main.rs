//! Local development server for the Time Machines static site.
//!
//! Serves the built site directory (markup, styles, and the `site` crate's
//! WASM bundle) over HTTP. For hosting, deploy the directory itself to any
//! static host; this binary is only for local development.

mod config;
mod routes;

use std::path::PathBuf;

use config::{ConfigError, ServeConfig};

#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("missing site directory: {}", .0.display())]
    MissingSiteDir(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "dev server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServeConfig::from_env()?;
    if !config.site_dir.is_dir() {
        return Err(ServeError::MissingSiteDir(config.site_dir));
    }

    let app = routes::app(&config.site_dir);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(dir = %config.site_dir.display(), "serving");
    tracing::info!(url = %config.url(), "open");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("stopping");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; stop the process to exit");
        std::future::pending::<()>().await;
    }
}
