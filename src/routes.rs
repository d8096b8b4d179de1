//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is one Leptos page rendered on the server and hydrated in
//! the browser. Alongside the SSR routes the router serves the compiled
//! WASM/CSS bundle under `/pkg`, a health probe, and everything else
//! (images, resume PDF, robots.txt) straight from the site root.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Directory serving `/pkg` and static assets: the configured override, or
/// Leptos' `site-root`.
pub fn resolve_site_root(config: &ServerConfig, leptos_site_root: &str) -> PathBuf {
    config.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
}

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` and no `LEPTOS_*` overrides).
pub fn app(config: &ServerConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;

    let site_root = resolve_site_root(config, &leptos_options.site_root);
    leptos_options.site_root = site_root.to_string_lossy().as_ref().into();
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    let routes = generate_route_list(site::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir(&site_root)))
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

fn pkg_dir(site_root: &Path) -> PathBuf {
    site_root.join("pkg")
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
