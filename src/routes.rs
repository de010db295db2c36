//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host holds no chat state. It server-renders the Leptos shell, serves
//! the WASM/CSS bundle and static assets from the site root, and answers a
//! health check, all under the configured base path. Chat traffic goes from
//! the browser straight to the event stream and the fullnode.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::extract::Request;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower::ServiceExt;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Leptos SSR app plus static files.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    // Route paths already carry the base path from the client `<Router base>`.
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));

    Ok(static_routes(&site_root, &config.chat.base_path)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Health check and site-root files (`/pkg/*`, `react.png`, ...) under `base`.
pub fn static_routes(site_root: &Path, base: &str) -> Router {
    let files = ServeDir::new(site_root);
    let prefix = base.to_owned();
    Router::new()
        .route(&format!("{base}/healthz"), get(healthz))
        .fallback(move |request: Request| serve_file(files.clone(), prefix.clone(), request))
}

async fn serve_file(files: ServeDir, base: String, mut request: Request) -> Response {
    let rewritten = {
        let Some(path) = strip_base(request.uri().path(), &base) else {
            return StatusCode::NOT_FOUND.into_response();
        };
        match request.uri().query() {
            Some(query) => format!("{path}?{query}"),
            None => path.to_owned(),
        }
    };
    match rewritten.parse::<Uri>() {
        Ok(uri) => *request.uri_mut() = uri,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    }

    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Path relative to the base, or `None` when `path` is outside it.
fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
