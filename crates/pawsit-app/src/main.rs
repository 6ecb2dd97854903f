mod config;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use clap::Parser;
use pawsit_pages::layout::Chrome;
use pawsit_router::{NavigationMode, PageName, Resolution};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::routes::PageRegistry;

/// Frontend server for the Pawsit pet-sitting marketplace.
#[derive(Debug, Parser)]
#[command(name = "pawsit", version)]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "pawsit.toml")]
    config: PathBuf,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    registry: Arc<PageRegistry>,
    chrome: Chrome,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("failed to load config: {e:#}, using defaults");
            Config::default()
        }
    };
    let port = args.port.unwrap_or(config.server.port);

    let mode = if config.routing.history_navigation {
        NavigationMode::History
    } else {
        NavigationMode::Reload
    };
    let registry = routes::registry(mode).context("building route table")?;

    info!("registered {} routes", registry.len());
    for route in registry.routes() {
        info!("  {} -> {}", route.path(), route.name());
    }

    let chrome = nav_chrome(&registry);
    let state = AppState {
        registry: Arc::new(registry),
        chrome,
    };

    // Mounting attaches the registry to the host: from here on, every
    // navigation the browser makes lands in `dispatch`.
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/*path", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("{} running at http://{addr}", config.project.name);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Builds the navigation bar from the registry, so hrefs can never drift
/// from the route table.
fn nav_chrome(registry: &PageRegistry) -> Chrome {
    let links = [
        ("Home", PageName::HomePage),
        ("Find a caretaker", PageName::FindCaretaker),
        ("My pets", PageName::PetInfo),
        ("Bookings", PageName::AllBookingInfo),
        ("Sign in", PageName::SignIn),
    ];

    let mut chrome = Chrome::new().boost(registry.navigation() == NavigationMode::History);
    for (label, name) in links {
        if let Some(href) = registry.path_of(name) {
            chrome = chrome.nav_link(label, href);
        }
    }
    chrome
}

async fn root_handler(State(state): State<AppState>) -> Response {
    // The table has no "/" entry; send visitors to the landing page.
    match state.registry.path_of(PageName::HomePage) {
        Some(home) => Redirect::temporary(home).into_response(),
        None => dispatch(&state, "/"),
    }
}

async fn page_handler(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let raw = format!("/{path}");
    let decoded = match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.clone(),
    };
    dispatch(&state, &decoded)
}

/// Resolves a browser location and renders the matching view.
fn dispatch(state: &AppState, path: &str) -> Response {
    match state.registry.resolve(path) {
        Resolution::Page(route) => {
            let view = route.view();
            info!("{} -> {}", path, route.name());
            let document = state.chrome.render(view.title(), view.render());
            Html(document.into_string()).into_response()
        }
        Resolution::NotFound(Some(fallback)) => {
            info!("{} -> not found", path);
            let document = state.chrome.render(fallback.title(), fallback.render());
            (StatusCode::NOT_FOUND, Html(document.into_string())).into_response()
        }
        Resolution::NotFound(None) => not_found_response(path),
    }
}

/// Bare 404 used only if the table was built without a fallback page.
fn not_found_response(path: &str) -> Response {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Page Not Found</title></head>
<body>
  <h1>404 Page Not Found</h1>
  <p>No page is registered at '{path}'.</p>
</body>
</html>"#
    );
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}
