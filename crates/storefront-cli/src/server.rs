use anyhow::{bail, Context, Result};
use axum::{
    extract::{OriginalUri, State},
    handler::Handler,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storefront_router::{Router, ServerConfig};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

const NOT_FOUND_PAGE: &str = "<!doctype html><title>Not Found</title><h1>404 Not Found</h1>";

/// Shared by all handlers; the route table is immutable so no locking is needed
#[derive(Clone)]
struct AppState {
    router: Arc<Router>,
    index_path: Arc<PathBuf>,
}

/// Start the bundle server
pub async fn start_server(router: Router, config: &ServerConfig) -> Result<()> {
    let dist_dir = PathBuf::from(&config.dist_dir);
    if !dist_dir.join("index.html").exists() {
        bail!("index.html not found in {}", dist_dir.display());
    }

    println!();
    println!("  {} Bundle: {}", "📂".cyan(), dist_dir.display());
    println!(
        "  {} Routes: {} under {}",
        "→".green(),
        router.routes().len(),
        router.base_path()
    );

    let app = build_app(router, &dist_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    println!();
    println!("{}", "✅ Server ready!".green().bold());
    println!("  {} {}", "URL:".cyan(), format!("http://{}", addr).bold());
    println!("  {} Press Ctrl+C to stop", "ℹ".cyan());
    println!();

    info!(%addr, "serving storefront bundle");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Files in the bundle are served as-is under the router's base path; every
/// other URL gets the app shell when the route table knows it, and a 404
/// otherwise.
pub fn build_app(router: Router, dist_dir: &Path) -> axum::Router {
    let base_path = router.base_path().to_string();
    let state = AppState {
        router: Arc::new(router),
        index_path: Arc::new(dist_dir.join("index.html")),
    };

    let bundle = ServeDir::new(dist_dir).fallback(app_shell.with_state(state.clone()));

    // axum does not nest at the root
    let app = if base_path == "/" {
        axum::Router::new().fallback_service(bundle)
    } else {
        axum::Router::new()
            .nest_service(&base_path, bundle)
            .fallback(app_shell)
            .with_state(state)
    };

    app.layer(TraceLayer::new_for_http())
}

/// Nested services see a path without the base prefix, so match on the
/// original URI
async fn app_shell(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let location = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let Some(route_match) = state.router.match_route(location) else {
        debug!(location, "no route, answering 404");
        return (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response();
    };
    debug!(location, view = %route_match.route.view, "serving app shell");

    match tokio::fs::read_to_string(state.index_path.as_path()).await {
        Ok(index) => Html(index).into_response(),
        Err(e) => {
            error!(path = %state.index_path.display(), error = %e, "failed to read index.html");
            (StatusCode::INTERNAL_SERVER_ERROR, "index.html unavailable").into_response()
        }
    }
}
