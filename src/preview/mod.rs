// src/preview/mod.rs
// Stub server for browsing the UI templates during development. Each
// page gets the mock version string injected, the same way the real
// frontend gets `version` in its template context. Not exercised by
// the probe runner.

use anyhow::Result;
use axum::{response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Mock version shown on every preview page.
pub const PREVIEW_VERSION: &str = "1.0.0-ui-enhanced";

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const ABOUT_TEMPLATE: &str = include_str!("../../templates/about.html");
const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact.html");

/// Substitute the version placeholder into a template.
pub fn render(template: &str, version: &str) -> String {
    template.replace("{{ version }}", version)
}

async fn index() -> Html<String> {
    Html(render(INDEX_TEMPLATE, PREVIEW_VERSION))
}

async fn about() -> Html<String> {
    Html(render(ABOUT_TEMPLATE, PREVIEW_VERSION))
}

async fn contact() -> Html<String> {
    Html(render(CONTACT_TEMPLATE, PREVIEW_VERSION))
}

/// Build the preview router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve the preview pages until interrupted.
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("🚀 Starting OpenAlgo UI Preview Server...");
    println!("📱 Access the enhanced UI at: http://{addr}");
    info!("preview server listening on http://{addr}");

    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn render_substitutes_every_placeholder() {
        let out = render("v{{ version }} ({{ version }})", "1.2.3");
        assert_eq!(out, "v1.2.3 (1.2.3)");
        assert!(!out.contains("{{ version }}"));
    }

    #[test]
    fn render_leaves_plain_templates_alone() {
        assert_eq!(render("<p>static</p>", "1.2.3"), "<p>static</p>");
    }
}
