// tests/preview_routes.rs

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use openalgo_probe::preview::{self, PREVIEW_VERSION};

/// Helper to issue one in-process GET against the preview router
async fn get(uri: &str) -> (StatusCode, String) {
    let response = preview::router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn preview_pages_render_with_version() {
    for uri in ["/", "/about", "/contact"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri} should return 200");
        assert!(
            body.contains(PREVIEW_VERSION),
            "GET {uri} should render the injected version"
        );
        assert!(
            !body.contains("{{ version }}"),
            "GET {uri} left the placeholder unrendered"
        );
    }
}

#[tokio::test]
async fn landing_preview_carries_ui_markers() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);

    for marker in [
        "OpenAlgo",
        "particles-js",
        "typed-text",
        "github.com/marketcalls/openalgo",
        "discord.com",
        "docs.openalgo.in",
    ] {
        assert!(body.contains(marker), "landing page should contain {marker:?}");
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get("/admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
