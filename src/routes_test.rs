use axum::body::Body;

use super::*;

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap().status()
}

#[test]
fn strip_base_without_base_keeps_path() {
    assert_eq!(strip_base("/react.png", ""), Some("/react.png"));
}

#[test]
fn strip_base_removes_prefix() {
    assert_eq!(strip_base("/chat/pkg/chatroom.js", "/chat"), Some("/pkg/chatroom.js"));
    assert_eq!(strip_base("/chat", "/chat"), Some("/"));
}

#[test]
fn strip_base_rejects_lookalike_prefix() {
    assert_eq!(strip_base("/chatter/react.png", "/chat"), None);
    assert_eq!(strip_base("/react.png", "/chat"), None);
}

#[tokio::test]
async fn healthz_is_served_under_base() {
    assert_eq!(status_of(static_routes(&public_dir(), "/chat"), "/chat/healthz").await, StatusCode::OK);
    assert_eq!(status_of(static_routes(&public_dir(), ""), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn assets_resolve_relative_to_base() {
    let router = static_routes(&public_dir(), "/chat");
    assert_eq!(status_of(router, "/chat/react.png").await, StatusCode::OK);
}

#[tokio::test]
async fn assets_outside_base_are_not_found() {
    let router = static_routes(&public_dir(), "/chat");
    assert_eq!(status_of(router, "/react.png").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let router = static_routes(&public_dir(), "");
    assert_eq!(status_of(router, "/nope.png").await, StatusCode::NOT_FOUND);
}
