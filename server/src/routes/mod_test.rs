use super::*;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use std::net::{IpAddr, Ipv4Addr};
use tower::ServiceExt;

fn config(content_api: bool) -> ServerConfig {
    ServerConfig { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 3000, content_api }
}

async fn get_path(router: Router, path: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================================
// health + api
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = get_path(app(&config(true)).unwrap(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_serves_collections_when_enabled() {
    let (status, body) = get_path(app(&config(true)).unwrap(), "/api/videos").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("veritasium-prime-numbers"));
}

#[tokio::test]
async fn api_unknown_record_is_not_found() {
    let (status, _) = get_path(app(&config(true)).unwrap(), "/api/proofs/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_is_unmounted_when_disabled() {
    let (status, body) = get_path(app(&config(false)).unwrap(), "/api/videos").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("veritasium-prime-numbers"));

    let (status, _) = get_path(app(&config(false)).unwrap(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// ssr pages
// =============================================================================

#[tokio::test]
async fn known_proof_renders() {
    let (status, body) = get_path(app(&config(true)).unwrap(), "/proofs/infinite-primes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Infinitude of Primes"));
}

#[tokio::test]
async fn unknown_proof_is_not_found() {
    let (status, body) = get_path(app(&config(true)).unwrap(), "/proofs/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Proof Not Found | Kazuki Girand"));
}

#[tokio::test]
async fn unknown_hyperfixation_is_not_found() {
    let (status, body) = get_path(app(&config(true)).unwrap(), "/hyperfixations/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not Found"));
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let (status, body) = get_path(app(&config(true)).unwrap(), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
}
