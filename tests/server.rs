//! Static page server tests.
//!
//! Run with:
//! ```bash
//! cargo test --features server --test server
//! ```

#![cfg(feature = "server")]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use slayer_lookup::server::router;

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), "<h1>Kimetsu</h1>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('ok');").unwrap();
    std::fs::create_dir(dir.path().join("imgs")).unwrap();
    std::fs::write(dir.path().join("imgs/placeholder.jpg"), [0xff, 0xd8, 0xff]).unwrap();
    dir
}

async fn get(dir: &tempfile::TempDir, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router(dir.path())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn serves_index_at_root() {
    let dir = site();
    let (status, body) = get(&dir, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Kimetsu</h1>");
}

#[tokio::test]
async fn serves_nested_assets() {
    let dir = site();
    let (status, body) = get(&dir, "/imgs/placeholder.jpg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, vec![0xff, 0xd8, 0xff]);

    let (status, _) = get(&dir, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let dir = site();
    let (status, _) = get(&dir, "/api/characters/Tanjiro").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
