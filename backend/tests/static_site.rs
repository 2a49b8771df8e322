use std::fs;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use nirmaan_server::{app, ServerConfig, ServerError};

const INDEX: &str = "<!DOCTYPE html><html><body>nirmaan</body></html>";

fn site() -> (TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::create_dir(dir.path().join("icons")).unwrap();
    fs::write(dir.path().join("icons").join("React.svg"), "<svg/>").unwrap();
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        dist_dir: dir.path().to_path_buf(),
    };
    (dir, config)
}

async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
    let response = app(config)
        .unwrap()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn health_check_says_ok() {
    let (_dir, config) = site();
    assert_eq!(get(&config, "/api/health").await, (StatusCode::OK, "OK".to_string()));
}

#[tokio::test]
async fn serves_static_files() {
    let (_dir, config) = site();
    let (status, body) = get(&config, "/icons/React.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<svg/>");
}

#[tokio::test]
async fn client_routes_get_the_index() {
    let (_dir, config) = site();
    for path in ["/", "/portfolio", "/contact", "/no-such-page"] {
        let (status, body) = get(&config, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, INDEX, "{path}");
    }
}

#[test]
fn refuses_to_start_without_a_build() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        dist_dir: dir.path().to_path_buf(),
    };
    assert!(matches!(app(&config), Err(ServerError::MissingIndex(_))));
}
