//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and verify behavior that can only
//! be tested with actual network connections.

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use palettize::models::AppConfig;
use palettize::server::{build_router, create_app_state};
use palettize::services::Storage;

/// Start a test server on an available port and return the port number.
///
/// The returned directory holds the server's storage and must outlive it.
async fn start_test_server() -> (u16, TempDir) {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let storage = Storage::new(root.path().join("uploads"), root.path().join("processed"));
    let state = create_app_state(AppConfig::default(), storage).expect("Failed to create app state");
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    (port, root)
}

/// Send one request on a fresh connection and read until the server closes it.
async fn roundtrip(port: u16, request: &[u8]) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");

    stream
        .write_all(request)
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timeout waiting for response")
    .expect("Failed to read response");

    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_startup_creates_storage_dirs() {
    let (_port, root) = start_test_server().await;

    assert!(root.path().join("uploads").is_dir());
    assert!(root.path().join("processed").is_dir());
}

#[tokio::test]
async fn test_health_over_tcp() {
    let (port, _root) = start_test_server().await;

    let response = roundtrip(
        port,
        b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(
        response.starts_with("HTTP/1.1 200"),
        "Should get 200 OK response: {response}"
    );
    assert!(response.ends_with("OK"));
}

#[tokio::test]
async fn test_palettes_over_tcp() {
    let (port, _root) = start_test_server().await;

    let response = roundtrip(
        port,
        b"GET /api/palettes HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.to_lowercase().contains("content-type: application/json"));
    assert!(response.contains("\"default\":\"Orange\""));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (port, _root) = start_test_server().await;

    let response = roundtrip(
        port,
        b"GET /api/nothing-here HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
}
