//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use palettize::models::AppConfig;
use palettize::server::{build_router, create_app_state, AppState};
use palettize::services::{RecolorService, Storage};

use super::fixtures::MultipartBody;

/// Test application with router, scratch storage and direct service access
pub struct TestApp {
    router: axum::Router,
    pub recolor: Arc<RecolorService>,
    // Dropped last; removes the upload and processed directories
    root: TempDir,
}

impl TestApp {
    /// Create a test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let state = Self::create_state_in(root.path(), config);

        let recolor = state.recolor.clone();
        let router = build_router(state);

        Self {
            router,
            recolor,
            root,
        }
    }

    /// Create application state rooted in `dir`
    pub fn create_state_in(dir: &Path, config: AppConfig) -> AppState {
        let storage = Storage::new(dir.join("uploads"), dir.join("processed"));
        create_app_state(config, storage).expect("Failed to create app state")
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.root.path().join("uploads")
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.root.path().join("processed")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw body
    pub async fn post_bytes(&self, path: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a multipart/form-data body
    pub async fn post_multipart(&self, path: &str, form: MultipartBody) -> TestResponse {
        let (content_type, body) = form.finish();
        self.post_bytes(path, &content_type, body).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }
}
