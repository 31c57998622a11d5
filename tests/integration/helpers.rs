//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use filebox_api::state::AppState;
use filebox_auth::MemorySessionStore;
use filebox_core::config::AppConfig;
use filebox_core::types::UserId;
use filebox_database::MemoryFileStore;
use filebox_storage::MemoryBlobStore;

/// Test application context backed by in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Session store, for seeding tokens
    pub sessions: Arc<MemorySessionStore>,
    /// File record store, for direct inspection
    pub files: Arc<MemoryFileStore>,
    /// Blob store, for direct inspection
    pub blobs: Arc<MemoryBlobStore>,
}

/// A decoded response: status plus parsed JSON body (or `Value::Null`
/// for empty/non-JSON bodies).
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// A raw response for content endpoints.
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: bytes::Bytes,
}

impl TestApp {
    /// Create a new test application over fresh stores.
    pub fn new() -> Self {
        let sessions = Arc::new(MemorySessionStore::new());
        let files = Arc::new(MemoryFileStore::new());
        let blobs = Arc::new(MemoryBlobStore::new());

        let state = AppState::new(
            Arc::new(AppConfig::default()),
            sessions.clone(),
            files.clone(),
            blobs.clone(),
        );

        Self {
            router: filebox_api::build_router(state),
            sessions,
            files,
            blobs,
        }
    }

    /// Register a token for a fresh user and return the user's id.
    pub fn seed_user(&self, token: &str) -> UserId {
        let user_id = UserId::new();
        self.sessions.insert(token, user_id);
        user_id
    }

    /// Issue a request and parse the JSON response body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let raw = self.request_raw(method, path, body, token).await;
        let body = serde_json::from_slice(&raw.body).unwrap_or(Value::Null);
        TestResponse {
            status: raw.status,
            body,
        }
    }

    /// Issue a request and return the raw response bytes.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> RawResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("X-Token", token);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        RawResponse {
            status,
            content_type,
            body,
        }
    }

    /// Create a folder via the API and return its id string.
    pub async fn create_folder(&self, token: &str, name: &str, parent: Option<&str>) -> String {
        let mut body = serde_json::json!({ "name": name, "type": "folder" });
        if let Some(parent) = parent {
            body["parentId"] = Value::String(parent.to_string());
        }
        let response = self.request("POST", "/files", Some(body), Some(token)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["id"].as_str().expect("id missing").to_string()
    }

    /// Upload a file via the API and return the response body.
    pub async fn upload_file(&self, token: &str, name: &str, data: &str) -> Value {
        use base64::Engine as _;
        let body = serde_json::json!({
            "name": name,
            "type": "file",
            "data": base64::engine::general_purpose::STANDARD.encode(data),
        });
        let response = self.request("POST", "/files", Some(body), Some(token)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body
    }
}
