use crate::auth::{Claims, Role};
use crate::config::Settings;
use crate::create_app;
use crate::models::Task;
use crate::state::AppState;
use crate::store::{
    memory::InMemoryTaskStore, NewTask, StoreError, TaskChanges, TaskFilter, TaskStore,
};
use axum::body::Body;
use axum::Router;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::LevelFilter;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Signing secret matching `Settings::for_test()`
const TEST_SECRET: &[u8] = b"test-signing-secret";

/// Mints a credential for the given subject, valid for an hour
pub fn token_for(subject_id: i64, role: Role) -> String {
    let now = chrono::Utc::now().timestamp();
    sign(&Claims {
        sub: subject_id,
        role,
        iat: now,
        exp: now + 3600,
    })
}

/// Mints a credential that expired an hour ago
pub fn expired_token_for(subject_id: i64, role: Role) -> String {
    let now = chrono::Utc::now().timestamp();
    sign(&Claims {
        sub: subject_id,
        role,
        iat: now - 7200,
        exp: now - 3600,
    })
}

/// Mints a credential signed with a key the server does not hold
pub fn foreign_key_token_for(subject_id: i64, role: Role) -> String {
    let now = chrono::Utc::now().timestamp();
    encode(
        &Header::default(),
        &Claims {
            sub: subject_id,
            role,
            iat: now,
            exp: now + 3600,
        },
        &EncodingKey::from_secret(b"not-the-server-secret"),
    )
    .expect("Failed to sign test token")
}

fn sign(claims: &Claims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign test token")
}

/// Store wrapper that counts calls, for asserting that rejected requests
/// never reach the collaborator.
pub struct RecordingStore {
    inner: InMemoryTaskStore,
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryTaskStore::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Total number of store calls observed, across all operations
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl TaskStore for RecordingStore {
    async fn create(&self, task: NewTask) -> Result<Task, StoreError> {
        self.record();
        self.inner.create(task).await
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        self.record();
        self.inner.get(id).await
    }

    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, StoreError> {
        self.record();
        self.inner.list(filter).await
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> Result<Option<Task>, StoreError> {
        self.record();
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.record();
        self.inner.delete(id).await
    }
}

/// Test fixture wiring the full application router to a fresh in-memory
/// store, with request helpers that exercise endpoints end to end.
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Recording store behind the app, for call assertions
    pub store: Arc<RecordingStore>,
}

impl TestFixture {
    pub fn new() -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let store = Arc::new(RecordingStore::new());
        let state = AppState::with_store(Settings::for_test(), store.clone());
        let app = create_app(state);

        Self { app, store }
    }

    /// Sends a GET request, optionally with a bearer credential
    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    /// Sends a DELETE request, optionally with a bearer credential
    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, token, None).await
    }

    /// Sends a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, uri: &str, token: Option<&str>, body: &T) -> TestResponse {
        let json_body = serde_json::to_vec(body).expect("Failed to serialize body to JSON");
        self.send(Method::POST, uri, token, Some(json_body)).await
    }

    /// Sends a PUT request with a JSON body
    pub async fn put<T: Serialize>(&self, uri: &str, token: Option<&str>, body: &T) -> TestResponse {
        let json_body = serde_json::to_vec(body).expect("Failed to serialize body to JSON");
        self.send(Method::PUT, uri, token, Some(json_body)).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        let request = builder
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        // Empty bodies (204) parse to an empty object for convenience
        let json = if bytes.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| serde_json::json!({}))
        };

        TestResponse { status, json }
    }
}

/// Response from a test request with convenient access to status and body
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON (empty object if absent or unparseable)
    pub json: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_foreign_key_token_rejected_without_store_call() {
        let fixture = TestFixture::new();
        let token = foreign_key_token_for(1, Role::User);

        let resp = fixture.get("/tasks", Some(&token)).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        assert_eq!(fixture.store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_expired_token_rejected_without_store_call() {
        let fixture = TestFixture::new();
        let token = expired_token_for(1, Role::User);

        let resp = fixture
            .post("/tasks", Some(&token), &serde_json::json!({ "title": "x" }))
            .await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        assert_eq!(fixture.store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rejection_reason_not_leaked() {
        let fixture = TestFixture::new();

        // Malformed, expired, and tampered credentials all produce the
        // same external outcome and the same body
        let malformed = fixture.get("/tasks", Some("garbage")).await;
        let expired = fixture
            .get("/tasks", Some(&expired_token_for(1, Role::User)))
            .await;
        let tampered = fixture
            .get("/tasks", Some(&foreign_key_token_for(1, Role::User)))
            .await;

        for resp in [&malformed, &expired, &tampered] {
            assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        }
        assert_eq!(malformed.json, expired.json);
        assert_eq!(expired.json, tampered.json);
    }
}
