#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use unisoc_api::auth::jwt::{generate_access_token, JwtConfig};
use unisoc_api::auth::password::hash_password;
use unisoc_api::config::{MediaBackend, ServerConfig};
use unisoc_api::router::build_app_router;
use unisoc_api::state::AppState;
use unisoc_db::models::user::{CreateUser, User};
use unisoc_db::repositories::UserRepo;
use unisoc_media::{BlobError, BlobStore, MemoryBlobStore, StoredBlob, Upload};

/// Smallest byte prefix the upload sniffer accepts as PNG.
pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// Password given to every seeded user.
pub const PASSWORD: &str = "correct-horse-battery";

const BOUNDARY: &str = "unisoc-test-boundary";

/// Test `ServerConfig`: in-memory image host, 1 MiB upload cap, fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
        media: MediaBackend::Memory,
        admin: None,
    }
}

/// Build the production router over `pool`, returning the blob store so
/// tests can assert on uploads.
pub fn build_test_app(pool: PgPool) -> (Router, Arc<MemoryBlobStore>) {
    let blobs = Arc::new(MemoryBlobStore::new("test"));
    (build_test_app_with(pool, blobs.clone()), blobs)
}

/// Build the production router over `pool` with a caller-supplied blob store.
pub fn build_test_app_with(pool: PgPool, blobs: Arc<dyn BlobStore>) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        blobs,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Blob store that fails on demand
// ---------------------------------------------------------------------------

/// Message carried by every error [`FailingBlobStore`] returns.
pub const HOST_DOWN: &str = "image host unavailable";

/// In-memory blob store whose `store` and `delete` can be switched to fail.
#[derive(Default)]
pub struct FailingBlobStore {
    pub inner: MemoryBlobStore,
    fail_store: AtomicBool,
    fail_delete: AtomicBool,
}

impl FailingBlobStore {
    pub fn fail_store(&self, on: bool) {
        self.fail_store.store(on, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, on: bool) {
        self.fail_delete.store(on, Ordering::SeqCst);
    }

    fn host_down() -> BlobError {
        BlobError::Api {
            status: 503,
            body: HOST_DOWN.to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn store(&self, upload: Upload) -> Result<StoredBlob, BlobError> {
        if self.fail_store.load(Ordering::SeqCst) {
            return Err(Self::host_down());
        }
        self.inner.store(upload).await
    }

    async fn delete(&self, public_id: &str) -> Result<(), BlobError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::host_down());
        }
        self.inner.delete(public_id).await
    }
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

pub fn new_user(email: &str, role: &str, status: &str) -> CreateUser {
    CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        phone: None,
        faculty: Some("Science".to_string()),
        batch: Some("2023".to_string()),
        student_id: None,
        facebook_url: None,
        linkedin_url: None,
        role: role.to_string(),
        status: status.to_string(),
    }
}

pub async fn seed_user(pool: &PgPool, email: &str, role: &str, status: &str) -> User {
    UserRepo::create(pool, &new_user(email, role, status))
        .await
        .expect("user creation should succeed")
}

pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

pub async fn admin_token(pool: &PgPool) -> String {
    let admin = seed_user(pool, "admin@example.edu", "admin", "approved").await;
    token_for(&admin)
}

pub async fn member_token(pool: &PgPool) -> String {
    let member = seed_user(pool, "member@example.edu", "member", "approved").await;
    token_for(&member)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should not fail")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(t) => builder.header(AUTHORIZATION, format!("Bearer {t}")),
        None => builder,
    }
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(
        app,
        builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    let request = builder(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, None, body).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    json_request(app, Method::POST, uri, Some(token), body).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    json_request(app, Method::PUT, uri, Some(token), body).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(
        app,
        builder(Method::POST, uri, Some(token)).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(
        app,
        builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap(),
    )
    .await
}

/// Send a `multipart/form-data` body with text `fields` and an optional
/// `image` file part.
pub async fn multipart(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    fields: &[(&str, &str)],
    image: Option<&[u8]>,
) -> Response {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"photo.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = builder(method, uri, token)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
