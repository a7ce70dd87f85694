use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use dawala::router::init_router;
use dawala::state::{AppState, DirectoryHandle};
use dawala_identity::InMemoryDirectory;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const MISSING_IDENTITY_CONFIG: &str =
    "Missing identity service configuration. Please check SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY";

/// Router backed by `directory`, with default configuration.
pub fn setup_test_app(directory: Arc<InMemoryDirectory>) -> Router {
    init_router(AppState::with_directory(directory))
}

/// Router whose identity service is not configured.
#[allow(dead_code)]
pub fn unconfigured_app() -> Router {
    let mut state = AppState::with_directory(Arc::new(InMemoryDirectory::new()));
    state.directory = DirectoryHandle::Unavailable(MISSING_IDENTITY_CONFIG.to_string());
    init_router(state)
}

#[allow(dead_code)]
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&body).unwrap())
        }
        None => Body::empty(),
    };

    read_response(app, builder.body(body).unwrap()).await
}

#[allow(dead_code)]
pub async fn send_raw(
    app: Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    read_response(app, builder.body(Body::from(body)).unwrap()).await
}

async fn read_response(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}
