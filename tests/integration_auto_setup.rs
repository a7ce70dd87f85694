mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use dawala::router::init_router;
use dawala::state::{AppState, DirectoryHandle};
use dawala_config::AutoSetupConfig;
use dawala_identity::InMemoryDirectory;
use secrecy::SecretString;
use serde_json::json;

use common::{MISSING_IDENTITY_CONFIG, send_json};

const BOOTSTRAP_CONFIG_MISSING: &str = "Missing required environment variables. Please check ADMIN_EMAIL, ADMIN_PASSWORD, and SUPABASE_SERVICE_ROLE_KEY";

fn bootstrap_config() -> AutoSetupConfig {
    AutoSetupConfig {
        email: Some("root@dawala.com".to_string()),
        password: Some(SecretString::from("root-password".to_string())),
        run_on_start: false,
    }
}

fn app_with(directory: Arc<InMemoryDirectory>, auto_setup: AutoSetupConfig) -> axum::Router {
    let mut state = AppState::with_directory(directory);
    state.auto_setup = auto_setup;
    init_router(state)
}

#[tokio::test]
async fn test_creates_admin_when_absent() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) = send_json(
        app_with(directory.clone(), bootstrap_config()),
        "POST",
        "/api/auto-setup",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Admin user created successfully");
    assert_eq!(body["user"]["email"], "root@dawala.com");

    let created = &directory.accounts()[0];
    assert_eq!(created.role(), Some("admin"));
    assert_eq!(created.user_metadata.name.as_deref(), Some("Admin User"));
}

#[tokio::test]
async fn test_repeated_setup_reports_existing_admin() {
    let directory = Arc::new(InMemoryDirectory::new());

    send_json(app_with(directory.clone(), bootstrap_config()), "POST", "/api/auto-setup", None)
        .await;
    let (status, body) = send_json(
        app_with(directory.clone(), bootstrap_config()),
        "POST",
        "/api/auto-setup",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Admin user already exists"}));
    assert_eq!(directory.create_calls(), 1);
}

#[tokio::test]
async fn test_missing_admin_credentials_is_bad_request() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) = send_json(
        app_with(directory.clone(), AutoSetupConfig::default()),
        "POST",
        "/api/auto-setup",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": BOOTSTRAP_CONFIG_MISSING}));
    assert_eq!(directory.list_calls(), 0);
}

#[tokio::test]
async fn test_missing_identity_configuration_is_bad_request() {
    let mut state = AppState::with_directory(Arc::new(InMemoryDirectory::new()));
    state.directory = DirectoryHandle::Unavailable(MISSING_IDENTITY_CONFIG.to_string());
    state.auto_setup = bootstrap_config();

    let (status, body) = send_json(init_router(state), "POST", "/api/auto-setup", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], BOOTSTRAP_CONFIG_MISSING);
}

#[tokio::test]
async fn test_service_failure_is_server_error() {
    let directory = Arc::new(InMemoryDirectory::new());
    directory.fail_list("Database error finding users");

    let (status, body) = send_json(
        app_with(directory, bootstrap_config()),
        "POST",
        "/api/auto-setup",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "error": "Database error finding users"}));
}

#[tokio::test]
async fn test_unexpected_failure_uses_setup_message() {
    let directory = Arc::new(InMemoryDirectory::new());
    directory.fail_create_unexpected("root@dawala.com");

    let (status, body) = send_json(
        app_with(directory.clone(), bootstrap_config()),
        "POST",
        "/api/auto-setup",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "error": "Failed to setup admin user"}));
    assert!(directory.accounts().is_empty());
}

#[tokio::test]
async fn test_health() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) = send_json(
        app_with(directory, AutoSetupConfig::default()),
        "GET",
        "/health",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
