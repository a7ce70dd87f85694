mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{MISSING_IDENTITY_CONFIG, send_json, send_raw, setup_test_app, unconfigured_app};
use dawala_identity::InMemoryDirectory;
use serde_json::json;

#[tokio::test]
async fn test_get_seeds_default_admin() {
    let directory = Arc::new(InMemoryDirectory::new());
    let app = setup_test_app(directory.clone());

    let (status, body) = send_json(app, "GET", "/api/seed-admin", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Default admin users seeded successfully");
    assert_eq!(body["summary"], json!({"total": 1, "created": 1, "skipped": 0, "failed": 0}));
    assert_eq!(body["results"][0]["email"], "admin@dawala.com");
    assert_eq!(body["results"][0]["action"], "created");
    assert_eq!(body["results"][0]["message"], "Admin user created successfully");

    let created = &directory.accounts()[0];
    assert_eq!(body["results"][0]["user"]["id"], created.id.to_string());
    assert_eq!(created.role(), Some("admin"));
}

#[tokio::test]
async fn test_second_seed_skips_existing_admin() {
    let directory = Arc::new(InMemoryDirectory::new());

    send_json(setup_test_app(directory.clone()), "GET", "/api/seed-admin", None).await;
    let (status, body) =
        send_json(setup_test_app(directory.clone()), "GET", "/api/seed-admin", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["skipped"], 1);
    assert_eq!(body["summary"]["created"], 0);
    assert_eq!(body["results"][0]["action"], "skipped");
    assert_eq!(body["results"][0]["message"], "User already exists");
    assert_eq!(directory.accounts().len(), 1);
}

#[tokio::test]
async fn test_post_with_custom_list() {
    let directory = Arc::new(InMemoryDirectory::new().with_account("existing@x.com", Some("admin")));
    directory.fail_create_for("broken@x.com", "Password should be at least 6 characters");
    let app = setup_test_app(directory.clone());

    let (status, body) = send_json(
        app,
        "POST",
        "/api/seed-admin",
        Some(json!({
            "adminUsers": [
                {"email": "new@x.com", "password": "password123", "name": "New Admin", "role": "admin"},
                {"email": "existing@x.com", "password": "password123", "name": "Old Admin", "role": "admin"},
                {"email": "broken@x.com", "password": "pw", "name": "Broken", "role": "admin"}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Admin users seeded successfully");
    assert_eq!(body["summary"], json!({"total": 3, "created": 1, "skipped": 1, "failed": 1}));
    assert_eq!(body["results"][1]["action"], "skipped");
    assert_eq!(body["results"][2]["success"], false);
    assert_eq!(body["results"][2]["error"], "Password should be at least 6 characters");
    assert!(directory.contains_email("new@x.com"));
}

#[tokio::test]
async fn test_post_without_list_seeds_defaults() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) = send_json(
        setup_test_app(directory.clone()),
        "POST",
        "/api/seed-admin",
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Default admin users seeded successfully");
    assert!(directory.contains_email("admin@dawala.com"));
}

#[tokio::test]
async fn test_post_with_empty_body_seeds_defaults() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) =
        send_raw(setup_test_app(directory.clone()), "POST", "/api/seed-admin", None, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Default admin users seeded successfully");
}

#[tokio::test]
async fn test_post_with_malformed_json_is_bad_request() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) = send_raw(
        setup_test_app(directory.clone()),
        "POST",
        "/api/seed-admin",
        Some("application/json"),
        "{\"adminUsers\": [",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Invalid request body"}));
    assert_eq!(directory.list_calls(), 0);
}

#[tokio::test]
async fn test_invalid_item_fails_alone() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) = send_json(
        setup_test_app(directory.clone()),
        "POST",
        "/api/seed-admin",
        Some(json!({"adminUsers": [
            {"email": "good@x.com", "password": "password123", "name": "Good"},
            {"email": "bad@x.com", "password": "", "name": "Bad"}
        ]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["summary"], json!({"total": 2, "created": 1, "skipped": 0, "failed": 1}));
    assert_eq!(body["results"][0]["action"], "created");
    assert_eq!(body["results"][1]["success"], false);
    assert_eq!(body["results"][1]["error"], "password is required");
    assert!(directory.contains_email("good@x.com"));
    assert!(!directory.contains_email("bad@x.com"));
    assert_eq!(directory.create_calls(), 1);
}

#[tokio::test]
async fn test_blank_role_is_stored_as_admin() {
    let directory = Arc::new(InMemoryDirectory::new());

    let (status, body) = send_json(
        setup_test_app(directory.clone()),
        "POST",
        "/api/seed-admin",
        Some(json!({"adminUsers": [
            {"email": "blank@x.com", "password": "password123", "name": "Blank", "role": ""}
        ]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["created"], 1);
    assert_eq!(directory.accounts()[0].role(), Some("admin"));
}

#[tokio::test]
async fn test_list_failure_fails_each_account_but_batch_succeeds() {
    let directory = Arc::new(InMemoryDirectory::new());
    directory.fail_list("Database error finding users");

    let (status, body) =
        send_json(setup_test_app(directory.clone()), "GET", "/api/seed-admin", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["summary"]["failed"], 1);
    assert_eq!(body["results"][0]["error"], "Database error finding users");
    assert_eq!(directory.create_calls(), 0);
}

#[tokio::test]
async fn test_missing_configuration_is_bad_request() {
    let (status, body) = send_json(unconfigured_app(), "GET", "/api/seed-admin", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": MISSING_IDENTITY_CONFIG}));
}
