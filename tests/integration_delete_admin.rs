mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{MISSING_IDENTITY_CONFIG, send_json, setup_test_app, unconfigured_app};
use dawala_identity::InMemoryDirectory;
use serde_json::json;

#[tokio::test]
async fn test_list_returns_every_account() {
    let directory = Arc::new(
        InMemoryDirectory::new()
            .with_account("admin@x.com", Some("admin"))
            .with_account("plain@x.com", None),
    );

    let (status, body) =
        send_json(setup_test_app(directory), "GET", "/api/delete-admin", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "admin@x.com");
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[1]["role"], "user");
    assert!(users[1]["last_sign_in_at"].is_null());
}

#[tokio::test]
async fn test_list_failure_is_bad_request() {
    let directory = Arc::new(InMemoryDirectory::new());
    directory.fail_list("Invalid API key");

    let (status, body) =
        send_json(setup_test_app(directory), "GET", "/api/delete-admin", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Invalid API key"}));
}

#[tokio::test]
async fn test_delete_existing_admin() {
    let directory = Arc::new(InMemoryDirectory::new());
    let record = directory.insert("gone@x.com", Some("admin"));

    let (status, body) = send_json(
        setup_test_app(directory.clone()),
        "POST",
        "/api/delete-admin",
        Some(json!({"email": "gone@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Admin user deleted successfully");
    assert_eq!(
        body["deletedUser"],
        json!({"id": record.id.to_string(), "email": "gone@x.com"})
    );
    assert!(!directory.contains_email("gone@x.com"));
}

#[tokio::test]
async fn test_delete_unknown_email_is_not_found() {
    let directory = Arc::new(InMemoryDirectory::new().with_account("other@x.com", None));

    let (status, body) = send_json(
        setup_test_app(directory.clone()),
        "POST",
        "/api/delete-admin",
        Some(json!({"email": "missing@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Admin user not found"}));
    assert_eq!(directory.delete_calls(), 0);
}

#[tokio::test]
async fn test_delete_requires_email() {
    let directory = Arc::new(InMemoryDirectory::new());

    for payload in [json!({}), json!({"email": ""})] {
        let (status, body) = send_json(
            setup_test_app(directory.clone()),
            "POST",
            "/api/delete-admin",
            Some(payload),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "Email is required"}));
    }

    assert_eq!(directory.list_calls(), 0);
}

#[tokio::test]
async fn test_delete_failure_surfaces_service_message() {
    let directory = Arc::new(InMemoryDirectory::new().with_account("stuck@x.com", None));
    directory.fail_delete("User has active sessions");

    let (status, body) = send_json(
        setup_test_app(directory.clone()),
        "POST",
        "/api/delete-admin",
        Some(json!({"email": "stuck@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User has active sessions");
    assert!(directory.contains_email("stuck@x.com"));
}

#[tokio::test]
async fn test_delete_without_configuration() {
    let (status, body) = send_json(
        unconfigured_app(),
        "POST",
        "/api/delete-admin",
        Some(json!({"email": "a@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], MISSING_IDENTITY_CONFIG);
}
