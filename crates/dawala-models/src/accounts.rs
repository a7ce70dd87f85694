//! Account listing, deletion and bootstrap DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Minimal reference to an identity-service account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountRef {
    pub id: Uuid,
    pub email: String,
}

/// One row of the account listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountSummary {
    pub id: Uuid,
    pub email: Option<String>,
    /// `user_metadata.role`, or `"user"` when the account has none.
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListAccountsResponse {
    pub success: bool,
    pub users: Vec<AccountSummary>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteAdminRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAdminResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "deletedUser")]
    pub deleted_user: AccountRef,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SetupResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountRef>,
}

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delete_request_missing_email_fails_validation() {
        let request: DeleteAdminRequest = serde_json::from_value(json!({})).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_delete_response_uses_deleted_user_key() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(DeleteAdminResponse {
            success: true,
            message: "Admin user deleted successfully".to_string(),
            deleted_user: AccountRef {
                id,
                email: "a@x.com".to_string(),
            },
        })
        .unwrap();
        assert_eq!(value["deletedUser"]["id"], id.to_string());
        assert_eq!(value["deletedUser"]["email"], "a@x.com");
    }

    #[test]
    fn test_setup_response_omits_missing_user() {
        let value = serde_json::to_value(SetupResponse {
            success: true,
            message: "Admin user already exists".to_string(),
            user: None,
        })
        .unwrap();
        assert!(value.get("user").is_none());
    }
}
