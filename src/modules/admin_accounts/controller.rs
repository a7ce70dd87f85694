use anyhow::anyhow;
use axum::{Json, body::Bytes, extract::State};
use dawala_core::AppError;
use dawala_models::{
    AdminAccountRequest, DeleteAdminRequest, DeleteAdminResponse, ErrorResponse,
    ListAccountsResponse, SeedAdminsRequest, SeedAdminsResponse,
};
use dawala_provisioning::{
    ProvisioningError, default_admin_accounts, delete_admin_account, list_accounts,
    seed_admin_accounts,
};
use tracing::instrument;

use crate::metrics::{track_admin_deleted, track_seed_summary};
use crate::state::AppState;
use crate::validator::ValidatedJson;

pub const DEFAULT_SEED_MESSAGE: &str = "Default admin users seeded successfully";
pub const CUSTOM_SEED_MESSAGE: &str = "Admin users seeded successfully";

/// Maps a workflow error onto the status the admin frontend expects.
pub(crate) fn provisioning_error(err: ProvisioningError) -> AppError {
    match err {
        ProvisioningError::Unexpected => AppError::internal(err),
        _ => AppError::bad_request(err),
    }
}

/// An empty body means "seed the defaults".
fn parse_seed_body(body: &Bytes) -> Result<SeedAdminsRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SeedAdminsRequest::default());
    }

    serde_json::from_slice(body).map_err(|_| AppError::bad_request(anyhow!("Invalid request body")))
}

async fn seed(
    state: &AppState,
    requests: Vec<AdminAccountRequest>,
    message: &str,
) -> Result<Json<SeedAdminsResponse>, AppError> {
    let directory = state.directory()?;
    let report = seed_admin_accounts(directory, &requests).await;
    track_seed_summary(&report.summary);
    Ok(Json(SeedAdminsResponse::from_report(report, message)))
}

/// Seed the default admin accounts
#[utoipa::path(
    get,
    path = "/api/seed-admin",
    responses(
        (status = 200, description = "Batch processed; see per-account results", body = SeedAdminsResponse),
        (status = 400, description = "Identity service not configured", body = ErrorResponse)
    ),
    tag = "Admin Accounts"
)]
#[instrument(skip(state))]
pub async fn seed_default_admins(
    State(state): State<AppState>,
) -> Result<Json<SeedAdminsResponse>, AppError> {
    let requests = default_admin_accounts(&state.admin_defaults);
    seed(&state, requests, DEFAULT_SEED_MESSAGE).await
}

/// Seed a custom list of admin accounts, or the defaults when none is given
#[utoipa::path(
    post,
    path = "/api/seed-admin",
    request_body(content = SeedAdminsRequest, description = "Optional list under `adminUsers`"),
    responses(
        (status = 200, description = "Batch processed; see per-account results", body = SeedAdminsResponse),
        (status = 400, description = "Malformed body or identity service not configured", body = ErrorResponse)
    ),
    tag = "Admin Accounts"
)]
#[instrument(skip(state, body))]
pub async fn seed_admins(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SeedAdminsResponse>, AppError> {
    match parse_seed_body(&body)?.admin_users {
        Some(requests) => seed(&state, requests, CUSTOM_SEED_MESSAGE).await,
        None => {
            let requests = default_admin_accounts(&state.admin_defaults);
            seed(&state, requests, DEFAULT_SEED_MESSAGE).await
        }
    }
}

/// List every account in the identity service
#[utoipa::path(
    get,
    path = "/api/delete-admin",
    responses(
        (status = 200, description = "All accounts", body = ListAccountsResponse),
        (status = 400, description = "Identity service error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin Accounts"
)]
#[instrument(skip(state))]
pub async fn list_admins(
    State(state): State<AppState>,
) -> Result<Json<ListAccountsResponse>, AppError> {
    let users = list_accounts(state.directory()?)
        .await
        .map_err(provisioning_error)?;

    Ok(Json(ListAccountsResponse {
        success: true,
        users,
    }))
}

/// Delete an admin account by email
#[utoipa::path(
    post,
    path = "/api/delete-admin",
    request_body = DeleteAdminRequest,
    responses(
        (status = 200, description = "Account deleted", body = DeleteAdminResponse),
        (status = 400, description = "Email missing, account not found, or identity service error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin Accounts"
)]
#[instrument(skip(state))]
pub async fn delete_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<DeleteAdminRequest>,
) -> Result<Json<DeleteAdminResponse>, AppError> {
    let deleted = delete_admin_account(state.directory()?, &dto.email)
        .await
        .map_err(provisioning_error)?;

    track_admin_deleted();

    Ok(Json(DeleteAdminResponse {
        success: true,
        message: "Admin user deleted successfully".to_string(),
        deleted_user: deleted,
    }))
}
