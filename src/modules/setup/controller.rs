use anyhow::anyhow;
use axum::{Json, extract::State};
use dawala_core::AppError;
use dawala_models::{AccountRef, ErrorResponse, SetupResponse};
use dawala_provisioning::{
    BOOTSTRAP_CONFIG_MISSING, ProvisioningError, SetupOutcome, ensure_bootstrap_admin,
};
use tracing::instrument;

use crate::metrics::track_bootstrap;
use crate::state::{AppState, DirectoryHandle};

pub const SETUP_FAILED: &str = "Failed to setup admin user";

/// Runs the admin bootstrap against the configured directory.
pub async fn run_bootstrap(state: &AppState) -> Result<SetupOutcome, AppError> {
    let directory = match &state.directory {
        DirectoryHandle::Ready(directory) => directory.as_ref(),
        DirectoryHandle::Unavailable(_) => {
            return Err(AppError::bad_request(anyhow!(BOOTSTRAP_CONFIG_MISSING)));
        }
    };

    let outcome = ensure_bootstrap_admin(directory, &state.auto_setup)
        .await
        .map_err(bootstrap_error);

    track_bootstrap(match &outcome {
        Ok(SetupOutcome::AlreadyExists) => "exists",
        Ok(SetupOutcome::Created(_)) => "created",
        Err(_) => "failed",
    });

    outcome
}

/// Configuration problems are 400s. Service messages pass through as 500s,
/// and anything else becomes a generic 500.
fn bootstrap_error(err: ProvisioningError) -> AppError {
    match err {
        ProvisioningError::MissingConfiguration(_) => AppError::bad_request(err),
        ProvisioningError::Upstream(_) => AppError::internal(err),
        _ => AppError::internal(anyhow!(SETUP_FAILED)),
    }
}

pub(crate) fn setup_response(outcome: SetupOutcome, fallback_email: &str) -> SetupResponse {
    let message = outcome.message().to_string();
    let user = match outcome {
        SetupOutcome::AlreadyExists => None,
        SetupOutcome::Created(record) => Some(AccountRef {
            id: record.id,
            email: record.email.unwrap_or_else(|| fallback_email.to_string()),
        }),
    };

    SetupResponse {
        success: true,
        message,
        user,
    }
}

/// Ensure the configured admin account exists
#[utoipa::path(
    post,
    path = "/api/auto-setup",
    responses(
        (status = 200, description = "Admin exists or was created", body = SetupResponse),
        (status = 400, description = "Missing configuration", body = ErrorResponse),
        (status = 500, description = "Identity service failure", body = ErrorResponse)
    ),
    tag = "Setup"
)]
#[instrument(skip(state))]
pub async fn auto_setup(State(state): State<AppState>) -> Result<Json<SetupResponse>, AppError> {
    let outcome = run_bootstrap(&state).await?;
    let fallback_email = state.auto_setup.email.as_deref().unwrap_or_default();
    Ok(Json(setup_response(outcome, fallback_email)))
}
