use utoipa::OpenApi;

use dawala_models::{
    AccountRef, AccountSummary, AdminAccountRequest, BatchSummary, DeleteAdminRequest,
    DeleteAdminResponse, ErrorResponse, HealthResponse, ListAccountsResponse, OperationOutcome,
    OutcomeAction, SeedAdminsRequest, SeedAdminsResponse, SetupResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::admin_accounts::controller::seed_default_admins,
        crate::modules::admin_accounts::controller::seed_admins,
        crate::modules::admin_accounts::controller::list_admins,
        crate::modules::admin_accounts::controller::delete_admin,
        crate::modules::setup::controller::auto_setup,
    ),
    components(
        schemas(
            AdminAccountRequest,
            SeedAdminsRequest,
            SeedAdminsResponse,
            OperationOutcome,
            OutcomeAction,
            BatchSummary,
            AccountRef,
            AccountSummary,
            ListAccountsResponse,
            DeleteAdminRequest,
            DeleteAdminResponse,
            SetupResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Admin Accounts", description = "Seed, list and delete admin accounts"),
        (name = "Setup", description = "Bootstrap of the configured admin account"),
        (name = "Health", description = "Liveness check")
    ),
    info(
        title = "Dawala Admin API",
        version = "0.1.0",
        description = "Provisioning of admin accounts in the hosted identity service.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
