//! Bootstrap of the configured admin account.
//!
//! Runs an ensure-exists for the single account named by `ADMIN_EMAIL` and
//! `ADMIN_PASSWORD`. Whether setup already happened is decided by asking the
//! identity service, never by process-local state, so it is safe to call on
//! every boot and from several instances.

use dawala_config::AutoSetupConfig;
use dawala_identity::{AccountDirectory, AccountRecord, NewAccount};
use secrecy::ExposeSecret;
use tracing::{info, instrument};

use crate::error::ProvisioningError;

pub const BOOTSTRAP_CONFIG_MISSING: &str = "Missing required environment variables. Please check ADMIN_EMAIL, ADMIN_PASSWORD, and SUPABASE_SERVICE_ROLE_KEY";

pub const BOOTSTRAP_ROLE: &str = "admin";
pub const BOOTSTRAP_NAME: &str = "Admin User";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    AlreadyExists,
    Created(AccountRecord),
}

impl SetupOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SetupOutcome::AlreadyExists => "Admin user already exists",
            SetupOutcome::Created(_) => "Admin user created successfully",
        }
    }
}

#[instrument(skip_all)]
pub async fn ensure_bootstrap_admin(
    directory: &dyn AccountDirectory,
    config: &AutoSetupConfig,
) -> Result<SetupOutcome, ProvisioningError> {
    let (Some(email), Some(password)) = (config.email.as_deref(), config.password.as_ref()) else {
        return Err(ProvisioningError::MissingConfiguration(
            BOOTSTRAP_CONFIG_MISSING.to_string(),
        ));
    };

    let accounts = directory.list_accounts().await?;
    if accounts.iter().any(|account| account.has_email(email)) {
        info!(email, "Bootstrap admin already exists");
        return Ok(SetupOutcome::AlreadyExists);
    }

    let record = directory
        .create_account(NewAccount::confirmed(
            email,
            password.expose_secret(),
            BOOTSTRAP_ROLE,
            BOOTSTRAP_NAME,
        ))
        .await?;

    info!(email, id = %record.id, "Bootstrap admin created");
    Ok(SetupOutcome::Created(record))
}
