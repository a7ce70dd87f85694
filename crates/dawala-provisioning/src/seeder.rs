//! Admin account seeding.
//!
//! Seeding is an ensure-exists pass over a list of requested accounts. The
//! directory is read once, then each request is resolved against that
//! snapshot in order: known emails are skipped, unknown ones are created.
//! Accounts created earlier in the same batch count as known, so a repeated
//! email is only created once.
//!
//! The batch is best-effort. A failure on one account, including a request
//! that fails validation, is recorded in its outcome and processing moves on;
//! nothing is rolled back. A blank role is stored as `admin`.

use std::collections::HashSet;
use std::time::Instant;

use dawala_config::DefaultAdminConfig;
use dawala_identity::{AccountDirectory, NewAccount};
use dawala_models::{AccountRef, AdminAccountRequest, OperationOutcome, SeedReport};
use tracing::{info, instrument, warn};

use crate::error::ProvisioningError;

/// The built-in seed list: a single account from [`DefaultAdminConfig`].
pub fn default_admin_accounts(config: &DefaultAdminConfig) -> Vec<AdminAccountRequest> {
    vec![AdminAccountRequest::new(
        config.email.clone(),
        config.password.clone(),
        config.name.clone(),
        config.role.clone(),
    )]
}

#[instrument(skip_all, fields(requested = requests.len()))]
pub async fn seed_admin_accounts(
    directory: &dyn AccountDirectory,
    requests: &[AdminAccountRequest],
) -> SeedReport {
    let start_time = Instant::now();

    let mut known: HashSet<String> = match directory.list_accounts().await {
        Ok(accounts) => accounts.into_iter().filter_map(|a| a.email).collect(),
        Err(err) => {
            let message = ProvisioningError::from(err).to_string();
            warn!(error = %message, "Could not list existing accounts; failing every request");
            let results = requests
                .iter()
                .map(|request| OperationOutcome::failed(&request.email, &message))
                .collect();
            return SeedReport::new(requests.len(), results);
        }
    };

    let mut results = Vec::with_capacity(requests.len());

    for request in requests {
        if known.contains(&request.email) {
            info!(email = %request.email, "Admin account already exists, skipping");
            results.push(OperationOutcome::skipped(&request.email));
            continue;
        }

        if let Some(message) = request.validation_error() {
            warn!(email = %request.email, error = %message, "Invalid admin account request");
            results.push(OperationOutcome::failed(&request.email, message));
            continue;
        }

        let account = NewAccount::confirmed(
            &request.email,
            &request.password,
            request.effective_role(),
            &request.name,
        );

        match directory.create_account(account).await {
            Ok(record) => {
                info!(email = %request.email, id = %record.id, "Admin account created");
                known.insert(request.email.clone());
                results.push(OperationOutcome::created(
                    &request.email,
                    AccountRef {
                        id: record.id,
                        email: record.email.unwrap_or_else(|| request.email.clone()),
                    },
                ));
            }
            Err(err) => {
                let message = ProvisioningError::from(err).to_string();
                warn!(email = %request.email, error = %message, "Admin account creation failed");
                results.push(OperationOutcome::failed(&request.email, message));
            }
        }
    }

    let report = SeedReport::new(requests.len(), results);
    info!(
        total = report.summary.total,
        created = report.summary.created,
        skipped = report.summary.skipped,
        failed = report.summary.failed,
        elapsed_ms = %start_time.elapsed().as_millis(),
        "Admin seeding finished"
    );

    report
}
