//! Admin account deletion by email.
//!
//! Deletion is permanent. The account is located by exact email match over
//! the full directory, then removed by id.

use dawala_identity::AccountDirectory;
use dawala_models::AccountRef;
use tracing::{info, instrument};

use crate::error::ProvisioningError;

#[instrument(skip(directory))]
pub async fn delete_admin_account(
    directory: &dyn AccountDirectory,
    email: &str,
) -> Result<AccountRef, ProvisioningError> {
    if email.is_empty() {
        return Err(ProvisioningError::EmailRequired);
    }

    let account = directory
        .list_accounts()
        .await?
        .into_iter()
        .find(|account| account.has_email(email))
        .ok_or(ProvisioningError::NotFound)?;

    directory.delete_account(account.id).await?;

    info!(id = %account.id, "Admin account deleted");

    Ok(AccountRef {
        id: account.id,
        email: email.to_string(),
    })
}
