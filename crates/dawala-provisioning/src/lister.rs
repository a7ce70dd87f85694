//! Account listing.

use dawala_identity::{AccountDirectory, AccountRecord};
use dawala_models::AccountSummary;

use crate::error::ProvisioningError;

/// Role reported for accounts without `user_metadata.role`.
pub const FALLBACK_ROLE: &str = "user";

pub async fn list_accounts(
    directory: &dyn AccountDirectory,
) -> Result<Vec<AccountSummary>, ProvisioningError> {
    let accounts = directory.list_accounts().await?;
    Ok(accounts.into_iter().map(summarize).collect())
}

fn summarize(record: AccountRecord) -> AccountSummary {
    AccountSummary {
        role: record.role().unwrap_or(FALLBACK_ROLE).to_string(),
        id: record.id,
        email: record.email,
        created_at: record.created_at,
        last_sign_in_at: record.last_sign_in_at,
    }
}
