pub mod admin_accounts;
pub mod setup;
