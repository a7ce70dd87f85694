//! # Dawala Provisioning
//!
//! The admin account workflow, layered on an
//! [`AccountDirectory`](dawala_identity::AccountDirectory):
//!
//! - [`seeder`]: ensure a list of admin accounts exists (create or skip)
//! - [`deleter`]: remove one account by email
//! - [`lister`]: summarize every account
//! - [`setup`]: bootstrap the configured admin account
//!
//! None of these hold state. The identity service is the only source of
//! truth, and each call reads it fresh.
//!
//! # Example
//!
//! ```ignore
//! use dawala_provisioning::{default_admin_accounts, seed_admin_accounts};
//!
//! let report = seed_admin_accounts(&client, &default_admin_accounts(&defaults)).await;
//! println!("created {}", report.summary.created);
//! ```

pub mod deleter;
pub mod error;
pub mod lister;
pub mod seeder;
pub mod setup;

pub use deleter::delete_admin_account;
pub use error::ProvisioningError;
pub use lister::list_accounts;
pub use seeder::{default_admin_accounts, seed_admin_accounts};
pub use setup::{BOOTSTRAP_CONFIG_MISSING, SetupOutcome, ensure_bootstrap_admin};
