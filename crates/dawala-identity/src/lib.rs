//! # Dawala Identity
//!
//! Access to the hosted identity service that owns every admin account.
//!
//! The provisioning workflow only needs three operations, captured by the
//! [`AccountDirectory`] trait:
//!
//! - list every account
//! - create an account
//! - delete an account by id
//!
//! [`SupabaseAdminClient`] implements the trait against the GoTrue admin API.
//! With the `test-utils` feature, [`InMemoryDirectory`] provides a
//! deterministic stand-in with call counters and failure injection.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod records;

pub use client::SupabaseAdminClient;
pub use error::IdentityError;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryDirectory;
pub use records::{AccountMetadata, AccountRecord, NewAccount};

use async_trait::async_trait;
use uuid::Uuid;

/// The identity service as seen by the provisioning workflow.
///
/// Implementations are the source of truth; callers never cache results
/// beyond a single operation.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Returns every account, across all upstream pages.
    async fn list_accounts(&self) -> Result<Vec<AccountRecord>, IdentityError>;

    async fn create_account(&self, account: NewAccount) -> Result<AccountRecord, IdentityError>;

    async fn delete_account(&self, id: Uuid) -> Result<(), IdentityError>;
}
