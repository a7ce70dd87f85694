//! In-memory [`AccountDirectory`] for tests.
//!
//! Behaves like the identity service for the operations we use: emails are
//! unique, ids are server-assigned, and deleting an unknown id fails. Every
//! call is counted. List, create and delete failures can be injected, and
//! create can also fail with a non-service (decode) error.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::AccountDirectory;
use crate::error::IdentityError;
use crate::records::{AccountMetadata, AccountRecord, NewAccount};

#[derive(Default)]
pub struct InMemoryDirectory {
    accounts: Mutex<Vec<AccountRecord>>,
    list_failure: Mutex<Option<String>>,
    create_failures: Mutex<HashMap<String, String>>,
    unexpected_create_failures: Mutex<Vec<String>>,
    delete_failure: Mutex<Option<String>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an existing account with the given email and role.
    pub fn with_account(self, email: &str, role: Option<&str>) -> Self {
        self.insert(email, role);
        self
    }

    pub fn insert(&self, email: &str, role: Option<&str>) -> AccountRecord {
        let record = AccountRecord {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
            user_metadata: AccountMetadata {
                role: role.map(str::to_string),
                name: None,
            },
            created_at: Utc::now(),
            last_sign_in_at: None,
        };
        self.lock_accounts().push(record.clone());
        record
    }

    /// Makes every subsequent list call fail with `message`.
    pub fn fail_list(&self, message: &str) {
        *self.list_failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.to_string());
    }

    /// Makes creating `email` fail with `message`.
    pub fn fail_create_for(&self, email: &str, message: &str) {
        self.create_failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(email.to_string(), message.to_string());
    }

    /// Makes creating `email` fail with a decode error instead of a service error.
    pub fn fail_create_unexpected(&self, email: &str) {
        self.unexpected_create_failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(email.to_string());
    }

    pub fn fail_delete(&self, message: &str) {
        *self.delete_failure.lock().unwrap_or_else(|e| e.into_inner()) =
            Some(message.to_string());
    }

    pub fn accounts(&self) -> Vec<AccountRecord> {
        self.lock_accounts().clone()
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.lock_accounts().iter().any(|a| a.has_email(email))
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn lock_accounts(&self) -> std::sync::MutexGuard<'_, Vec<AccountRecord>> {
        self.accounts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl AccountDirectory for InMemoryDirectory {
    async fn list_accounts(&self) -> Result<Vec<AccountRecord>, IdentityError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self
            .list_failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(IdentityError::api(500, message));
        }

        Ok(self.accounts())
    }

    async fn create_account(&self, account: NewAccount) -> Result<AccountRecord, IdentityError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self
            .create_failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&account.email)
        {
            return Err(IdentityError::api(400, message.clone()));
        }

        if self
            .unexpected_create_failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&account.email)
        {
            return Err(IdentityError::Parse(
                "Failed to parse response: expected value at line 1 column 1".to_string(),
            ));
        }

        let mut accounts = self.lock_accounts();
        if accounts.iter().any(|a| a.has_email(&account.email)) {
            return Err(IdentityError::api(
                422,
                "A user with this email address has already been registered",
            ));
        }

        let record = AccountRecord {
            id: Uuid::new_v4(),
            email: Some(account.email),
            user_metadata: account.user_metadata,
            created_at: Utc::now(),
            last_sign_in_at: None,
        };
        accounts.push(record.clone());

        Ok(record)
    }

    async fn delete_account(&self, id: Uuid) -> Result<(), IdentityError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self
            .delete_failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(IdentityError::api(500, message));
        }

        let mut accounts = self.lock_accounts();
        let before = accounts.len();
        accounts.retain(|a| a.id != id);

        if accounts.len() == before {
            return Err(IdentityError::api(404, "User not found"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let directory = InMemoryDirectory::new().with_account("a@x.com", Some("admin"));

        let err = directory
            .create_account(NewAccount::confirmed("a@x.com", "pw", "admin", "A"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(422));
        assert_eq!(directory.create_calls(), 1);
        assert_eq!(directory.accounts().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails() {
        let directory = InMemoryDirectory::new();
        assert!(directory.delete_account(Uuid::new_v4()).await.is_err());
        assert_eq!(directory.delete_calls(), 1);
    }

    #[tokio::test]
    async fn test_injected_unexpected_create_failure() {
        let directory = InMemoryDirectory::new();
        directory.fail_create_unexpected("a@x.com");

        let err = directory
            .create_account(NewAccount::confirmed("a@x.com", "pw", "admin", "A"))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::Parse(_)));
        assert!(directory.accounts().is_empty());
    }

    #[tokio::test]
    async fn test_injected_list_failure() {
        let directory = InMemoryDirectory::new();
        directory.fail_list("service unavailable");
        let err = directory.list_accounts().await.unwrap_err();
        assert_eq!(err.service_message(), Some("service unavailable"));
    }
}
