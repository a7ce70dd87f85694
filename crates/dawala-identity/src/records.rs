//! Wire shapes of the GoTrue admin user API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form metadata stored with each account. Only `role` and `name` are
/// read or written here; other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A user record owned by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: Uuid,
    /// Phone-only accounts carry no email.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_metadata: AccountMetadata,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl AccountRecord {
    /// Exact, case-sensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }

    pub fn role(&self) -> Option<&str> {
        self.user_metadata.role.as_deref()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload for creating an account through the admin API.
#[derive(Clone, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    /// Marks the email as confirmed so the account can sign in immediately.
    pub email_confirm: bool,
    pub user_metadata: AccountMetadata,
}

impl NewAccount {
    /// A confirmed account carrying `role` and `name` metadata.
    pub fn confirmed(
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            email_confirm: true,
            user_metadata: AccountMetadata {
                role: Some(role.into()),
                name: Some(name.into()),
            },
        }
    }
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("email_confirm", &self.email_confirm)
            .field("user_metadata", &self.user_metadata)
            .finish()
    }
}
