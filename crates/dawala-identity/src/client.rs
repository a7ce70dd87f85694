//! GoTrue admin API client.
//!
//! # API Reference
//!
//! - Base URL: `{SUPABASE_URL}/auth/v1/admin`
//! - Authentication: service-role key sent as both `apikey` and
//!   `Authorization: Bearer <key>`
//! - `GET /users?page=N&per_page=P` lists one page of users
//! - `POST /users` creates a user
//! - `DELETE /users/{id}` deletes a user

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dawala_config::IdentityConfig;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::IdentityError;
use crate::records::{AccountRecord, NewAccount};
use crate::AccountDirectory;

const ADMIN_USERS_PATH: &str = "/auth/v1/admin/users";

/// Upper bound on list pages, guarding against a server that ignores `per_page`.
/// Reaching it is an error rather than a silently truncated listing.
const MAX_PAGES: u32 = 10_000;

#[derive(Debug, Deserialize)]
struct ListUsersPage {
    #[serde(default)]
    users: Vec<AccountRecord>,
}

/// Error body shapes used across GoTrue versions.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .filter(|m| !m.is_empty())
    }
}

#[derive(Clone)]
pub struct SupabaseAdminClient {
    inner: Arc<SupabaseAdminClientInner>,
}

struct SupabaseAdminClientInner {
    client: reqwest::Client,
    users_url: String,
    page_size: u32,
    max_pages: u32,
}

impl SupabaseAdminClient {
    /// Builds a client with the service-role headers preinstalled.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Config`] if the key is not a valid header
    /// value, or [`IdentityError::Http`] if the HTTP client fails to build.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let key = config.service_role_key.expose_secret();

        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(key)
            .map_err(|e| IdentityError::Config(format!("Invalid service role key: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert("apikey", api_key);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| IdentityError::Config(format!("Invalid service role key: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            inner: Arc::new(SupabaseAdminClientInner {
                client,
                users_url: format!("{}{}", config.url.trim_end_matches('/'), ADMIN_USERS_PATH),
                page_size: config.page_size.max(1),
                max_pages: MAX_PAGES,
            }),
        })
    }

    /// Lowers the page limit so tests can reach it.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_max_pages(self, max_pages: u32) -> Self {
        let inner = SupabaseAdminClientInner {
            client: self.inner.client.clone(),
            users_url: self.inner.users_url.clone(),
            page_size: self.inner.page_size,
            max_pages: max_pages.max(1),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    async fn list_page(&self, page: u32) -> Result<Vec<AccountRecord>, IdentityError> {
        let response = self
            .inner
            .client
            .get(&self.inner.users_url)
            .query(&[("page", page), ("per_page", self.inner.page_size)])
            .send()
            .await?;

        let body: ListUsersPage = Self::handle_response(response).await?;
        Ok(body.users)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, IdentityError> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| IdentityError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    async fn parse_error(response: reqwest::Response) -> IdentityError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        IdentityError::api(status.as_u16(), error_message(status, &body))
    }
}

/// Extracts the human-readable message from an error response body.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Identity service error")
                .to_string()
        })
}

#[async_trait]
impl AccountDirectory for SupabaseAdminClient {
    #[instrument(skip(self))]
    async fn list_accounts(&self) -> Result<Vec<AccountRecord>, IdentityError> {
        let mut accounts = Vec::new();

        for page in 1..=self.inner.max_pages {
            let batch = self.list_page(page).await?;
            let fetched = batch.len();
            accounts.extend(batch);

            debug!(page, fetched, total = accounts.len(), "Fetched account page");

            if fetched < self.inner.page_size as usize {
                return Ok(accounts);
            }
        }

        warn!(
            max_pages = self.inner.max_pages,
            page_size = self.inner.page_size,
            fetched = accounts.len(),
            "Account listing hit the page limit; refusing a possibly truncated result"
        );
        Err(IdentityError::PageLimitExceeded {
            max_pages: self.inner.max_pages,
            page_size: self.inner.page_size,
        })
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn create_account(&self, account: NewAccount) -> Result<AccountRecord, IdentityError> {
        let response = self
            .inner
            .client
            .post(&self.inner.users_url)
            .json(&account)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, id: Uuid) -> Result<(), IdentityError> {
        let response = self
            .inner
            .client
            .delete(format!("{}/{}", self.inner.users_url, id))
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::parse_error(response).await)
    }
}
