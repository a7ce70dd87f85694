//! Identity service configuration.
//!
//! The identity service is a hosted GoTrue admin API (Supabase Auth). All
//! admin operations authenticate with the service-role key, so the key is held
//! in a [`SecretString`] and never printed.
//!
//! # Environment Variables
//!
//! - `SUPABASE_URL`: Base URL of the project (required)
//! - `SUPABASE_SERVICE_ROLE_KEY`: Service-role key (required)
//! - `IDENTITY_PAGE_SIZE`: Users requested per list page. Default 1000
//! - `IDENTITY_TIMEOUT_SECS`: HTTP client timeout in seconds. Default 30

use secrecy::SecretString;
use thiserror::Error;

use crate::{env_lookup, non_empty};

pub const URL_VAR: &str = "SUPABASE_URL";
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

const DEFAULT_PAGE_SIZE: u32 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing identity service configuration. Please check {}", .0.join(" and "))]
    MissingVars(Vec<&'static str>),
}

#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL without trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    pub service_role_key: SecretString,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl IdentityConfig {
    pub fn new(url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            service_role_key: SecretString::from(service_role_key.into()),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVars`] naming every required variable
    /// that is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = non_empty(&lookup, URL_VAR);
        let key = non_empty(&lookup, SERVICE_ROLE_KEY_VAR);

        let (url, key) = match (url, key) {
            (Some(url), Some(key)) => (url, key),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(URL_VAR);
                }
                if key.is_none() {
                    missing.push(SERVICE_ROLE_KEY_VAR);
                }
                return Err(ConfigError::MissingVars(missing));
            }
        };

        let page_size = lookup("IDENTITY_PAGE_SIZE")
            .and_then(|v| v.parse().ok())
            .filter(|size: &u32| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let timeout_secs = lookup("IDENTITY_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            page_size,
            timeout_secs,
            ..Self::new(url, key)
        })
    }
}
