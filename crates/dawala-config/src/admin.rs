//! Admin account configuration.
//!
//! Two accounts can be configured:
//!
//! - The **default seed account**, used when a seed is requested without an
//!   explicit list. Every field falls back to a hard-coded value.
//! - The **auto-setup account**, used by the bootstrap endpoint. It has no
//!   fallbacks: bootstrap refuses to run until both variables are set.
//!
//! # Environment Variables
//!
//! - `DEFAULT_ADMIN_EMAIL`: Default `admin@dawala.com`
//! - `DEFAULT_ADMIN_PASSWORD`: Default `admin123456`
//! - `DEFAULT_ADMIN_NAME`: Default `Dawala Admin`
//! - `DEFAULT_ADMIN_ROLE`: Default `admin`
//! - `ADMIN_EMAIL`, `ADMIN_PASSWORD`: Auto-setup account
//! - `AUTO_SETUP_ON_START`: Run auto-setup when the server boots. Default false

use std::fmt;

use secrecy::SecretString;

use crate::{env_lookup, non_empty};

pub const FALLBACK_ADMIN_EMAIL: &str = "admin@dawala.com";
pub const FALLBACK_ADMIN_PASSWORD: &str = "admin123456";
pub const FALLBACK_ADMIN_NAME: &str = "Dawala Admin";
pub const FALLBACK_ADMIN_ROLE: &str = "admin";

#[derive(Clone, PartialEq, Eq)]
pub struct DefaultAdminConfig {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
    /// True when `password` came from the hard-coded fallback.
    pub uses_fallback_password: bool,
}

impl fmt::Debug for DefaultAdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultAdminConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("uses_fallback_password", &self.uses_fallback_password)
            .finish()
    }
}

impl Default for DefaultAdminConfig {
    fn default() -> Self {
        Self {
            email: FALLBACK_ADMIN_EMAIL.to_string(),
            password: FALLBACK_ADMIN_PASSWORD.to_string(),
            name: FALLBACK_ADMIN_NAME.to_string(),
            role: FALLBACK_ADMIN_ROLE.to_string(),
            uses_fallback_password: true,
        }
    }
}

impl DefaultAdminConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let password = non_empty(&lookup, "DEFAULT_ADMIN_PASSWORD");
        let config = Self {
            email: non_empty(&lookup, "DEFAULT_ADMIN_EMAIL")
                .unwrap_or_else(|| FALLBACK_ADMIN_EMAIL.to_string()),
            uses_fallback_password: password.is_none(),
            password: password.unwrap_or_else(|| FALLBACK_ADMIN_PASSWORD.to_string()),
            name: non_empty(&lookup, "DEFAULT_ADMIN_NAME")
                .unwrap_or_else(|| FALLBACK_ADMIN_NAME.to_string()),
            role: non_empty(&lookup, "DEFAULT_ADMIN_ROLE")
                .unwrap_or_else(|| FALLBACK_ADMIN_ROLE.to_string()),
        };

        if config.uses_fallback_password {
            tracing::warn!(
                email = %config.email,
                "DEFAULT_ADMIN_PASSWORD is not set; default admin seeding uses the built-in password"
            );
        }

        config
    }
}

#[derive(Debug, Clone, Default)]
pub struct AutoSetupConfig {
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub run_on_start: bool,
}

impl AutoSetupConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            email: non_empty(&lookup, "ADMIN_EMAIL"),
            password: non_empty(&lookup, "ADMIN_PASSWORD").map(SecretString::from),
            run_on_start: lookup("AUTO_SETUP_ON_START")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }
}
