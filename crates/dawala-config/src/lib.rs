//! # Dawala Config
//!
//! Configuration types for the Dawala admin API, loaded from environment
//! variables:
//!
//! - [`identity`]: Identity service URL and service-role credential
//! - [`admin`]: Default seed account and auto-setup account
//! - [`server`]: Listen address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! Every type exposes `from_env()`. Types whose inputs need testing also
//! expose `from_lookup()`, which takes any `Fn(&str) -> Option<String>` so
//! tests never have to mutate the process environment.
//!
//! # Example
//!
//! ```ignore
//! use dawala_config::{IdentityConfig, DefaultAdminConfig};
//!
//! let identity = IdentityConfig::from_env()?;
//! let defaults = DefaultAdminConfig::from_env();
//! ```

pub mod admin;
pub mod cors;
pub mod identity;
pub mod server;

pub use admin::{AutoSetupConfig, DefaultAdminConfig};
pub use cors::CorsConfig;
pub use identity::{ConfigError, IdentityConfig};
pub use server::ServerConfig;

/// Reads a variable and treats an empty value as unset.
pub(crate) fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
