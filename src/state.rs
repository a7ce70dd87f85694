use std::fmt;
use std::sync::Arc;

use anyhow::anyhow;
use dawala_config::{AutoSetupConfig, CorsConfig, DefaultAdminConfig, IdentityConfig};
use dawala_core::AppError;
use dawala_identity::{AccountDirectory, SupabaseAdminClient};
use tracing::warn;

/// The identity service, or the reason it could not be configured.
///
/// A missing configuration does not stop the server. Provisioning endpoints
/// answer with the configuration error instead, before any network call.
#[derive(Clone)]
pub enum DirectoryHandle {
    Ready(Arc<dyn AccountDirectory>),
    Unavailable(String),
}

impl fmt::Debug for DirectoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryHandle::Ready(_) => f.write_str("DirectoryHandle::Ready"),
            DirectoryHandle::Unavailable(reason) => {
                f.debug_tuple("DirectoryHandle::Unavailable").field(reason).finish()
            }
        }
    }
}

impl DirectoryHandle {
    pub fn from_config(config: Result<IdentityConfig, dawala_config::ConfigError>) -> Self {
        let client = config
            .map_err(|e| e.to_string())
            .and_then(|config| SupabaseAdminClient::new(&config).map_err(|e| e.to_string()));

        match client {
            Ok(client) => DirectoryHandle::Ready(Arc::new(client)),
            Err(reason) => {
                warn!(%reason, "Identity service unavailable; provisioning endpoints will reject requests");
                DirectoryHandle::Unavailable(reason)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub directory: DirectoryHandle,
    pub admin_defaults: DefaultAdminConfig,
    pub auto_setup: AutoSetupConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State backed by an arbitrary directory, with default configuration.
    pub fn with_directory(directory: Arc<dyn AccountDirectory>) -> Self {
        Self {
            directory: DirectoryHandle::Ready(directory),
            admin_defaults: DefaultAdminConfig::default(),
            auto_setup: AutoSetupConfig::default(),
            cors_config: CorsConfig::default(),
        }
    }

    /// The configured directory, or a 400 carrying the configuration error.
    pub fn directory(&self) -> Result<&dyn AccountDirectory, AppError> {
        match &self.directory {
            DirectoryHandle::Ready(directory) => Ok(directory.as_ref()),
            DirectoryHandle::Unavailable(reason) => Err(AppError::bad_request(anyhow!("{reason}"))),
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState {
        directory: DirectoryHandle::from_config(IdentityConfig::from_env()),
        admin_defaults: DefaultAdminConfig::from_env(),
        auto_setup: AutoSetupConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
