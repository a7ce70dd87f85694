use dawala_identity::IdentityError;
use thiserror::Error;

pub const UNEXPECTED_ERROR: &str = "Unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisioningError {
    /// Required configuration is absent. Raised before any network call.
    #[error("{0}")]
    MissingConfiguration(String),

    #[error("Admin email is required")]
    EmailRequired,

    #[error("Admin user not found")]
    NotFound,

    /// The identity service rejected the call; carries its message verbatim.
    #[error("{0}")]
    Upstream(String),

    /// Transport or decoding failure. Details are logged, not returned.
    #[error("Unexpected error occurred")]
    Unexpected,
}

impl From<IdentityError> for ProvisioningError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Api { message, .. } => ProvisioningError::Upstream(message),
            other => {
                tracing::error!(error = %other, "Identity service call failed");
                ProvisioningError::Unexpected
            }
        }
    }
}
