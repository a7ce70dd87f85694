use thiserror::Error;

/// Errors returned by an [`AccountDirectory`](crate::AccountDirectory).
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The request never produced a response (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The identity service answered with a non-success status.
    ///
    /// Displays as the service's own message so it can be passed through to
    /// callers unchanged.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The listing did not end within the page limit, so it may be incomplete.
    #[error("Account listing exceeded {max_pages} pages of {page_size}")]
    PageLimitExceeded { max_pages: u32, page_size: u32 },

    /// The client could not be built from the configuration.
    #[error("Invalid identity configuration: {0}")]
    Config(String),
}

impl IdentityError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// The message reported by the identity service, if it answered at all.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_service_message() {
        let err = IdentityError::api(422, "A user with this email address has already been registered");
        assert_eq!(
            err.to_string(),
            "A user with this email address has already been registered"
        );
        assert_eq!(
            err.service_message(),
            Some("A user with this email address has already been registered")
        );
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_parse_error_has_no_service_message() {
        let err = IdentityError::Parse("unexpected EOF".to_string());
        assert!(err.service_message().is_none());
        assert!(err.status().is_none());
    }
}
