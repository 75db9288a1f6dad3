use thiserror::Error;

/// Result type alias for facade operations
pub type Result<T> = std::result::Result<T, MspError>;

/// Result type alias for collaborator operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Errors raised by collaborators (CA client, identity manager, stores)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The requested user is not known to the identity manager or user store
    #[error("user not found")]
    UserNotFound,

    /// The CA rejected the request or could not be reached
    #[error("CA error: {message}")]
    Ca {
        /// Message reported by the CA client
        message: String,
    },

    /// Configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Crypto suite failure (missing key, unsupported algorithm)
    #[error("crypto error: {0}")]
    Crypto(String),

    /// Credential store failure
    #[error("store error: {0}")]
    Store(String),

    /// Stored identity is inconsistent with its manager
    #[error("identity error: {0}")]
    Identity(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProviderError {
    /// Create a CA error from any message
    #[must_use]
    pub fn ca(message: impl Into<String>) -> Self {
        Self::Ca {
            message: message.into(),
        }
    }
}

/// Errors returned by the MSP facade
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MspError {
    /// The facade could not be constructed
    #[error("failed to create MSP: {0}")]
    Construction(#[source] ProviderError),

    /// No identity manager is registered for the organization
    #[error("identity manager not found for organization '{organization}'")]
    CaClientUnavailable {
        /// Organization the facade is bound to
        organization: String,
    },

    /// The CA client could not be built from its dependencies
    #[error("failed to create CA client: {0}")]
    CaCreation(#[source] ProviderError),

    /// The user is not known to the identity manager
    #[error("user not found")]
    UserNotFound,

    /// The request failed validation before reaching the CA
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Collaborator error passed through unchanged
    #[error(transparent)]
    Provider(ProviderError),
}

impl MspError {
    /// Wrap a failure raised while building the facade
    ///
    /// The user-not-found variant is normalized rather than wrapped.
    #[must_use]
    pub fn construction(err: ProviderError) -> Self {
        match err {
            ProviderError::UserNotFound => Self::UserNotFound,
            other => Self::Construction(other),
        }
    }

    /// Wrap a failure raised while building a CA client
    ///
    /// The user-not-found variant is normalized rather than wrapped.
    #[must_use]
    pub fn ca_creation(err: ProviderError) -> Self {
        match err {
            ProviderError::UserNotFound => Self::UserNotFound,
            other => Self::CaCreation(other),
        }
    }

    /// Returns true if the user lookup came back empty
    #[must_use]
    pub const fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound)
    }

    /// Returns true if the error happened while building the facade
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(self, Self::Construction(_))
    }

    /// Returns the collaborator error if this one was passed through
    #[must_use]
    pub const fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProviderError> for MspError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UserNotFound => Self::UserNotFound,
            other => Self::Provider(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_normalized() {
        let err: MspError = ProviderError::UserNotFound.into();
        assert_eq!(err, MspError::UserNotFound);
        assert!(err.is_user_not_found());
        assert!(err.provider_error().is_none());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let source = ProviderError::ca("authentication failure");
        let err: MspError = source.clone().into();
        assert_eq!(err.provider_error(), Some(&source));
        assert_eq!(err.to_string(), source.to_string());
    }

    #[test]
    fn test_unavailable_message_names_org() {
        let err = MspError::CaClientUnavailable {
            organization: "Org1".into(),
        };
        assert_eq!(
            err.to_string(),
            "identity manager not found for organization 'Org1'"
        );
    }

    #[test]
    fn test_construction_predicate() {
        assert!(MspError::Construction(ProviderError::Config("x".into())).is_construction_error());
        assert!(!MspError::UserNotFound.is_construction_error());
    }

    #[test]
    fn test_wrapping_normalizes_sentinel() {
        assert_eq!(
            MspError::construction(ProviderError::UserNotFound),
            MspError::UserNotFound
        );
        assert_eq!(
            MspError::ca_creation(ProviderError::UserNotFound),
            MspError::UserNotFound
        );
    }

    #[test]
    fn test_wrapping_keeps_other_errors() {
        let source = ProviderError::Config("no CA".into());
        assert_eq!(
            MspError::construction(source.clone()),
            MspError::Construction(source.clone())
        );
        assert_eq!(
            MspError::ca_creation(source.clone()),
            MspError::CaCreation(source)
        );
    }
}
