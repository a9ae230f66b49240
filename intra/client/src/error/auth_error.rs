//! Authentication errors.

use thiserror::Error;

/// Errors raised while obtaining a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A credential environment variable is not set.
    #[error("Missing credentials: environment variable {variable} is not set")]
    MissingCredentials {
        /// The variable that was looked up.
        variable: String,
    },

    /// The token endpoint answered with something other than 200.
    #[error("Token request failed with HTTP {status}: {message}")]
    TokenRequestFailed {
        status: u16,
        /// Response body from the token endpoint.
        message: String,
    },

    /// The token endpoint answered 200 without a usable `access_token`.
    #[error("Token response has no access_token: {source}")]
    MalformedTokenResponse {
        #[source]
        source: serde_json::Error,
    },

    /// A token reload was requested for a client built from a bare token.
    #[error("No grant to reload the bearer token from")]
    MissingGrant,
}

impl AuthError {
    /// Returns `true` if retrying with different credentials may help.
    pub fn is_credential_problem(&self) -> bool {
        match self {
            Self::MissingCredentials { .. } | Self::MissingGrant => true,
            Self::TokenRequestFailed { status, .. } => *status == 400 || *status == 401,
            Self::MalformedTokenResponse { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_display() {
        let err = AuthError::MissingCredentials {
            variable: "UID42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing credentials: environment variable UID42 is not set"
        );
    }

    #[test]
    fn test_rejected_grant_is_credential_problem() {
        let err = AuthError::TokenRequestFailed {
            status: 401,
            message: "invalid_client".to_string(),
        };
        assert!(err.is_credential_problem());
    }

    #[test]
    fn test_server_error_is_not_credential_problem() {
        let err = AuthError::TokenRequestFailed {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert!(!err.is_credential_problem());
    }
}
