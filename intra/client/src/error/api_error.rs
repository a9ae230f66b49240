//! Top-level client error.

use thiserror::Error;

use super::{AuthError, ClientError};

/// Any error returned by [`IntraClient`](crate::IntraClient) or
/// [`RequestHandle`](crate::RequestHandle).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A success response body did not deserialize into the requested type.
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns `true` when the server rejected the bearer token.
    ///
    /// Call [`IntraClient::reload_bearer`](crate::IntraClient::reload_bearer)
    /// and retry.
    pub fn is_token_expired(&self) -> bool {
        matches!(
            self,
            Self::Client(ClientError::HttpStatus { status: 401, .. })
        )
    }

    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::Auth(AuthError::TokenRequestFailed { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
