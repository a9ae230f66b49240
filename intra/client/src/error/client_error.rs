//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP client layer.
///
/// These errors represent network-level failures, HTTP status errors,
/// and URL problems that occur during request execution.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Response body, or the status reason when the body is unreadable.
        message: String,
    },

    /// The request path could not be joined onto the base URL.
    #[error("Invalid URL for path '{path}': {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

impl ClientError {
    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl { .. } => None,
        }
    }
}
