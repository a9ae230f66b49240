//! Layered error types for the intra client.
//!
//! - [`ApiError`] - Top-level error type for all client operations
//! - [`ClientError`] - HTTP client and network errors
//! - [`AuthError`] - Credential and token acquisition errors

mod api_error;
mod auth_error;
mod client_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
