//! Runtime for generated 42 intra API accessors.
//!
//! Generated accessors build a request path and hand it to
//! [`IntraClient::endpoint`]. This crate supplies everything behind that
//! call: OAuth2 token acquisition from a [`Grant`], the bearer-authenticated
//! HTTP client, [`QueryOptions`] for filtering and pagination, and the
//! [`RequestHandle`] that actually sends requests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use intra_client::{ApiError, Grant, IntraClient, QueryOptions};
//!
//! # async fn run() -> Result<(), ApiError> {
//! let client = IntraClient::connect(Grant::from_env()?).await?;
//!
//! let mut cadets = client.endpoint(
//!     "/v2/campus/1/users",
//!     QueryOptions::default().filter("pool_year", "2019"),
//! );
//! let first_page: Vec<serde_json::Value> = cadets.get().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod query;

pub use auth::Grant;
pub use client::{IntraClient, IntraClientBuilder, RequestHandle};
pub use error::{ApiError, AuthError, ClientError};
pub use query::{Page, QueryOptions};
