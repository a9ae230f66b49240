//! Authenticated client with request execution and tracing.
//!
//! This module provides the [`IntraClient`] struct, which holds the bearer
//! token and sends every request issued through a
//! [`RequestHandle`](super::RequestHandle).

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use tracing::{Span, info, instrument};
use url::Url;

use super::RequestHandle;
use crate::auth::{Grant, TOKEN_URL, request_token};
use crate::error::{ApiError, AuthError, ClientError};
use crate::query::QueryOptions;

/// Base URL of the intra API.
pub const BASE_URL: &str = "https://api.intra.42.fr";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`IntraClient`].
#[derive(Debug)]
pub struct IntraClientBuilder {
    base_url: Option<Url>,
    token_url: Option<Url>,
    timeout: Duration,
}

impl IntraClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            token_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the API base URL.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Overrides the token endpoint.
    pub fn token_url(mut self, token_url: Url) -> Self {
        self.token_url = Some(token_url);
        self
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = IntraClient::builder()
    ///     .timeout(Duration::from_secs(60))
    ///     .connect(Grant::from_env()?)
    ///     .await?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exchanges `grant` for a bearer token and builds the client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// token endpoint does not answer 200 with an `access_token`.
    pub async fn connect(self, grant: Grant) -> Result<IntraClient, ApiError> {
        let mut client = self.build(String::new(), Some(grant))?;
        client.reload_bearer().await?;
        Ok(client)
    }

    /// Builds a client around an existing bearer token.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_bearer(self, bearer: impl Into<String>) -> Result<IntraClient, ApiError> {
        self.build(bearer.into(), None)
    }

    fn build(self, bearer: String, grant: Option<Grant>) -> Result<IntraClient, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(IntraClient {
            http,
            base_url: match self.base_url {
                Some(url) => url,
                None => parse_url(BASE_URL)?,
            },
            token_url: match self.token_url {
                Some(url) => url,
                None => parse_url(TOKEN_URL)?,
            },
            grant,
            bearer,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|source| ClientError::InvalidUrl {
        path: raw.to_string(),
        source,
    })
}

/// Authenticated client for the intra API.
///
/// Generated accessors build a path and hand it to [`endpoint`](Self::endpoint);
/// the returned [`RequestHandle`] sends the request.
///
/// ## Examples
///
/// ```rust,ignore
/// use intra_client::{Grant, IntraClient, QueryOptions};
///
/// let client = IntraClient::connect(Grant::from_env()?).await?;
///
/// let mut users = client.endpoint("/v2/campus/1/users", QueryOptions::default());
/// let first_page: Vec<serde_json::Value> = users.get().await?;
/// let second_page: Vec<serde_json::Value> = users.get().await?;
/// ```
#[derive(Debug)]
pub struct IntraClient {
    http: reqwest::Client,
    base_url: Url,
    token_url: Url,
    grant: Option<Grant>,
    bearer: String,
}

impl IntraClient {
    /// Creates a new builder for configuring a client.
    pub fn builder() -> IntraClientBuilder {
        IntraClientBuilder::new()
    }

    /// Connects to the public API with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the token cannot be obtained.
    pub async fn connect(grant: Grant) -> Result<Self, ApiError> {
        Self::builder().connect(grant).await
    }

    /// Creates a client around an existing bearer token, skipping acquisition.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_bearer(bearer: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder().with_bearer(bearer)
    }

    /// Obtains a fresh bearer token for the stored grant.
    ///
    /// Use this once the server starts answering 401 (see
    /// [`ApiError::is_token_expired`]).
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingGrant`] for clients built with
    /// [`with_bearer`](Self::with_bearer), or any token request error.
    pub async fn reload_bearer(&mut self) -> Result<(), ApiError> {
        let grant = self.grant.as_ref().ok_or(AuthError::MissingGrant)?;
        self.bearer = request_token(&self.http, &self.token_url, grant).await?;
        info!(uid = %grant.uid(), "Bearer token loaded");
        Ok(())
    }

    /// Returns the current bearer token.
    pub fn bearer(&self) -> &str {
        &self.bearer
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a request handle for `path` with the given query options.
    pub fn endpoint(&self, path: impl Into<String>, options: QueryOptions) -> RequestHandle<'_> {
        RequestHandle::new(self, path.into(), options)
    }

    /// Returns a request handle for a hand-written path.
    ///
    /// The path may carry its own query, e.g.
    /// `/v2/users?filter[pool_year]=2019`; default pagination is appended.
    pub fn raw_endpoint(&self, path: impl Into<String>) -> RequestHandle<'_> {
        self.endpoint(path, QueryOptions::default())
    }

    /// Joins `path` onto the base URL and appends `query`.
    pub(crate) fn url(&self, path: &str, query: &str) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|source| ClientError::InvalidUrl {
                path: path.to_string(),
                source,
            })?;

        if !query.is_empty() {
            let combined = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{existing}&{query}"),
                _ => query.to_string(),
            };
            url.set_query(Some(&combined));
        }
        Ok(url)
    }

    /// Sends one authenticated request and returns the success response.
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::HttpStatus`] for any non-success status, with
    /// the response body as message.
    #[instrument(
        name = "intra_request",
        skip_all,
        fields(
            http.method = %method,
            http.url = %url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, url).bearer_auth(&self.bearer);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");
        Ok(response)
    }
}
