//! Request handles scoped to one path.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::IntraClient;
use crate::error::{ApiError, ClientError};
use crate::query::QueryOptions;

/// A path on the intra API plus the query options to send with it.
///
/// Returned by [`IntraClient::endpoint`] and by every generated accessor.
/// [`get`](Self::get) walks pages: each successful call advances the page
/// number, so calling it in a loop until an empty page fetches a whole
/// collection.
#[derive(Debug)]
pub struct RequestHandle<'a> {
    client: &'a IntraClient,
    path: String,
    options: QueryOptions,
}

impl<'a> RequestHandle<'a> {
    pub(crate) fn new(client: &'a IntraClient, path: String, options: QueryOptions) -> Self {
        Self {
            client,
            path,
            options,
        }
    }

    /// The path this handle targets, without query.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query options sent with GET requests.
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// The URL the next [`get`](Self::get) will request.
    pub fn url(&self) -> Result<Url, ClientError> {
        self.client.url(&self.path, &self.options.query())
    }

    /// Fetches the current page and advances to the next one.
    ///
    /// ## Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that does not deserialize into `T`. The page number is left unchanged
    /// on error.
    pub async fn get<T: DeserializeOwned>(&mut self) -> Result<T, ApiError> {
        let url = self.url()?;
        let response = self.client.send::<()>(Method::GET, url, None).await?;
        let body = response.bytes().await.map_err(ClientError::Request)?;
        let parsed = serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            path: self.path.clone(),
            source,
        })?;

        self.options.advance_page();
        debug!(path = %self.path, page = ?self.options.page.map(|p| p.number), "Advanced to next page");
        Ok(parsed)
    }

    /// Sends `body` as JSON with POST.
    pub async fn post<B: Serialize + ?Sized>(&self, body: &B) -> Result<reqwest::Response, ApiError> {
        self.send_body(Method::POST, body).await
    }

    /// Sends `body` as JSON with PATCH.
    pub async fn patch<B: Serialize + ?Sized>(&self, body: &B) -> Result<reqwest::Response, ApiError> {
        self.send_body(Method::PATCH, body).await
    }

    /// Sends `body` as JSON with PUT.
    pub async fn put<B: Serialize + ?Sized>(&self, body: &B) -> Result<reqwest::Response, ApiError> {
        self.send_body(Method::PUT, body).await
    }

    /// Sends DELETE.
    pub async fn delete(&self) -> Result<reqwest::Response, ApiError> {
        let url = self.client.url(&self.path, "")?;
        self.client.send::<()>(Method::DELETE, url, None).await
    }

    /// Write requests carry no query options.
    async fn send_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.client.url(&self.path, "")?;
        self.client.send(method, url, Some(body)).await
    }
}
