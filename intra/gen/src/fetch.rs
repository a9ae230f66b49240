//! Documentation fetching.
//!
//! Loads the API self-description either over HTTP or from a local snapshot
//! and deserializes it into [`ApiDocs`]. Any failure here aborts the run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use intra_define::ApiDocs;
use tracing::{debug, info, instrument};

use crate::config::DocsSource;
use crate::errors::GeneratorError;

/// Parses a documentation body.
///
/// ## Errors
///
/// Returns [`GeneratorError::MalformedDocs`] if the body is not JSON or lacks
/// the `docs -> resources -> methods -> apis` structure.
pub fn parse_docs(body: &str) -> Result<ApiDocs, GeneratorError> {
    serde_json::from_str(body).map_err(|source| GeneratorError::MalformedDocs { source })
}

/// Reads and parses a documentation snapshot from disk.
pub fn read_docs(path: &Path) -> Result<ApiDocs, GeneratorError> {
    let body = fs::read_to_string(path).map_err(|source| GeneratorError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    parse_docs(&body)
}

/// Fetches and parses the documentation from `url`.
///
/// ## Errors
///
/// Returns an error if the request fails or times out, the server answers
/// with a non-success status, or the body is malformed.
#[instrument(skip(timeout), fields(timeout_secs = timeout.as_secs()))]
pub async fn fetch_docs(url: &str, timeout: Duration) -> Result<ApiDocs, GeneratorError> {
    let fetch_error = |source| GeneratorError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_error)?;

    let response = client.get(url).send().await.map_err(fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeneratorError::FetchStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(fetch_error)?;
    debug!(bytes = body.len(), "Documentation downloaded");
    parse_docs(&body)
}

/// Loads the documentation from the configured source.
pub async fn load_docs(source: &DocsSource, timeout: Duration) -> Result<ApiDocs, GeneratorError> {
    let docs = match source {
        DocsSource::Url(url) => fetch_docs(url, timeout).await?,
        DocsSource::File(path) => read_docs(path)?,
    };
    info!(resources = docs.docs.resources.len(), "Loaded API documentation");
    Ok(docs)
}
