//! Serde model of the API documentation JSON.
//!
//! The documentation endpoint returns a nested structure:
//!
//! ```text
//! {"docs": {"resources": {<name>: {"methods": [{"apis": [{"api_url": ..., "http_method": ...}]}]}}}}
//! ```
//!
//! Only the keys the generator reads are modelled; any other field in the
//! document is ignored. A missing key is a deserialization error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::RestMethod;

/// Top-level documentation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDocs {
    pub docs: DocsBody,
}

/// The `docs` object holding every documented resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsBody {
    /// Resources keyed by name (e.g. `"users"`, `"campus"`).
    pub resources: BTreeMap<String, Resource>,
}

/// A documented resource and its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub methods: Vec<MethodGroup>,
}

/// One documented method of a resource, possibly reachable from several URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodGroup {
    pub apis: Vec<ApiCall>,
}

/// A single documented call: a URL template and its HTTP verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCall {
    /// Path template such as `/v2/users/:id`.
    pub api_url: String,
    pub http_method: RestMethod,
}

impl ApiDocs {
    /// Iterates every documented call, in resource-name order.
    ///
    /// ## Examples
    ///
    /// ```
    /// use intra_define::ApiDocs;
    ///
    /// let docs: ApiDocs = serde_json::from_str(r#"{
    ///     "docs": {"resources": {"users": {"methods": [
    ///         {"apis": [{"api_url": "/v2/users", "http_method": "GET"}]}
    ///     ]}}}
    /// }"#).unwrap();
    ///
    /// let urls: Vec<_> = docs.calls().map(|call| call.api_url.as_str()).collect();
    /// assert_eq!(urls, vec!["/v2/users"]);
    /// ```
    pub fn calls(&self) -> impl Iterator<Item = &ApiCall> {
        self.docs
            .resources
            .values()
            .flat_map(|resource| resource.methods.iter())
            .flat_map(|group| group.apis.iter())
    }
}
