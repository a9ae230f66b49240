//! Endpoint extraction.
//!
//! Flattens the documentation into an [`EndpointSet`]: every distinct path
//! template, with the HTTP methods and resource names it was documented
//! under. Templates are deduplicated by exact string equality, so several
//! methods on one path collapse into a single entry.

use std::collections::{BTreeMap, BTreeSet};

use intra_define::{AccessorSpec, ApiDocs, PathTemplate, RestMethod, TemplateError};
use tracing::{debug, warn};

use crate::errors::GeneratorError;

/// What the documentation says about one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointInfo {
    pub methods: BTreeSet<RestMethod>,
    pub resources: BTreeSet<String>,
}

/// The deduplicated set of documented path templates.
#[derive(Debug, Clone, Default)]
pub struct EndpointSet {
    endpoints: BTreeMap<PathTemplate, EndpointInfo>,
    skipped: BTreeSet<String>,
}

impl EndpointSet {
    /// Extracts every documented template.
    ///
    /// Templates using optional-group syntax are skipped with a warning since
    /// they have no fixed-arity shape.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::InvalidTemplate`] for any other template
    /// that does not parse, e.g. one outside the `version` prefix.
    pub fn from_docs(docs: &ApiDocs, version: &str) -> Result<Self, GeneratorError> {
        let mut set = Self::default();

        for (resource, entry) in &docs.docs.resources {
            for call in entry.methods.iter().flat_map(|group| group.apis.iter()) {
                let template = match PathTemplate::parse(&call.api_url, version) {
                    Ok(template) => template,
                    Err(TemplateError::OptionalGroup { template }) => {
                        if set.skipped.insert(template.clone()) {
                            warn!(%template, "Skipping template with optional groups");
                        }
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };

                let info = set.endpoints.entry(template).or_default();
                info.methods.insert(call.http_method);
                info.resources.insert(resource.clone());
            }
        }

        debug!(
            templates = set.endpoints.len(),
            skipped = set.skipped.len(),
            "Extracted endpoints"
        );
        Ok(set)
    }

    /// Number of distinct templates.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns `true` if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Iterates the templates in raw-string order.
    pub fn templates(&self) -> impl Iterator<Item = &PathTemplate> {
        self.endpoints.keys()
    }

    /// Returns what was documented for `template`.
    pub fn info(&self, template: &PathTemplate) -> Option<&EndpointInfo> {
        self.endpoints.get(template)
    }

    /// Templates skipped because they use optional groups.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.skipped.iter().map(String::as_str)
    }

    /// Attaches documented methods and resources to a spec.
    pub fn annotate(&self, spec: AccessorSpec) -> AccessorSpec {
        let mut methods = BTreeSet::new();
        let mut resources = BTreeSet::new();
        for source in spec.sources() {
            if let Some(info) = self.info(source) {
                methods.extend(info.methods.iter().copied());
                resources.extend(info.resources.iter().cloned());
            }
        }
        spec.with_methods(methods).with_resources(resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::parse_docs;

    fn docs() -> ApiDocs {
        parse_docs(
            r#"{"docs": {"resources": {
                "users": {"methods": [
                    {"apis": [
                        {"api_url": "/v2/users", "http_method": "GET"},
                        {"api_url": "/v2/campus/:campus_id/users", "http_method": "GET"}
                    ]},
                    {"apis": [{"api_url": "/v2/users/:id", "http_method": "GET"}]},
                    {"apis": [{"api_url": "/v2/users/:id", "http_method": "PATCH"}]}
                ]},
                "events": {"methods": [
                    {"apis": [
                        {"api_url": "/v2/events/graph(/on/:field(/by/:interval))", "http_method": "GET"},
                        {"api_url": "/v2/users/:id", "http_method": "GET"}
                    ]}
                ]}
            }}}"#,
        )
        .unwrap()
    }

    #[test]
    fn deduplicates_by_exact_string() {
        let set = EndpointSet::from_docs(&docs(), "v2").unwrap();
        let raw: Vec<_> = set.templates().map(PathTemplate::raw).collect();
        assert_eq!(
            raw,
            vec!["/v2/campus/:campus_id/users", "/v2/users", "/v2/users/:id"]
        );
    }

    #[test]
    fn merges_methods_and_resources() {
        let set = EndpointSet::from_docs(&docs(), "v2").unwrap();
        let item = PathTemplate::parse("/v2/users/:id", "v2").unwrap();
        let info = set.info(&item).unwrap();
        assert_eq!(
            info.methods.iter().copied().collect::<Vec<_>>(),
            vec![RestMethod::Get, RestMethod::Patch]
        );
        assert_eq!(
            info.resources.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["events", "users"]
        );
    }

    #[test]
    fn skips_optional_groups() {
        let set = EndpointSet::from_docs(&docs(), "v2").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.skipped().collect::<Vec<_>>(),
            vec!["/v2/events/graph(/on/:field(/by/:interval))"]
        );
    }

    #[test]
    fn wrong_version_is_fatal() {
        let docs = parse_docs(
            r#"{"docs": {"resources": {"users": {"methods": [
                {"apis": [{"api_url": "/v3/users", "http_method": "GET"}]}
            ]}}}}"#,
        )
        .unwrap();
        let result = EndpointSet::from_docs(&docs, "v2");
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidTemplate(
                TemplateError::MissingVersionPrefix { .. }
            ))
        ));
    }

    #[test]
    fn empty_docs_give_empty_set() {
        let docs = parse_docs(r#"{"docs": {"resources": {}}}"#).unwrap();
        let set = EndpointSet::from_docs(&docs, "v2").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn annotate_unions_both_sources() {
        let set = EndpointSet::from_docs(&docs(), "v2").unwrap();
        let spec = AccessorSpec::collapsed(
            "Users",
            PathTemplate::parse("/v2/users", "v2").unwrap(),
            PathTemplate::parse("/v2/users/:id", "v2").unwrap(),
        );
        let spec = set.annotate(spec);
        assert!(spec.methods.contains(&RestMethod::Patch));
        assert!(spec.resources.contains("users"));
    }
}
