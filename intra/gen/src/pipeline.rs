//! End-to-end generation.
//!
//! Wires the stages together: load the documentation, extract templates,
//! sort, classify, resolve name collisions, render, write. Everything before
//! the final write is pure, so any failure leaves the output file untouched.

use std::fs;

use intra_define::ApiDocs;
use tracing::info;

use crate::classify::classify;
use crate::collision::{ResolvedAccessor, resolve_collisions};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::extract::EndpointSet;
use crate::fetch::load_docs;
use crate::output::{generate_and_write, render};
use crate::sort::sort_templates;

/// Turns parsed documentation into the accessors to emit, in output order.
///
/// ## Errors
///
/// Returns an error if a template falls outside the configured version
/// prefix, or on any collision under the `reject` policy.
pub fn build_accessors(
    docs: &ApiDocs,
    config: &GeneratorConfig,
) -> Result<Vec<ResolvedAccessor>, GeneratorError> {
    let endpoints = EndpointSet::from_docs(docs, &config.version)?;
    info!(
        templates = endpoints.len(),
        skipped = endpoints.skipped().count(),
        "Extracted endpoint templates"
    );

    let sorted = sort_templates(endpoints.templates().cloned());
    let specs: Vec<_> = classify(&sorted)
        .into_iter()
        .map(|spec| endpoints.annotate(spec))
        .collect();
    info!(
        accessors = specs.len(),
        collapsed = specs.iter().filter(|s| s.is_collapsed()).count(),
        "Classified templates"
    );

    resolve_collisions(specs, config.collision_policy)
}

/// Reads the configured preamble, if any.
pub fn read_preamble(config: &GeneratorConfig) -> Result<Option<String>, GeneratorError> {
    config
        .preamble
        .as_ref()
        .map(|path| {
            fs::read_to_string(path).map_err(|source| GeneratorError::ReadError {
                path: path.display().to_string(),
                source,
            })
        })
        .transpose()
}

/// Renders the accessors file for `docs` without writing it.
pub fn generate(docs: &ApiDocs, config: &GeneratorConfig) -> Result<String, GeneratorError> {
    let preamble = read_preamble(config)?;
    let accessors = build_accessors(docs, config)?;
    render(config.docs_url(), &accessors, preamble.as_deref())
}

/// Runs a full generation: load, build, render and write (or print).
///
/// ## Returns
///
/// The generated file contents.
pub async fn run(config: &GeneratorConfig) -> Result<String, GeneratorError> {
    let preamble = read_preamble(config)?;
    let docs = load_docs(&config.docs, config.timeout).await?;
    let accessors = build_accessors(&docs, config)?;

    generate_and_write(
        config.docs_url(),
        &accessors,
        preamble.as_deref(),
        &config.output,
        config.dry_run,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionPolicy;
    use crate::fetch::parse_docs;
    use std::path::PathBuf;

    const DOCS_JSON: &str = r#"{
        "docs": {
            "resources": {
                "users": {
                    "methods": [
                        { "apis": [
                            { "api_url": "/v2/users", "http_method": "GET" },
                            { "api_url": "/v2/users/:id", "http_method": "GET" },
                            { "api_url": "/v2/users/:id", "http_method": "PATCH" }
                        ] }
                    ]
                },
                "campus": {
                    "methods": [
                        { "apis": [
                            { "api_url": "/v2/campus/:campus_id/users", "http_method": "GET" },
                            { "api_url": "/v2/campus_users", "http_method": "GET" }
                        ] }
                    ]
                },
                "project_sessions": {
                    "methods": [
                        { "apis": [
                            { "api_url": "/v2/projects/:project_id/project_sessions", "http_method": "GET" },
                            { "api_url": "/v2/projects/:project_id/project_sessions/:id", "http_method": "GET" }
                        ] }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn build_accessors_annotates_methods() {
        let docs = parse_docs(DOCS_JSON).unwrap();
        let accessors = build_accessors(&docs, &GeneratorConfig::default()).unwrap();

        let users = accessors.iter().find(|a| a.ident == "Users").unwrap();
        assert!(users.spec.is_collapsed());
        assert_eq!(users.spec.methods.len(), 2);
        assert!(users.spec.resources.contains("users"));
    }

    #[test]
    fn build_accessors_applies_collision_policy() {
        let docs = parse_docs(DOCS_JSON).unwrap();

        let last_wins = build_accessors(&docs, &GeneratorConfig::default()).unwrap();
        let idents: Vec<&str> = last_wins.iter().map(|a| a.ident.as_str()).collect();
        assert!(idents.contains(&"CampusUsers"));
        assert!(idents.contains(&"Campus_users"));
        assert_eq!(idents.iter().filter(|i| i.starts_with("ProjectsProject_sessions")).count(), 1);

        let config = GeneratorConfig {
            collision_policy: CollisionPolicy::Reject,
            ..Default::default()
        };
        assert!(matches!(
            build_accessors(&docs, &config),
            Err(GeneratorError::NameCollision { .. })
        ));
    }

    #[test]
    fn generate_is_deterministic() {
        let docs = parse_docs(DOCS_JSON).unwrap();
        let config = GeneratorConfig::default();
        assert_eq!(generate(&docs, &config).unwrap(), generate(&docs, &config).unwrap());
    }

    #[test]
    fn missing_preamble_is_a_read_error() {
        let config = GeneratorConfig {
            preamble: Some(PathBuf::from("/nonexistent/preamble.rs")),
            ..Default::default()
        };
        assert!(matches!(
            read_preamble(&config),
            Err(GeneratorError::ReadError { .. })
        ));
    }
}
