//! Accessor name collisions.
//!
//! Distinct templates can derive the same accessor name: `/v2/campusUsers`
//! and `/v2/campus/:campus_id/users` are both `CampusUsers`, and an
//! uncollapsed `/v2/users/:login` sits next to the collapsed `Users`. Rust
//! cannot hold two methods with one name, so every collision is reported and
//! resolved by the configured [`CollisionPolicy`].
//!
//! Accessors are ranked in emission order: every collapsed accessor first,
//! then every fixed-arity one, each group in classification order. "Later"
//! in [`CollisionPolicy::LastWins`] and the suffix order of
//! [`CollisionPolicy::Disambiguate`] both follow that rank.

use std::collections::{BTreeMap, HashSet};

use intra_define::AccessorSpec;
use tracing::warn;

use crate::config::CollisionPolicy;
use crate::errors::GeneratorError;
use crate::naming::method_ident;

/// An accessor spec paired with the method identifier it will be emitted as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccessor {
    pub spec: AccessorSpec,
    pub ident: String,
}

/// An accessor name derived by more than one spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    /// Raw templates of every colliding spec, in classification order.
    pub templates: Vec<String>,
}

/// Finds every accessor name shared by several specs.
///
/// Names are compared in their emitted identifier form, which only differs
/// from the name for characters Rust identifiers cannot hold. Collisions are
/// returned in name order; the templates inside one collision keep
/// classification order.
pub fn detect_collisions(specs: &[AccessorSpec]) -> Vec<Collision> {
    let mut by_name: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for spec in specs {
        by_name
            .entry(method_ident(&spec.name))
            .or_default()
            .push(spec.template.raw().to_string());
    }

    by_name
        .into_iter()
        .filter(|(_, templates)| templates.len() > 1)
        .map(|(name, templates)| Collision { name, templates })
        .collect()
}

/// Assigns a method identifier to every spec according to `policy`.
///
/// Surviving accessors keep classification order.
///
/// ## Errors
///
/// Returns [`GeneratorError::NameCollision`] for the first collision when
/// `policy` is [`CollisionPolicy::Reject`].
pub fn resolve_collisions(
    specs: Vec<AccessorSpec>,
    policy: CollisionPolicy,
) -> Result<Vec<ResolvedAccessor>, GeneratorError> {
    let collisions = detect_collisions(&specs);
    for collision in &collisions {
        warn!(
            name = %collision.name,
            templates = %collision.templates.join(", "),
            %policy,
            "Accessor name collision"
        );
    }

    if policy == CollisionPolicy::Reject
        && let Some(collision) = collisions.into_iter().next()
    {
        return Err(GeneratorError::NameCollision {
            name: collision.name,
            templates: collision.templates,
        });
    }

    let resolved = specs
        .into_iter()
        .map(|spec| ResolvedAccessor {
            ident: method_ident(&spec.name),
            spec,
        })
        .collect();

    Ok(match policy {
        CollisionPolicy::LastWins => keep_last(resolved),
        CollisionPolicy::Disambiguate => disambiguate(resolved),
        CollisionPolicy::Reject => resolved,
    })
}

/// Indices of `resolved` in emission order.
fn emission_order(resolved: &[ResolvedAccessor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..resolved.len()).collect();
    order.sort_by_key(|&index| !resolved[index].spec.is_collapsed());
    order
}

/// Drops every accessor that a later one with the same identifier replaces.
fn keep_last(resolved: Vec<ResolvedAccessor>) -> Vec<ResolvedAccessor> {
    let mut last: BTreeMap<&str, usize> = BTreeMap::new();
    for index in emission_order(&resolved) {
        last.insert(resolved[index].ident.as_str(), index);
    }
    let kept: HashSet<usize> = last.into_values().collect();

    resolved
        .into_iter()
        .enumerate()
        .filter(|(index, _)| kept.contains(index))
        .map(|(_, accessor)| accessor)
        .collect()
}

/// Suffixes repeated identifiers with `_2`, `_3`, ... in emission order,
/// skipping any suffix that is already taken.
fn disambiguate(mut resolved: Vec<ResolvedAccessor>) -> Vec<ResolvedAccessor> {
    let mut taken: HashSet<String> = resolved.iter().map(|a| a.ident.clone()).collect();
    let mut seen: HashSet<String> = HashSet::new();

    for index in emission_order(&resolved) {
        let accessor = &mut resolved[index];
        if seen.insert(accessor.ident.clone()) {
            continue;
        }
        let mut counter = 2;
        let ident = loop {
            let candidate = format!("{}_{}", accessor.ident, counter);
            if !taken.contains(&candidate) {
                break candidate;
            }
            counter += 1;
        };
        taken.insert(ident.clone());
        seen.insert(ident.clone());
        accessor.ident = ident;
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::sort::sort_templates;
    use intra_define::PathTemplate;

    fn specs(raw: &[&str]) -> Vec<AccessorSpec> {
        let templates = raw.iter().map(|r| PathTemplate::parse(r, "v2").unwrap());
        classify(&sort_templates(templates))
    }

    fn idents(resolved: &[ResolvedAccessor]) -> Vec<(&str, &str)> {
        resolved
            .iter()
            .map(|a| (a.ident.as_str(), a.spec.template.raw()))
            .collect()
    }

    #[test]
    fn no_collisions_keeps_everything() {
        let specs = specs(&["/v2/users", "/v2/users/:id", "/v2/campus"]);
        assert!(detect_collisions(&specs).is_empty());
        let resolved = resolve_collisions(specs, CollisionPolicy::Reject).unwrap();
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn detects_derived_name_collision() {
        let specs = specs(&["/v2/campusUsers", "/v2/campus/:campus_id/users"]);
        let collisions = detect_collisions(&specs);
        assert_eq!(
            collisions,
            vec![Collision {
                name: "CampusUsers".to_string(),
                templates: vec![
                    "/v2/campus/:campus_id/users".to_string(),
                    "/v2/campusUsers".to_string(),
                ],
            }]
        );
    }

    #[test]
    fn underscored_segments_keep_their_own_accessor() {
        let specs = specs(&[
            "/v2/campus_users",
            "/v2/campus_users/:id",
            "/v2/campus/:campus_id/users",
            "/v2/projects_users",
            "/v2/projects/:project_id/users",
        ]);
        assert!(detect_collisions(&specs).is_empty());

        let resolved = resolve_collisions(specs, CollisionPolicy::LastWins).unwrap();
        assert_eq!(
            idents(&resolved),
            vec![
                ("CampusUsers", "/v2/campus/:campus_id/users"),
                ("Campus_users", "/v2/campus_users"),
                ("ProjectsUsers", "/v2/projects/:project_id/users"),
                ("Projects_users", "/v2/projects_users"),
            ]
        );
    }

    #[test]
    fn last_wins_prefers_fixed_arity_over_collapsed() {
        let specs = specs(&["/v2/campus/:campus_id/users", "/v2/campus/users", "/v2/campus/users/:id"]);
        let resolved = resolve_collisions(specs, CollisionPolicy::LastWins).unwrap();
        assert_eq!(idents(&resolved), vec![("CampusUsers", "/v2/campus/:campus_id/users")]);
    }

    #[test]
    fn last_wins_keeps_later_spec_within_a_group() {
        let specs = specs(&[
            "/v2/projects/:project_id/project_sessions",
            "/v2/projects/:project_id/project_sessions/:id",
        ]);
        let resolved = resolve_collisions(specs, CollisionPolicy::LastWins).unwrap();
        assert_eq!(
            idents(&resolved),
            vec![("ProjectsProject_sessions", "/v2/projects/:project_id/project_sessions/:id")]
        );
    }

    #[test]
    fn disambiguate_suffixes_in_emission_order() {
        let specs = specs(&[
            "/v2/campus/:campus_id/users",
            "/v2/campus/users",
            "/v2/campus/users/:id",
            "/v2/campusUsers",
            "/v2/campusUsers_2",
        ]);
        let resolved = resolve_collisions(specs, CollisionPolicy::Disambiguate).unwrap();
        assert_eq!(
            idents(&resolved),
            vec![
                ("CampusUsers_3", "/v2/campus/:campus_id/users"),
                ("CampusUsers", "/v2/campus/users"),
                ("CampusUsers_4", "/v2/campusUsers"),
                ("CampusUsers_2", "/v2/campusUsers_2"),
            ]
        );
    }

    #[test]
    fn reject_fails_the_run() {
        let specs = specs(&["/v2/campusUsers", "/v2/campus/:campus_id/users"]);
        let result = resolve_collisions(specs, CollisionPolicy::Reject);
        match result {
            Err(GeneratorError::NameCollision { name, templates }) => {
                assert_eq!(name, "CampusUsers");
                assert_eq!(templates.len(), 2);
            }
            other => panic!("Expected NameCollision, got {:?}", other),
        }
    }

    #[test]
    #[tracing_test::traced_test]
    fn collisions_are_logged() {
        let specs = specs(&["/v2/campusUsers", "/v2/campus/:campus_id/users"]);
        resolve_collisions(specs, CollisionPolicy::LastWins).unwrap();
        assert!(logs_contain("Accessor name collision"));
        assert!(logs_contain("CampusUsers"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let raw = ["/v2/campusUsers", "/v2/campus/:campus_id/users", "/v2/users", "/v2/users/:id"];
        let first = resolve_collisions(specs(&raw), CollisionPolicy::Disambiguate).unwrap();
        let second = resolve_collisions(specs(&raw), CollisionPolicy::Disambiguate).unwrap();
        assert_eq!(first, second);
    }
}
