//! Collapsing classifier.
//!
//! Walks the sorted templates and merges every collection template that is
//! immediately followed by its single-item form (`/v2/users` then
//! `/v2/users/:id`) into one accessor with an optional identifier. Everything
//! else becomes a fixed-arity accessor taking one required argument per
//! `:param` token.
//!
//! A pair only merges when the first template has no parameters and the
//! second is exactly the first plus one trailing parameter. `/v2/x` followed
//! by `/v2/x/:id/sub` is a nested resource and stays two accessors, and
//! multi-parameter paths are never collapsed.

use intra_define::{AccessorSpec, PathTemplate};
use tracing::debug;

use crate::naming::accessor_name;

/// Classifies sorted templates into accessor specs.
///
/// The input must be ordered by [`sort_templates`](crate::sort::sort_templates);
/// the classifier only compares neighbours. Every input template ends up in
/// exactly one returned spec.
///
/// ## Examples
///
/// ```
/// use intra_define::PathTemplate;
/// use intra_gen::classify::classify;
///
/// let sorted: Vec<_> = ["/v2/users", "/v2/users/:id", "/v2/users/:id/events"]
///     .into_iter()
///     .map(|raw| PathTemplate::parse(raw, "v2").unwrap())
///     .collect();
///
/// let specs = classify(&sorted);
///
/// assert_eq!(specs.len(), 2);
/// assert!(specs[0].is_collapsed());
/// assert_eq!(specs[1].params, vec!["id"]);
/// ```
pub fn classify(sorted: &[PathTemplate]) -> Vec<AccessorSpec> {
    let mut specs = Vec::with_capacity(sorted.len());
    let mut cursor = 0;

    while cursor < sorted.len() {
        let current = &sorted[cursor];

        match sorted.get(cursor + 1) {
            Some(next) if next.is_item_of(current) => {
                debug!(collection = %current, item = %next, "Collapsing collection/item pair");
                specs.push(AccessorSpec::collapsed(
                    accessor_name(current),
                    current.clone(),
                    next.clone(),
                ));
                cursor += 2;
            }
            _ => {
                debug!(template = %current, params = current.params().len(), "Fixed-arity accessor");
                specs.push(AccessorSpec::fixed(accessor_name(current), current.clone()));
                cursor += 1;
            }
        }
    }

    specs
}
