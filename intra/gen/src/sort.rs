//! Template ordering.
//!
//! The collapsing classifier only looks at neighbours, so templates must be
//! ordered such that a collection path is immediately followed by its
//! single-item path. The sort key is:
//!
//! 1. the fixed prefix before the first parameter (the whole path if none),
//! 2. the number of segments after that prefix,
//! 3. the template length,
//! 4. the raw template.
//!
//! Within one prefix group the collection (0 trailing segments) comes first,
//! then every one-parameter item form, then deeper nested forms. Comparing
//! segment counts before lengths keeps `/v2/x/:identifier` ahead of
//! `/v2/x/:a/b` even though it is longer. The raw template makes the order
//! total, so repeated runs are byte-identical.

use intra_define::PathTemplate;

/// Returns the templates in classification order.
///
/// ## Examples
///
/// ```
/// use intra_define::PathTemplate;
/// use intra_gen::sort::sort_templates;
///
/// let templates = ["/v2/users/:id", "/v2/campus/:campus_id/users", "/v2/users"]
///     .into_iter()
///     .map(|raw| PathTemplate::parse(raw, "v2").unwrap());
///
/// let sorted: Vec<_> = sort_templates(templates)
///     .iter()
///     .map(|t| t.raw().to_string())
///     .collect();
///
/// assert_eq!(sorted, ["/v2/campus/:campus_id/users", "/v2/users", "/v2/users/:id"]);
/// ```
pub fn sort_templates(templates: impl IntoIterator<Item = PathTemplate>) -> Vec<PathTemplate> {
    let mut sorted: Vec<PathTemplate> = templates.into_iter().collect();
    sorted.sort_by_cached_key(|template| {
        (
            template.prefix_path(),
            template.depth_after_prefix(),
            template.raw().len(),
            template.raw().to_string(),
        )
    });
    sorted
}
