//! REST path templates.
//!
//! Templates use `:name` tokens for variable segments, e.g.
//! `/v2/campus/:campus_id/users`. Every template begins with the API version
//! segment (`v2`).

use std::fmt;

use thiserror::Error;

/// Errors raised while parsing a path template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template has no segments at all.
    #[error("Empty path template")]
    Empty,

    /// The first segment is not the expected API version.
    #[error("Path template '{template}' does not start with '/{expected}'")]
    MissingVersionPrefix {
        /// The offending template.
        template: String,
        /// The version segment every template must begin with.
        expected: String,
    },

    /// A `:` token with no name after it.
    #[error("Path template '{template}' has a parameter with no name")]
    EmptyParamName {
        /// The offending template.
        template: String,
    },

    /// Optional-group syntax like `graph(/on/:field)` has no fixed-arity shape.
    #[error("Path template '{template}' uses optional groups")]
    OptionalGroup {
        /// The offending template.
        template: String,
    },
}

/// One `/`-separated piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// A literal path segment such as `users`.
    Fixed(String),
    /// A `:name` parameter; stores the name without the colon.
    Param(String),
}

impl Segment {
    /// Returns the parameter name if this is a parameter segment.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Param(name) => Some(name),
            Self::Fixed(_) => None,
        }
    }

    /// Returns the literal text if this is a fixed segment.
    pub fn fixed(&self) -> Option<&str> {
        match self {
            Self::Fixed(text) => Some(text),
            Self::Param(_) => None,
        }
    }
}

/// A parsed REST path template.
///
/// Identity is the raw string: two templates are equal iff the documentation
/// spelled them identically.
///
/// ## Examples
///
/// ```
/// use intra_define::{PathTemplate, Segment};
///
/// let template = PathTemplate::parse("/v2/users/:id", "v2").unwrap();
///
/// assert_eq!(template.raw(), "/v2/users/:id");
/// assert_eq!(template.trailing_param(), Some("id"));
/// assert_eq!(template.prefix_path(), "/v2/users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template, requiring `version` as its first segment.
    ///
    /// Empty segments (from doubled or trailing slashes) are ignored; the raw
    /// string is kept as-is.
    ///
    /// ## Errors
    ///
    /// Returns a [`TemplateError`] when the template is empty, uses optional
    /// groups, has an unnamed parameter, or starts with another version.
    pub fn parse(raw: &str, version: &str) -> Result<Self, TemplateError> {
        if raw.contains('(') || raw.contains(')') {
            return Err(TemplateError::OptionalGroup {
                template: raw.to_string(),
            });
        }

        let mut segments = Vec::new();
        for piece in raw.split('/').filter(|piece| !piece.is_empty()) {
            match piece.strip_prefix(':') {
                Some("") => {
                    return Err(TemplateError::EmptyParamName {
                        template: raw.to_string(),
                    });
                }
                Some(name) => segments.push(Segment::Param(name.to_string())),
                None => segments.push(Segment::Fixed(piece.to_string())),
            }
        }

        match segments.first() {
            None => Err(TemplateError::Empty),
            Some(Segment::Fixed(first)) if first == version => Ok(Self {
                raw: raw.to_string(),
                segments,
            }),
            Some(_) => Err(TemplateError::MissingVersionPrefix {
                template: raw.to_string(),
                expected: version.to_string(),
            }),
        }
    }

    /// Returns the template exactly as documented.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns all segments, version segment included.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns parameter names in left-to-right order.
    pub fn params(&self) -> Vec<&str> {
        self.segments.iter().filter_map(Segment::param).collect()
    }

    /// Returns `true` if the template has at least one parameter.
    pub fn has_params(&self) -> bool {
        self.segments.iter().any(|s| s.param().is_some())
    }

    /// Returns the segments before the first parameter (all of them if none).
    pub fn fixed_prefix(&self) -> &[Segment] {
        let end = self
            .segments
            .iter()
            .position(|s| s.param().is_some())
            .unwrap_or(self.segments.len());
        &self.segments[..end]
    }

    /// Renders [`fixed_prefix`](Self::fixed_prefix) as a path.
    pub fn prefix_path(&self) -> String {
        join_path(self.fixed_prefix().iter().map(|s| match s {
            Segment::Fixed(text) | Segment::Param(text) => text.as_str(),
        }))
    }

    /// Number of segments that follow the fixed prefix.
    pub fn depth_after_prefix(&self) -> usize {
        self.segments.len() - self.fixed_prefix().len()
    }

    /// Returns the parameter name when the template is a fixed prefix followed
    /// by exactly one parameter and nothing after it.
    ///
    /// ```
    /// use intra_define::PathTemplate;
    ///
    /// let item = PathTemplate::parse("/v2/users/:id", "v2").unwrap();
    /// let nested = PathTemplate::parse("/v2/users/:id/events", "v2").unwrap();
    ///
    /// assert_eq!(item.trailing_param(), Some("id"));
    /// assert_eq!(nested.trailing_param(), None);
    /// ```
    pub fn trailing_param(&self) -> Option<&str> {
        if self.depth_after_prefix() != 1 {
            return None;
        }
        self.segments.last().and_then(Segment::param)
    }

    /// Returns `true` if `self` is `collection` plus one trailing parameter.
    ///
    /// `collection` must itself be parameter-free.
    pub fn is_item_of(&self, collection: &PathTemplate) -> bool {
        !collection.has_params()
            && self.trailing_param().is_some()
            && self.fixed_prefix() == collection.segments()
    }

    /// Iterates the literal segments that follow the version segment.
    pub fn resource_segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().skip(1).filter_map(Segment::fixed)
    }

    /// Builds a format string with a `{}` placeholder per parameter.
    ///
    /// ```
    /// use intra_define::PathTemplate;
    ///
    /// let template = PathTemplate::parse("/v2/a/:a_id/b/:id", "v2").unwrap();
    /// assert_eq!(template.format_string(), "/v2/a/{}/b/{}");
    /// ```
    pub fn format_string(&self) -> String {
        join_path(self.segments.iter().map(|s| match s {
            Segment::Fixed(text) => text.as_str(),
            Segment::Param(_) => "{}",
        }))
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn join_path<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let mut path = String::new();
    for part in parts {
        path.push('/');
        path.push_str(part);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> PathTemplate {
        PathTemplate::parse(raw, "v2").unwrap()
    }

    #[test]
    fn parses_fixed_and_param_segments() {
        let template = parse("/v2/campus/:campus_id/users");
        assert_eq!(
            template.segments(),
            &[
                Segment::Fixed("v2".to_string()),
                Segment::Fixed("campus".to_string()),
                Segment::Param("campus_id".to_string()),
                Segment::Fixed("users".to_string()),
            ]
        );
    }

    #[test]
    fn ignores_empty_segments_but_keeps_raw() {
        let template = parse("/v2/users/");
        assert_eq!(template.raw(), "/v2/users/");
        assert_eq!(template.segments().len(), 2);
        assert_eq!(template.prefix_path(), "/v2/users");
    }

    #[test]
    fn rejects_wrong_version() {
        assert_eq!(
            PathTemplate::parse("/v1/users", "v2"),
            Err(TemplateError::MissingVersionPrefix {
                template: "/v1/users".to_string(),
                expected: "v2".to_string(),
            })
        );
        assert!(matches!(
            PathTemplate::parse("/:id/users", "v2"),
            Err(TemplateError::MissingVersionPrefix { .. })
        ));
    }

    #[test]
    fn rejects_empty_and_unnamed() {
        assert_eq!(PathTemplate::parse("/", "v2"), Err(TemplateError::Empty));
        assert!(matches!(
            PathTemplate::parse("/v2/users/:", "v2"),
            Err(TemplateError::EmptyParamName { .. })
        ));
    }

    #[test]
    fn rejects_optional_groups() {
        assert!(matches!(
            PathTemplate::parse("/v2/events/graph(/on/:field(/by/:interval))", "v2"),
            Err(TemplateError::OptionalGroup { .. })
        ));
    }

    #[test]
    fn fixed_prefix_stops_at_first_param() {
        let template = parse("/v2/a/:a_id/b/:id");
        assert_eq!(template.prefix_path(), "/v2/a");
        assert_eq!(template.depth_after_prefix(), 3);
        assert_eq!(template.params(), vec!["a_id", "id"]);

        let bare = parse("/v2/users/stats");
        assert_eq!(bare.prefix_path(), "/v2/users/stats");
        assert_eq!(bare.depth_after_prefix(), 0);
        assert!(!bare.has_params());
    }

    #[test]
    fn trailing_param_requires_single_last_param() {
        assert_eq!(parse("/v2/users/:id").trailing_param(), Some("id"));
        assert_eq!(parse("/v2/users").trailing_param(), None);
        assert_eq!(parse("/v2/users/:id/events").trailing_param(), None);
        assert_eq!(parse("/v2/a/:a_id/b/:id").trailing_param(), None);
    }

    #[test]
    fn is_item_of_matches_exact_collection() {
        let collection = parse("/v2/users");
        assert!(parse("/v2/users/:id").is_item_of(&collection));
        assert!(!parse("/v2/users/:id/events").is_item_of(&collection));
        assert!(!parse("/v2/users_x/:id").is_item_of(&collection));
        assert!(!parse("/v2/users/me/:id").is_item_of(&collection));
    }

    #[test]
    fn is_item_of_rejects_parametrized_collection() {
        let nested = parse("/v2/a/:a_id/b");
        assert!(!parse("/v2/a/:a_id/b/:id").is_item_of(&nested));
    }

    #[test]
    fn resource_segments_skip_version_and_params() {
        let template = parse("/v2/campus/:campus_id/users");
        let segments: Vec<_> = template.resource_segments().collect();
        assert_eq!(segments, vec!["campus", "users"]);
    }

    #[test]
    fn display_is_raw() {
        assert_eq!(parse("/v2/users/:id").to_string(), "/v2/users/:id");
    }
}
