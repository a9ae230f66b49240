//! Accessor specifications.
//!
//! An [`AccessorSpec`] says *what* to generate for one accessor method. How it
//! is rendered into source code is up to the generator backend.

use std::collections::BTreeSet;

use crate::template::PathTemplate;
use crate::types::RestMethod;

/// The optional trailing identifier of a collapsed collection/item pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierParam {
    /// Parameter name taken from the item template (`id` in `/v2/users/:id`).
    pub name: String,
    /// The single-item template that was folded into the accessor.
    pub item: PathTemplate,
}

/// One generated accessor: name, path shape and parameter list.
///
/// ## Examples
///
/// ```
/// use intra_define::{AccessorSpec, PathTemplate};
///
/// let users = PathTemplate::parse("/v2/users", "v2").unwrap();
/// let user = PathTemplate::parse("/v2/users/:id", "v2").unwrap();
///
/// let spec = AccessorSpec::collapsed("Users", users, user);
///
/// assert_eq!(spec.prefix(), "/v2/users");
/// assert_eq!(spec.identifier.as_ref().map(|id| id.name.as_str()), Some("id"));
/// assert!(spec.params.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSpec {
    /// Name derived from the fixed path segments (e.g. `CampusUsers`).
    pub name: String,
    /// The template the accessor formats. For a collapsed pair this is the
    /// collection template.
    pub template: PathTemplate,
    /// Present iff the accessor is a collapsed collection/item pair.
    pub identifier: Option<IdentifierParam>,
    /// Required positional parameters, left to right.
    pub params: Vec<String>,
    /// HTTP methods documented for any of the covered templates.
    pub methods: BTreeSet<RestMethod>,
    /// Documentation resources the covered templates were listed under.
    pub resources: BTreeSet<String>,
}

impl AccessorSpec {
    /// Builds a fixed-arity accessor whose parameters are all of the
    /// template's `:param` tokens.
    pub fn fixed(name: impl Into<String>, template: PathTemplate) -> Self {
        let params = template.params().into_iter().map(String::from).collect();
        Self {
            name: name.into(),
            template,
            identifier: None,
            params,
            methods: BTreeSet::new(),
            resources: BTreeSet::new(),
        }
    }

    /// Builds an accessor that folds `item` into `collection` behind an
    /// optional identifier.
    ///
    /// Callers are expected to have checked `item.is_item_of(&collection)`.
    pub fn collapsed(name: impl Into<String>, collection: PathTemplate, item: PathTemplate) -> Self {
        let identifier = item.trailing_param().map(|param| IdentifierParam {
            name: param.to_string(),
            item: item.clone(),
        });
        Self {
            name: name.into(),
            template: collection,
            identifier,
            params: Vec::new(),
            methods: BTreeSet::new(),
            resources: BTreeSet::new(),
        }
    }

    /// Sets the documented HTTP methods.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = RestMethod>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Sets the documentation resources the accessor belongs to.
    pub fn with_resources(mut self, resources: impl IntoIterator<Item = String>) -> Self {
        self.resources = resources.into_iter().collect();
        self
    }

    /// Returns the fixed path before the first parameter.
    pub fn prefix(&self) -> String {
        self.template.prefix_path()
    }

    /// Returns `true` for a collapsed collection/item accessor.
    pub fn is_collapsed(&self) -> bool {
        self.identifier.is_some()
    }

    /// Returns every documented template this accessor covers.
    pub fn sources(&self) -> Vec<&PathTemplate> {
        let mut sources = vec![&self.template];
        if let Some(identifier) = &self.identifier {
            sources.push(&identifier.item);
        }
        sources
    }
}
