//! Accessor method generation.
//!
//! Renders one [`ResolvedAccessor`] as a provided method of the generated
//! `Accessors` trait. The method only builds the concrete path and hands it,
//! together with the caller's query options, to `IntraClient::endpoint`; it
//! never performs a request itself.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use intra_define::{AccessorSpec, PathTemplate, Segment};

use crate::collision::ResolvedAccessor;
use crate::naming::param_ident;

/// Base URL of the per-resource documentation pages.
const APIDOC_PAGE_BASE: &str = "https://api.intra.42.fr/apidoc/2.0";

/// Generates the trait method for one accessor.
///
/// ## Examples
///
/// For the collapsed `/v2/users` + `/v2/users/:id` pair:
///
/// ```ignore
/// /// `/v2/users` or `/v2/users/:id`.
/// fn Users(&self, id: Option<&str>, options: QueryOptions) -> RequestHandle<'_> {
///     let path = match id {
///         Some(id) => format!("/v2/users/{}", id),
///         None => "/v2/users".to_string(),
///     };
///     self.client().endpoint(path, options)
/// }
/// ```
///
/// For `/v2/campus/:campus_id/users`:
///
/// ```ignore
/// fn CampusUsers(&self, campus_id: &str, options: QueryOptions) -> RequestHandle<'_> {
///     self.client().endpoint(format!("/v2/campus/{}/users", campus_id), options)
/// }
/// ```
pub fn generate_accessor(accessor: &ResolvedAccessor) -> TokenStream {
    let spec = &accessor.spec;
    let method = format_ident!("{}", accessor.ident);
    let docs = accessor_docs(spec);

    match &spec.identifier {
        Some(identifier) => {
            let id = format_ident!("{}", param_ident(&identifier.name));
            let item_path = format_literal(&identifier.item);
            let collection_path = path_literal(&spec.template);

            quote! {
                #(#[doc = #docs])*
                fn #method(&self, #id: Option<&str>, options: QueryOptions) -> RequestHandle<'_> {
                    let path = match #id {
                        Some(#id) => format!(#item_path, #id),
                        None => #collection_path.to_string(),
                    };
                    self.client().endpoint(path, options)
                }
            }
        }
        None if spec.params.is_empty() => {
            let path = path_literal(&spec.template);

            quote! {
                #(#[doc = #docs])*
                fn #method(&self, options: QueryOptions) -> RequestHandle<'_> {
                    self.client().endpoint(#path, options)
                }
            }
        }
        None => {
            let params = unique_param_idents(&spec.params);
            let path = format_literal(&spec.template);

            quote! {
                #(#[doc = #docs])*
                fn #method(&self, #(#params: &str,)* options: QueryOptions) -> RequestHandle<'_> {
                    self.client().endpoint(format!(#path, #(#params),*), options)
                }
            }
        }
    }
}

/// Builds the doc comment lines for an accessor.
fn accessor_docs(spec: &AccessorSpec) -> Vec<String> {
    let mut lines = Vec::new();

    let shape = match &spec.identifier {
        Some(identifier) => format!(" `{}` or `{}`.", spec.template, identifier.item),
        None => format!(" `{}`.", spec.template),
    };
    lines.push(shape);

    if !spec.methods.is_empty() {
        let methods: Vec<String> = spec.methods.iter().map(|m| format!("`{m}`")).collect();
        lines.push(String::new());
        lines.push(format!(" Documented methods: {}.", methods.join(", ")));
    }

    if let Some(page) = doc_page(spec) {
        lines.push(String::new());
        lines.push(format!(" More details: <{page}>"));
    }

    lines
}

/// Returns the documentation page for the accessor's resource.
///
/// Uses the resource the documentation listed the template under, falling
/// back to the first path segment after the version.
fn doc_page(spec: &AccessorSpec) -> Option<String> {
    let resource = spec
        .resources
        .iter()
        .next()
        .map(String::as_str)
        .or_else(|| spec.template.resource_segments().next())?;
    Some(format!("{APIDOC_PAGE_BASE}/{resource}.html"))
}

/// Renders a parameter-free template as a plain path.
fn path_literal(template: &PathTemplate) -> String {
    template.format_string()
}

/// Renders a template as a `format!` literal with one `{}` per parameter.
///
/// Braces in fixed segments are escaped.
fn format_literal(template: &PathTemplate) -> String {
    let mut literal = String::new();
    for segment in template.segments() {
        literal.push('/');
        match segment {
            Segment::Fixed(text) => literal.push_str(&text.replace('{', "{{").replace('}', "}}")),
            Segment::Param(_) => literal.push_str("{}"),
        }
    }
    literal
}

/// Turns parameter names into identifiers, suffixing repeats with `_2`, `_3`, ...
fn unique_param_idents(params: &[String]) -> Vec<Ident> {
    let mut used: Vec<String> = Vec::with_capacity(params.len());
    for param in params {
        let base = param_ident(param);
        let mut ident = base.clone();
        let mut counter = 2;
        while used.contains(&ident) {
            ident = format!("{base}_{counter}");
            counter += 1;
        }
        used.push(ident);
    }
    used.iter().map(|ident| format_ident!("{}", ident)).collect()
}
