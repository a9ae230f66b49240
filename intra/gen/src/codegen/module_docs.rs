//! Module documentation generation for the accessors file.
//!
//! This module provides the [`ModuleDocBuilder`] struct for generating the
//! module-level documentation that opens the generated file. The
//! documentation includes an introduction, authentication details, an
//! accessor summary, and a usage example.

use proc_macro2::TokenStream;
use quote::quote;

use crate::collision::ResolvedAccessor;

/// Builds module-level documentation for the generated accessors.
///
/// The builder generates documentation sections including:
/// - Introduction paragraph linking the scraped documentation
/// - Authentication section explaining how to obtain a client
/// - Accessors section summarizing collapsed and fixed-arity accessors
/// - Example section calling the first accessor
///
/// ## Examples
///
/// ```ignore
/// use intra_gen::codegen::ModuleDocBuilder;
///
/// let accessors: Vec<ResolvedAccessor> = /* ... */;
/// let builder = ModuleDocBuilder::new("https://api.intra.42.fr/apidoc", &accessors);
/// let doc_tokens = builder.build();
/// ```
pub struct ModuleDocBuilder<'a> {
    docs_url: &'a str,
    accessors: &'a [ResolvedAccessor],
}

impl<'a> ModuleDocBuilder<'a> {
    /// Creates a new module documentation builder.
    pub fn new(docs_url: &'a str, accessors: &'a [ResolvedAccessor]) -> Self {
        Self {
            docs_url,
            accessors,
        }
    }

    /// Builds the complete module documentation as a token stream.
    ///
    /// The generated tokens include `#![doc = "..."]` attributes that
    /// form the module-level documentation.
    pub fn build(&self) -> TokenStream {
        let intro = self.intro_paragraph();
        let auth_section = self.auth_section();
        let accessors_section = self.accessors_section();
        let example_section = self.example_section();

        quote! {
            #![doc = #intro]
            //!
            #![doc = #auth_section]
            //!
            #![doc = #accessors_section]
            //!
            #![doc = #example_section]
        }
    }

    fn intro_paragraph(&self) -> String {
        format!(
            " Resource accessors for the 42 intra API, generated from [its documentation]({}).\n\n \
             Each accessor only builds a request path. Collection endpoints and their \
             single-item form share one accessor taking an optional identifier.",
            self.docs_url
        )
    }

    fn auth_section(&self) -> String {
        " ## Authentication\n\n \
         Accessors are implemented for `intra_client::IntraClient`, which authenticates \
         with an OAuth2 bearer token. `Grant::from_env()` reads the application \
         credentials from `UID42` and `SECRET42`."
            .to_string()
    }

    /// Summarizes the generated accessors.
    ///
    /// Collapsed accessors are listed with both paths they cover.
    fn accessors_section(&self) -> String {
        if self.accessors.is_empty() {
            return " ## Accessors\n\n No accessors generated.".to_string();
        }

        let collapsed: Vec<&ResolvedAccessor> = self
            .accessors
            .iter()
            .filter(|a| a.spec.is_collapsed())
            .collect();
        let fixed = self.accessors.len() - collapsed.len();

        let mut lines = vec![
            " ## Accessors".to_string(),
            String::new(),
            format!(
                " {} accessors: {} collapsed collection/item pairs and {} fixed-arity paths.",
                self.accessors.len(),
                collapsed.len(),
                fixed
            ),
        ];

        if !collapsed.is_empty() {
            lines.push(String::new());
            lines.push(" **Collapsed**:".to_string());
            for accessor in collapsed {
                if let Some(identifier) = &accessor.spec.identifier {
                    lines.push(format!(
                        " - `{}` - `{}` and `{}`",
                        accessor.ident, accessor.spec.template, identifier.item
                    ));
                }
            }
        }
        lines.join("\n")
    }

    /// Creates a usage example from the first collapsed accessor, or the
    /// first accessor without parameters, or the first accessor.
    fn example_section(&self) -> String {
        let accessor = self
            .accessors
            .iter()
            .find(|a| a.spec.is_collapsed())
            .or_else(|| self.accessors.iter().find(|a| a.spec.params.is_empty()))
            .or_else(|| self.accessors.first());

        let Some(accessor) = accessor else {
            return " ## Example\n\n No accessors available for example.".to_string();
        };

        let args = if accessor.spec.is_collapsed() {
            "Some(\"42\"), ".to_string()
        } else {
            accessor.spec.params.iter().map(|_| "\"42\", ").collect()
        };

        format!(
            r#" ## Example

 ```ignore
 use intra_client::{{Grant, IntraClient, QueryOptions}};

 #[tokio::main]
 async fn main() -> Result<(), intra_client::ApiError> {{
     let client = IntraClient::connect(Grant::from_env()?).await?;
     let mut handle = client.{}({}QueryOptions::default());
     let page: serde_json::Value = handle.get().await?;
     println!("{{page:?}}");
     Ok(())
 }}
 ```"#,
            accessor.ident, args
        )
    }
}
