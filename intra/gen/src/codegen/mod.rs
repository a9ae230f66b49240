//! Code generation modules for intra accessors.
//!
//! Each submodule produces one part of the generated accessors file as a
//! `proc_macro2::TokenStream`.
//!
//! ## Submodules
//!
//! - [`accessor`] - Generates one accessor method from a resolved spec
//! - [`accessors_trait`] - Generates the `Accessors` trait and its `IntraClient` impl
//! - [`module_docs`] - Generates the module-level documentation header
//!
//! ## Output Format
//!
//! The token streams are validated with `syn::parse2` and formatted with
//! `prettyplease`. See [`crate::output`] for the assembly and file writing
//! logic.

pub mod accessor;
pub mod accessors_trait;
pub mod module_docs;

pub use accessor::generate_accessor;
pub use accessors_trait::generate_accessors_trait;
pub use module_docs::ModuleDocBuilder;
