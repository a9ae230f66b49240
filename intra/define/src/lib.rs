//! Intra Definition Library
//!
//! This crate provides the data model shared by the `intra-gen` code
//! generator: the shape of the API documentation JSON, parsed REST path
//! templates, and the accessor specifications the generator emits code for.
//!
//! ## Core Types
//!
//! - [`ApiDocs`] - The documentation JSON (`docs -> resources -> methods -> apis`)
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`PathTemplate`] - A parsed REST path such as `/v2/users/:id`
//! - [`Segment`] - One fixed or parameter segment of a path template
//! - [`AccessorSpec`] - One generated accessor: name, path shape, parameters
//!
//! ## Examples
//!
//! ```
//! use intra_define::PathTemplate;
//!
//! let template = PathTemplate::parse("/v2/campus/:campus_id/users", "v2").unwrap();
//!
//! assert_eq!(template.params(), vec!["campus_id"]);
//! assert_eq!(template.format_string(), "/v2/campus/{}/users");
//! ```

pub mod accessor;
pub mod docs;
pub mod prelude;
pub mod template;
pub mod types;

// Re-export main types at crate root
pub use accessor::{AccessorSpec, IdentifierParam};
pub use docs::{ApiCall, ApiDocs, DocsBody, MethodGroup, Resource};
pub use template::{PathTemplate, Segment, TemplateError};
pub use types::RestMethod;
