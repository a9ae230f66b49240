//! Convenient re-exports for working with intra definitions.
//!
//! ## Examples
//!
//! ```
//! use intra_define::prelude::*;
//!
//! let template = PathTemplate::parse("/v2/users/:id", "v2").unwrap();
//! assert_eq!(template.segments().last(), Some(&Segment::Param("id".to_string())));
//! ```

pub use crate::accessor::{AccessorSpec, IdentifierParam};
pub use crate::docs::{ApiCall, ApiDocs, DocsBody, MethodGroup, Resource};
pub use crate::template::{PathTemplate, Segment, TemplateError};
pub use crate::types::RestMethod;
