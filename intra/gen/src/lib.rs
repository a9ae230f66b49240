//! Intra accessor generator library.
//!
//! This crate reads the JSON self-description of the 42 intra v2 API and
//! generates one Rust accessor per resource path. A collection path and its
//! single-item form (`/v2/users`, `/v2/users/:id`) collapse into one accessor
//! taking an optional identifier; every other path becomes an accessor with
//! one required argument per `:param` token.
//!
//! ## Modules
//!
//! - [`fetch`] - Documentation download and parsing
//! - [`extract`] - Flattening the documentation into distinct templates
//! - [`sort`] - Ordering templates so collection/item pairs are adjacent
//! - [`classify`] - Collapsing adjacent pairs into accessor specs
//! - [`naming`] - Accessor names and Rust identifiers
//! - [`collision`] - Detecting and resolving name collisions
//! - [`codegen`] - Token generation for accessors and module docs
//! - [`output`] - Final assembly, validation, and file writing
//! - [`pipeline`] - The stages wired together
//! - [`config`] - Run configuration
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use intra_gen::config::GeneratorConfig;
//! use intra_gen::fetch::read_docs;
//! use intra_gen::pipeline::generate;
//!
//! let docs = read_docs("apidoc.json".as_ref()).unwrap();
//! let code = generate(&docs, &GeneratorConfig::default()).unwrap();
//! println!("{}", code);
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! use intra_client::{IntraClient, QueryOptions, RequestHandle};
//!
//! #[allow(non_snake_case)]
//! pub trait Accessors {
//!     fn client(&self) -> &IntraClient;
//!
//!     fn Users(&self, id: Option<&str>, options: QueryOptions) -> RequestHandle<'_> { ... }
//!     fn CampusUsers(&self, campus_id: &str, options: QueryOptions) -> RequestHandle<'_> { ... }
//!     fn Campus_users(&self, id: Option<&str>, options: QueryOptions) -> RequestHandle<'_> { ... }
//! }
//!
//! impl Accessors for IntraClient { ... }
//! ```

pub mod classify;
pub mod codegen;
pub mod collision;
pub mod config;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod sort;
