//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling the
//! generated pieces into one Rust file, validating it, formatting it, and
//! writing it to disk atomically.
//!
//! ## Output Structure
//!
//! ```text
//! // This code was automatically generated by intra-gen. Do not edit manually.
//!
//! //! module docs            <- or the user preamble, verbatim
//! use intra_client::{...};
//!
//! pub trait Accessors { ... }
//! impl Accessors for IntraClient { ... }
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;
use tracing::info;

use crate::codegen::{ModuleDocBuilder, generate_accessors_trait};
use crate::collision::ResolvedAccessor;
use crate::errors::GeneratorError;

/// First line of every generated file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by intra-gen. Do not edit manually.";

/// Assembles the default header: module docs and the client imports.
pub fn assemble_header(docs_url: &str, accessors: &[ResolvedAccessor]) -> TokenStream {
    let module_docs = ModuleDocBuilder::new(docs_url, accessors).build();

    quote! {
        #module_docs

        use intra_client::{IntraClient, QueryOptions, RequestHandle};
    }
}

/// Assembles the accessor trait and its client implementation.
pub fn assemble_body(accessors: &[ResolvedAccessor]) -> TokenStream {
    generate_accessors_trait(accessors)
}

/// Assembles the complete module with the default header.
pub fn assemble_module(docs_url: &str, accessors: &[ResolvedAccessor]) -> TokenStream {
    let header = assemble_header(docs_url, accessors);
    let body = assemble_body(accessors);

    quote! {
        #header

        #body
    }
}

/// Validates generated code using syn.
///
/// Parses the token stream as a complete Rust file to ensure it's syntactically
/// valid before writing to disk.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease.
///
/// Converts a parsed syn::File back to a nicely formatted string,
/// prepending the auto-generated notice as a regular comment.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{}\n\n{}", GENERATED_NOTICE, formatted)
}

/// Renders the final file contents.
///
/// Without a preamble the whole module is generated. With one, the preamble
/// replaces the generated header and is inserted verbatim between the notice
/// and the accessor trait; the combined text is parsed again so a broken
/// preamble fails the run instead of producing an uncompilable file.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the generated code or the
/// combined text fails to parse.
pub fn render(
    docs_url: &str,
    accessors: &[ResolvedAccessor],
    preamble: Option<&str>,
) -> Result<String, GeneratorError> {
    let Some(preamble) = preamble else {
        let file = validate_code(&assemble_module(docs_url, accessors))?;
        return Ok(format_code(&file));
    };

    let body = prettyplease::unparse(&validate_code(&assemble_body(accessors))?);
    let combined = format!("{}\n\n{}\n\n{}", GENERATED_NOTICE, preamble.trim_end(), body);

    syn::parse_file(&combined).map_err(|e| {
        GeneratorError::CodeGenError(format!("Generated code with preamble is invalid: {}", e))
    })?;

    Ok(combined)
}

/// Writes content to a file atomically using temp file + rename.
///
/// Other processes see either the old or the new content, never a mix.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Renders the accessors and writes them to `output`.
///
/// With `dry_run` the code is printed to stdout and nothing touches the
/// filesystem.
///
/// ## Returns
///
/// The rendered file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - Code generation produces invalid Rust
/// - File writing fails
pub fn generate_and_write(
    docs_url: &str,
    accessors: &[ResolvedAccessor],
    preamble: Option<&str>,
    output: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = render(docs_url, accessors, preamble)?;

    if dry_run {
        println!("{}", code);
    } else {
        write_atomic(output, &code)?;
        info!(path = %output.display(), accessors = accessors.len(), "Wrote accessors");
    }

    Ok(code)
}
