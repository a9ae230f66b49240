//! Error types for the intra generator.

use intra_define::TemplateError;
use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant is fatal for the run: nothing is written once one of these
/// has been raised.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The documentation could not be fetched.
    #[error("Failed to fetch API documentation from '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The documentation endpoint answered with a non-success status.
    #[error("Documentation endpoint '{url}' returned HTTP {status}")]
    FetchStatus { url: String, status: u16 },

    /// The documentation is not JSON or lacks the expected keys.
    #[error("Malformed API documentation: {source}")]
    MalformedDocs {
        #[source]
        source: serde_json::Error,
    },

    /// A documented path template could not be parsed.
    #[error(transparent)]
    InvalidTemplate(#[from] TemplateError),

    /// Two accessors reduce to the same method name.
    ///
    /// Only raised under [`CollisionPolicy::Reject`](crate::config::CollisionPolicy::Reject).
    #[error("Accessor name '{name}' is generated by several templates: {}", templates.join(", "))]
    NameCollision {
        /// The colliding method name.
        name: String,
        /// Every template that reduces to it, in classification order.
        templates: Vec<String>,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to read an input file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
