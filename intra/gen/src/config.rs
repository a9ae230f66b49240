//! Generator configuration.
//!
//! [`GeneratorConfig`] carries everything one generation run needs. The CLI
//! builds it from its arguments; tests build it directly.

use std::path::PathBuf;
use std::time::Duration;

use strum::{Display, EnumString};

/// Default location of the API self-description.
pub const DEFAULT_DOCS_URL: &str = "https://api.intra.42.fr/apidoc";

/// Version segment every documented path starts with.
pub const DEFAULT_VERSION: &str = "v2";

/// Default request timeout for the documentation fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What to do when several accessors reduce to the same method name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, clap::ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Keep the accessor generated last and drop the earlier ones.
    #[default]
    LastWins,
    /// Keep every accessor; later ones get a numeric suffix (`_2`, `_3`, ...).
    Disambiguate,
    /// Abort the run.
    Reject,
}

/// Where the documentation JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsSource {
    /// Fetch over HTTP.
    Url(String),
    /// Read a local snapshot.
    File(PathBuf),
}

/// Settings for a single generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub docs: DocsSource,
    /// File the generated accessors are written to.
    pub output: PathBuf,
    /// Replaces the generated header (module docs and imports) when set.
    pub preamble: Option<PathBuf>,
    /// Version segment every template must start with.
    pub version: String,
    pub collision_policy: CollisionPolicy,
    /// Timeout for the documentation fetch.
    pub timeout: Duration,
    /// Print the generated code instead of writing it.
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            docs: DocsSource::Url(DEFAULT_DOCS_URL.to_string()),
            output: PathBuf::from("accessors.rs"),
            preamble: None,
            version: DEFAULT_VERSION.to_string(),
            collision_policy: CollisionPolicy::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Returns the documentation URL shown in generated docs.
    ///
    /// Local snapshots are still documented against the public URL.
    pub fn docs_url(&self) -> &str {
        match &self.docs {
            DocsSource::Url(url) => url,
            DocsSource::File(_) => DEFAULT_DOCS_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_config_targets_public_docs() {
        let config = GeneratorConfig::default();
        assert_eq!(config.docs, DocsSource::Url(DEFAULT_DOCS_URL.to_string()));
        assert_eq!(config.version, "v2");
        assert_eq!(config.collision_policy, CollisionPolicy::LastWins);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.dry_run);
    }

    #[test]
    fn collision_policy_kebab_case() {
        assert_eq!(CollisionPolicy::LastWins.to_string(), "last-wins");
        assert_eq!(
            CollisionPolicy::from_str("disambiguate").unwrap(),
            CollisionPolicy::Disambiguate
        );
        assert!(CollisionPolicy::from_str("LastWins").is_err());
    }

    #[test]
    fn file_source_documents_public_url() {
        let config = GeneratorConfig {
            docs: DocsSource::File(PathBuf::from("apidoc.json")),
            ..Default::default()
        };
        assert_eq!(config.docs_url(), DEFAULT_DOCS_URL);
    }
}
