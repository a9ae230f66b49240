//! Intra Accessor Generator
//!
//! Scrapes the intra v2 API documentation and writes one Rust accessor per
//! documented resource path.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use intra_gen::config::{
    CollisionPolicy, DEFAULT_DOCS_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION, DocsSource,
    GeneratorConfig,
};
use intra_gen::errors::GeneratorError;
use intra_gen::pipeline::run;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// intra-gen - generates 42 intra API accessors from the API's own documentation
#[derive(Parser, Debug)]
#[command(name = "intra-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Documentation URL to scrape
    #[arg(long, default_value = DEFAULT_DOCS_URL, conflicts_with = "docs_file")]
    docs_url: String,

    /// Read the documentation from a local JSON snapshot instead
    #[arg(long)]
    docs_file: Option<PathBuf>,

    /// File to write the accessors to
    #[arg(short, long, default_value = "accessors.rs")]
    output: PathBuf,

    /// File inserted verbatim in place of the generated module header
    #[arg(long)]
    preamble: Option<PathBuf>,

    /// Version segment every documented path starts with
    #[arg(long, default_value = DEFAULT_VERSION)]
    prefix: String,

    /// What to do when several paths produce the same accessor name
    #[arg(long, value_enum, default_value_t = CollisionPolicy::LastWins)]
    on_collision: CollisionPolicy,

    /// Timeout for the documentation request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<GeneratorConfig, GeneratorError> {
        if self.prefix.is_empty() || self.prefix.contains('/') {
            return Err(GeneratorError::ConfigError(format!(
                "--prefix must be a single path segment, got '{}'",
                self.prefix
            )));
        }
        if self.timeout_secs == 0 {
            return Err(GeneratorError::ConfigError(
                "--timeout-secs must be greater than zero".to_string(),
            ));
        }

        let docs = match self.docs_file {
            Some(path) => DocsSource::File(path),
            None => DocsSource::Url(self.docs_url),
        };

        Ok(GeneratorConfig {
            docs,
            output: self.output,
            preamble: self.preamble,
            version: self.prefix,
            collision_policy: self.on_collision,
            timeout: Duration::from_secs(self.timeout_secs),
            dry_run: self.dry_run,
        })
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // Default (verbose=0) shows skipped templates and collisions only
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,intra_gen=info".to_string(),
            2 => "info,intra_gen=debug".to_string(),
            _ => "debug,intra_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let config = cli.into_config()?;
    if config.dry_run {
        tracing::info!("Dry run mode - no files will be written");
    }

    run(&config).await?;
    Ok(())
}
