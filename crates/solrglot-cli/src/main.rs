#![forbid(unsafe_code)]

//! Solrglot CLI
//!
//! Inspect how a routing configuration sends translations to cores and which
//! filter a language-aware search would use.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use solrglot::core::{DocumentType, LanguageSettings};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

/// Solrglot - language-aware routing for multi-core Solr
#[derive(Parser, Debug)]
#[command(name = "solrglot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to $SOLRGLOT_CONFIG, then ./solrglot.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug output (otherwise RUST_LOG, then info)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every endpoint with its URL
    Endpoints,
    /// Print the endpoint a language is indexed into
    Target {
        /// Language code, e.g. eng-GB
        language: String,
    },
    /// Print the endpoints a search covers
    SearchTargets {
        #[command(flatten)]
        languages: LanguageArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the filter a search applies
    Filter {
        #[command(flatten)]
        languages: LanguageArgs,

        /// Document type searched for
        #[arg(long, value_enum, default_value_t = DocumentTypeArg::Content)]
        document_type: DocumentTypeArg,
    },
    /// Validate the configuration
    Check,
    /// Show where the items in a JSON file would be indexed
    Plan {
        /// JSON array of content items
        items: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct LanguageArgs {
    /// Requested language, most preferred first (repeatable)
    #[arg(short, long = "language")]
    languages: Vec<String>,

    /// Disable the always-available fallback
    #[arg(long)]
    no_always_available: bool,
}

impl LanguageArgs {
    fn settings(&self) -> LanguageSettings {
        LanguageSettings::new(self.languages.iter().cloned())
            .with_always_available(!self.no_always_available)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DocumentTypeArg {
    Content,
    Location,
}

impl From<DocumentTypeArg> for DocumentType {
    fn from(arg: DocumentTypeArg) -> Self {
        match arg {
            DocumentTypeArg::Content => DocumentType::Content,
            DocumentTypeArg::Location => DocumentType::Location,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = commands::load_config(cli.config.as_deref())?;

    let output = match cli.command {
        Command::Endpoints => commands::endpoints(&config)?,
        Command::Target { language } => commands::target(&config, &language)?,
        Command::SearchTargets { languages, json } => {
            commands::search_targets(&config, &languages.settings(), json)?
        }
        Command::Filter {
            languages,
            document_type,
        } => commands::filter(&config, &languages.settings(), document_type.into())?,
        Command::Check => commands::check(&config)?,
        Command::Plan { items, json } => commands::plan(&config, &items, json)?,
    };

    print!("{output}");
    Ok(())
}
