//! Case-study translation tracker CLI
//!
//! Refreshes the catalog from the listing page, runs one translation cycle
//! per invocation, and reports progress. Logs go to stderr; reports and
//! listings go to stdout.

use anyhow::{Context, Result};
use case_tracker::{Config, TranslatorKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;

#[derive(Parser)]
#[command(name = "cases")]
#[command(about = "Customer case-study inventory and translation tracker")]
#[command(version)]
struct Cli {
    /// Directory holding article_list.json, translated.json and articles/
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the listing page and merge new cases into the catalog
    Refresh,

    /// Translate one untranslated case
    Run {
        /// Translation backend (placeholder, api, command)
        #[arg(long)]
        translator: Option<TranslatorKind>,
    },

    /// Show translation progress
    Status,

    /// Print the catalog as slug|title lines
    List {
        /// Only cases that have not been translated yet
        #[arg(long)]
        untranslated: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,case_tracker=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let completion = match cli.command {
        Commands::Refresh => cmd::refresh::run(&config).await?,
        Commands::Run { translator } => {
            if let Some(kind) = translator {
                config = config.with_translator(kind);
            }
            cmd::run::run(&config).await?
        }
        Commands::Status => cmd::status::run(&config)?,
        Commands::List { untranslated } => cmd::list::run(&config, untranslated)?,
    };

    Ok(completion.into())
}
