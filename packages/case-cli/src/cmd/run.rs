//! `cases run`

use anyhow::{Context, Result};
use case_tracker::{run_cycle, ArtifactLayout, Config, CycleOutcome, PageFetcher, ProgressReport};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::status::print_report;
use super::Completion;

pub async fn run(config: &Config) -> Result<Completion> {
    let catalog = config.catalog_store().load()?;
    let log_store = config.translated_log_store();
    let mut log = log_store.load()?;

    print_report(&ProgressReport::new(&catalog, &log));
    println!();

    let fetcher = PageFetcher::new(config.http_timeout).context("Failed to build HTTP client")?;
    let translator = config
        .build_translator(fetcher)
        .context("Failed to configure translator")?;
    let layout = ArtifactLayout::new(config.articles_dir(), &config.output_ext);
    let today = chrono::Local::now().date_naive();

    let outcome = run_cycle(
        &catalog,
        &mut log,
        &log_store,
        translator.as_ref(),
        &layout,
        today,
        &mut StdRng::from_entropy(),
    )
    .await
    .context("Failed to record translation")?;

    match outcome {
        CycleOutcome::Translated(record) => {
            println!("{} {}", "Translated:".green().bold(), record.title);
            println!("   {}", record.output_file.display().to_string().dimmed());
            Ok(Completion::Done)
        }
        CycleOutcome::Exhausted => {
            println!("{}", "All articles are translated".green().bold());
            Ok(Completion::Done)
        }
        CycleOutcome::Failed { article, error } => {
            println!("{} {}", "Translation failed:".red().bold(), article.title);
            println!("   {}", error.to_string().red().dimmed());
            Ok(Completion::Failed)
        }
    }
}
