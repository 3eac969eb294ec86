//! `cases status`

use anyhow::Result;
use case_tracker::{Config, ProgressReport};
use colored::Colorize;

use super::Completion;

pub fn run(config: &Config) -> Result<Completion> {
    let catalog = config.catalog_store().load()?;
    let log = config.translated_log_store().load()?;

    print_report(&ProgressReport::new(&catalog, &log));
    Ok(Completion::Done)
}

pub fn print_report(report: &ProgressReport) {
    println!("{}", "Translation progress".cyan().bold());
    println!("  Total articles: {}", report.total);
    println!(
        "  Translated:     {} ({:.1}%)",
        report.translated.to_string().green(),
        report.percent_translated()
    );
    println!("  Remaining:      {}", report.remaining.to_string().yellow());

    if let Some(latest) = &report.latest {
        println!(
            "  Latest:         {} {}",
            latest.translated_date.format("%Y-%m-%d").to_string().dimmed(),
            latest.title
        );
    }
}
