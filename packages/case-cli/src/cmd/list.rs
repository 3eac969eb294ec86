//! `cases list`

use anyhow::Result;
use case_tracker::{frontier, pipe_line, Config};

use super::Completion;

pub fn run(config: &Config, untranslated: bool) -> Result<Completion> {
    let catalog = config.catalog_store().load()?;

    if untranslated {
        let log = config.translated_log_store().load()?;
        for article in frontier(&catalog, &log) {
            println!("{}", pipe_line(article));
        }
    } else {
        for article in &catalog {
            println!("{}", pipe_line(article));
        }
    }

    Ok(Completion::Done)
}
