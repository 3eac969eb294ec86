//! `cases refresh`

use anyhow::{Context, Result};
use case_tracker::{merge_catalog, Config, PageFetcher};
use colored::Colorize;

use super::Completion;

pub async fn run(config: &Config) -> Result<Completion> {
    let listing_url = config.listing_url();
    println!("{}", format!("Fetching {listing_url}").bright_blue().bold());

    let fetcher = PageFetcher::new(config.http_timeout).context("Failed to build HTTP client")?;
    let discovered = fetcher.fetch_catalog(&listing_url, &config.normalizer()).await;

    if discovered.is_empty() {
        println!("{}", "No articles found, catalog left unchanged".red());
        return Ok(Completion::Failed);
    }

    let store = config.catalog_store();
    let existing = store.load()?;
    let found = discovered.len();
    let (catalog, added) = merge_catalog(existing, discovered);
    store.save(&catalog)?;

    println!(
        "{} {} found, {} new, {} in catalog",
        "Catalog refreshed:".green().bold(),
        found,
        added.to_string().yellow(),
        catalog.len()
    );
    println!("   {}", store.path().display().to_string().dimmed());

    Ok(Completion::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_tracker::Article;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn listing_server(response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers"))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    }

    fn config_for(server: &MockServer, dir: &TempDir) -> Config {
        let vars: HashMap<&str, String> = HashMap::from([
            ("CASES_BASE_URL", server.uri()),
            ("CASES_DATA_DIR", dir.path().display().to_string()),
        ]);
        Config::from_lookup(|name| vars.get(name).cloned()).unwrap()
    }

    #[tokio::test]
    async fn test_failed_fetch_fails_and_keeps_catalog() {
        let server = listing_server(ResponseTemplate::new(404)).await;
        let dir = TempDir::new().unwrap();
        let config = config_for(&server, &dir);

        let existing = Article::new("acme", "Acme story", "https://example.com/customers/acme");
        config.catalog_store().save(&[existing]).unwrap();
        let before = fs::read_to_string(config.catalog_path()).unwrap();

        assert_eq!(run(&config).await.unwrap(), Completion::Failed);
        assert_eq!(fs::read_to_string(config.catalog_path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_empty_listing_does_not_create_catalog() {
        let server = listing_server(ResponseTemplate::new(200).set_body_string("<p>No cases</p>")).await;
        let dir = TempDir::new().unwrap();
        let config = config_for(&server, &dir);

        assert_eq!(run(&config).await.unwrap(), Completion::Failed);
        assert!(!config.catalog_path().exists());
    }

    #[tokio::test]
    async fn test_refresh_merges_new_cases() {
        let listing = r#"<a href="/customers/zeta">Zeta Corp story</a><a href="/customers/acme">Acme again</a>"#;
        let server = listing_server(ResponseTemplate::new(200).set_body_string(listing)).await;
        let dir = TempDir::new().unwrap();
        let config = config_for(&server, &dir);

        let existing = Article::new("acme", "Acme story", "https://example.com/customers/acme");
        config.catalog_store().save(&[existing.clone()]).unwrap();

        assert_eq!(run(&config).await.unwrap(), Completion::Done);

        let catalog = config.catalog_store().load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0], existing);
        assert_eq!(catalog[1].slug, "zeta");
    }
}
