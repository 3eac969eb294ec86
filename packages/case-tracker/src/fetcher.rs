//! HTTP fetching for the listing page and individual case pages.
//!
//! Uses reqwest with a browser-like identity and a fixed per-request
//! deadline. No JavaScript rendering: static HTML only.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{FetchError, FetchResult};
use crate::extractor::extract_from_html;
use crate::normalizer::LinkNormalizer;
use crate::types::Article;

/// Browser-like User-Agent to avoid bot walls on marketing sites.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches HTML pages over HTTP(S).
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch raw HTML. Non-2xx statuses are errors.
    pub async fn fetch_html(&self, url: &str) -> FetchResult<String> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            FetchError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "HTTP error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        debug!(url = %url, bytes = html.len(), "HTTP fetch finished");
        Ok(html)
    }

    /// Fetch the listing page and extract its catalog.
    ///
    /// Fetch failures are logged and reported as an empty catalog: callers
    /// must read an empty result as "nothing discovered", not "nothing changed".
    pub async fn fetch_catalog(&self, listing_url: &str, normalizer: &LinkNormalizer) -> Vec<Article> {
        info!(url = %listing_url, "Fetching case-study listing");

        match self.fetch_html(listing_url).await {
            Ok(html) => {
                let articles = extract_from_html(&html, normalizer);
                info!(url = %listing_url, articles = articles.len(), "Listing parsed");
                articles
            }
            Err(e) => {
                warn!(url = %listing_url, error = %e, "Listing fetch failed, no articles discovered");
                Vec::new()
            }
        }
    }
}
