//! Listing fetch and API translation against a local mock server.

use anthropic_client::AnthropicClient;
use case_tracker::{ApiTranslator, LinkNormalizer, PageFetcher, TranslateError, Translator};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"
<html><body>
  <nav><a href="/customers">All customers</a></nav>
  <div class="card">
    <h3>Beta Corp</h3>
    <a href="/customers/beta/"><img src="beta.png"></a>
  </div>
  <a href="/customers/alpha?utm=x">Alpha   Inc</a>
  <a href="/customers/alpha">Alpha duplicate</a>
  <a href="/blog/post">Blog</a>
</body></html>
"#;

fn normalizer_for(server: &MockServer) -> LinkNormalizer {
    LinkNormalizer::new(Url::parse(&server.uri()).unwrap(), "/customers")
}

fn fetcher() -> PageFetcher {
    PageFetcher::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_catalog_extracts_cases() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .mount(&server)
        .await;

    let normalizer = normalizer_for(&server);
    let listing_url = format!("{}/customers", server.uri());
    let articles = fetcher().fetch_catalog(&listing_url, &normalizer).await;

    let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["alpha", "beta"]);

    assert_eq!(articles[0].title, "Alpha Inc");
    assert_eq!(articles[0].url, format!("{}/customers/alpha", server.uri()));
    assert_eq!(articles[1].title, "Beta Corp");
}

#[tokio::test]
async fn test_fetch_catalog_failure_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let normalizer = normalizer_for(&server);
    let listing_url = format!("{}/customers", server.uri());

    assert!(fetcher().fetch_catalog(&listing_url, &normalizer).await.is_empty());
}

#[tokio::test]
async fn test_fetch_html_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/customers/acme", server.uri());
    let err = fetcher().fetch_html(&url).await.unwrap_err();

    assert!(matches!(err, case_tracker::FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_api_translator_sends_page_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/acme"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<h1>Acme</h1><p>Reduced alert noise by 95%</p>"),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("Reduced alert noise by 95%"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "# Acme 導入事例"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 100, "output_tokens": 10}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AnthropicClient::new("sk-ant-test").with_base_url(format!("{}/v1", server.uri()));
    let translator = ApiTranslator::new(client, fetcher()).with_model("claude-test");

    let url = format!("{}/customers/acme", server.uri());
    let content = translator.translate(&url).await.unwrap();

    assert_eq!(content, "# Acme 導入事例");
    assert_eq!(translator.name(), "api");
}

#[tokio::test]
async fn test_api_translator_page_failure_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = AnthropicClient::new("sk-ant-test").with_base_url(format!("{}/v1", server.uri()));
    let translator = ApiTranslator::new(client, fetcher());

    let url = format!("{}/customers/gone", server.uri());
    let err = translator.translate(&url).await.unwrap_err();

    assert!(matches!(err, TranslateError::Fetch(_)));
}
