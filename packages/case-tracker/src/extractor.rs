//! Article extraction from a parsed listing page.
//!
//! Walks every `a[href]`, keeps the links the [`LinkNormalizer`] accepts,
//! derives a display title, and returns a slug-sorted catalog with one
//! entry per slug. The first occurrence of a slug wins, since it usually
//! carries the most specific surrounding context for the title.

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::debug;

use crate::normalizer::{title_from_slug, LinkNormalizer};
use crate::types::Article;

/// Titles shorter than this (in characters) are treated as missing.
pub const MIN_TITLE_CHARS: usize = 3;

/// Elements that delimit a link's own context when searching for a heading.
const BLOCK_CONTAINERS: &[&str] = &["div", "article", "section"];

/// Extract the catalog from raw listing HTML.
pub fn extract_from_html(html: &str, normalizer: &LinkNormalizer) -> Vec<Article> {
    let document = Html::parse_document(html);
    extract_articles(&document, normalizer)
}

/// Extract the catalog from a parsed document.
pub fn extract_articles(document: &Html, normalizer: &LinkNormalizer) -> Vec<Article> {
    let link_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return vec![],
    };
    let heading_selector = match Selector::parse("h1, h2, h3, h4") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let mut articles = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut links_seen = 0usize;

    for link in document.select(&link_selector) {
        links_seen += 1;
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some(normalized) = normalizer.normalize(href) else {
            continue;
        };
        if seen.contains(&normalized.slug) {
            continue;
        }

        let title = derive_title(link, &heading_selector, &normalized.slug);
        seen.insert(normalized.slug.clone());
        articles.push(Article::new(normalized.slug, title, normalized.url));
    }

    articles.sort_by(|a, b| a.slug.cmp(&b.slug));

    debug!(
        links_seen = links_seen,
        articles = articles.len(),
        "Extracted case-study links"
    );

    articles
}

/// Title fallback chain: link text, then the first heading in the innermost
/// enclosing block, then a title synthesized from the slug. Link text and
/// headings shorter than [`MIN_TITLE_CHARS`] both count as missing.
fn derive_title(link: ElementRef<'_>, heading_selector: &Selector, slug: &str) -> String {
    let text = element_text(link);
    if is_usable_title(&text) {
        return text;
    }

    if let Some(heading) = nearest_heading(link, heading_selector) {
        return heading;
    }

    title_from_slug(slug)
}

fn nearest_heading(link: ElementRef<'_>, heading_selector: &Selector) -> Option<String> {
    // Only the innermost container counts; outer ones hold sibling cards.
    let container = link
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| BLOCK_CONTAINERS.contains(&ancestor.value().name()))?;

    container
        .select(heading_selector)
        .map(element_text)
        .find(|text| is_usable_title(text))
}

/// Visible text with each text node trimmed and whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_usable_title(text: &str) -> bool {
    text.chars().count() >= MIN_TITLE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn normalizer() -> LinkNormalizer {
        LinkNormalizer::new(Url::parse("https://example.com").unwrap(), "/customers")
    }

    fn slugs(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.slug.as_str()).collect()
    }

    #[test]
    fn test_extracts_sorted_case_links_only() {
        let html = r#"
            <nav><a href="/customers">All customers</a><a href="/about">About</a></nav>
            <a href="/customers/zeta">Zeta Corp story</a>
            <a href="https://example.com/customers/acme?ref=grid">Acme story</a>
            <a href="/customers/">Back</a>
        "#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(slugs(&articles), vec!["acme", "zeta"]);
        assert_eq!(articles[0].title, "Acme story");
        assert_eq!(articles[0].url, "https://example.com/customers/acme");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let html = r#"
            <a href="/customers/acme">Acme cuts noise by 98%</a>
            <a href="/customers/acme?x=1">Read more</a>
            <a href="https://example.com/customers/acme#quote">Acme again</a>
        "#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Acme cuts noise by 98%");
    }

    #[test]
    fn test_title_falls_back_to_enclosing_heading() {
        let html = r#"
            <div class="card">
                <h3>Neo4j Case Study</h3>
                <p>Graph database leader</p>
                <a href="/customers/neo4j"><img src="logo.png"></a>
            </div>
        "#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(articles[0].title, "Neo4j Case Study");
    }

    #[test]
    fn test_short_link_text_falls_back_to_heading() {
        let html = r#"
            <article><h2>Syfe cuts compliance time</h2><a href="/customers/syfe">Go</a></article>
        "#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(articles[0].title, "Syfe cuts compliance time");
    }

    #[test]
    fn test_heading_search_skips_inline_wrappers() {
        let html = r#"
            <section>
                <h2>Immuta gains full visibility</h2>
                <p><span><a href="/customers/immuta"></a></span></p>
            </section>
        "#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(articles[0].title, "Immuta gains full visibility");
    }

    #[test]
    fn test_sibling_card_heading_is_not_borrowed() {
        let html = r#"
            <div class="page">
                <h1>Customer Stories</h1>
                <div class="grid">
                    <div class="card"><h3>Alpha Corp</h3><a href="/customers/alpha">Go</a></div>
                    <div class="card"><a href="/customers/beta-co"><img src="beta.png"></a></div>
                </div>
            </div>
        "#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(slugs(&articles), vec!["alpha", "beta-co"]);
        assert_eq!(articles[0].title, "Alpha Corp");
        assert_eq!(articles[1].title, "Beta Co");
    }

    #[test]
    fn test_short_heading_falls_back_to_slug() {
        let html = r#"<div><h3>AI</h3><a href="/customers/ai-labs">Go</a></div>"#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(articles[0].title, "Ai Labs");
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        let html = r#"<p><a href="/customers/neo4j-case"> </a></p>"#;

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(articles[0].title, "Neo4j Case");
    }

    #[test]
    fn test_link_text_whitespace_is_collapsed() {
        let html = "<a href=\"/customers/gini\">\n  <span>Gini</span>\n  <span>security study</span>\n</a>";

        let articles = extract_from_html(html, &normalizer());

        assert_eq!(articles[0].title, "Gini security study");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"
            <a href="/customers/b">Bee Inc</a>
            <a href="/customers/a">Ay Inc</a>
            <a href="/customers/b">Bee again</a>
        "#;

        let first = extract_from_html(html, &normalizer());
        let second = extract_from_html(html, &normalizer());

        assert_eq!(first, second);
        assert_eq!(slugs(&first), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_document_yields_empty_catalog() {
        assert!(extract_from_html("", &normalizer()).is_empty());
    }
}
