//! Curated catalog used before any listing scrape has run.

use crate::normalizer::LinkNormalizer;
use crate::types::Article;

/// (slug, title) pairs of known Sysdig customer case studies.
pub const DEFAULT_ARTICLES: &[(&str, &str)] = &[
    ("neo4j", "Neo4j - Empowering Engineering to Reduce Risk"),
    ("bigcommerce", "BigCommerce - Securing global ecommerce at scale"),
    ("apree-health", "Apree Health - Powering secure, compliant healthcare innovation"),
    ("syfe", "Syfe - cuts compliance time by 75%, boosts CIS score 30 points"),
    ("jumpcloud", "JumpCloud - slashes 80% of vulns and 99.8% of noise"),
    ("sprout-social", "Sprout Social - detects threats 99% faster, cuts noise 98%"),
    ("immuta", "Immuta - gains full visibility in 30 days, cuts false positives 85%"),
    ("ben-visa-vale", "Ben Visa Vale - secures 800K cardholders, remediates 70% faster"),
    ("rush-street", "Rush Street (RSI) - secures 100% of production environments in 6 weeks"),
    ("worldpay-on-aws", "Worldpay - Operational burden reduction case study"),
    ("gini", "Gini - Multi-environment security operations study"),
    ("healthcare-tech", "Healthcare IT Provider - Manual solutions cost comparison study"),
    ("automox", "Automox - Vulnerability triage efficiency analysis"),
    ("crypto-platform", "Crypto Platform - Runtime security threat detection"),
];

/// Default catalog with URLs on the normalizer's base, sorted by slug.
pub fn default_catalog(normalizer: &LinkNormalizer) -> Vec<Article> {
    let mut articles: Vec<Article> = DEFAULT_ARTICLES
        .iter()
        .map(|(slug, title)| Article::new(*slug, *title, normalizer.url_for_slug(slug)))
        .collect();
    articles.sort_by(|a, b| a.slug.cmp(&b.slug));
    articles
}
