//! Case-study link normalization.
//!
//! Turns a raw `href` into a stable slug plus canonical absolute URL, or
//! rejects it as not a case-study link. Pure: no I/O, output depends only on
//! the href and the configured base.

use url::Url;

/// A link recognized as a case study.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLink {
    pub slug: String,
    /// Absolute URL, no query string, fragment, or trailing slash
    pub url: String,
}

/// Recognizes `<prefix>/<slug>` links, site-relative or absolute.
#[derive(Debug, Clone)]
pub struct LinkNormalizer {
    base: Url,
    prefix: String,
}

impl LinkNormalizer {
    /// Create a normalizer for links under `prefix` (e.g. `/customers`) on `base`.
    pub fn new(base: Url, prefix: impl AsRef<str>) -> Self {
        let prefix = format!("/{}", prefix.as_ref().trim_matches('/'));
        Self { base, prefix }
    }

    /// Listing path, also the path prefix of every case link.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Canonical URL for a slug on the base origin.
    pub fn url_for_slug(&self, slug: &str) -> String {
        let mut url = self.base.clone();
        url.set_path(&format!("{}/{}", self.prefix, slug));
        url.set_query(None);
        url.set_fragment(None);
        url.to_string()
    }

    /// Normalize a raw href. Returns `None` for anything that is not a case link.
    pub fn normalize(&self, href: &str) -> Option<NormalizedLink> {
        let href = href.trim();

        // Only site-relative ("/...") and absolute http(s) links are considered.
        let is_absolute = href.starts_with("http://") || href.starts_with("https://");
        if !href.starts_with('/') && !is_absolute {
            return None;
        }

        let mut resolved = self.base.join(href).ok()?;
        if resolved.scheme() != "http" && resolved.scheme() != "https" {
            return None;
        }
        resolved.set_query(None);
        resolved.set_fragment(None);

        let slug = resolved
            .path()
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix('/')?
            .trim_matches('/')
            .to_string();

        // Bare listing link or nested pages below a case.
        if slug.is_empty() || slug.contains('/') {
            return None;
        }

        resolved.set_path(&format!("{}/{}", self.prefix, slug));

        Some(NormalizedLink {
            slug,
            url: resolved.to_string(),
        })
    }
}

/// Synthesize a title from a slug: hyphens become spaces, words are capitalized.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
