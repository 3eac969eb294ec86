//! Prompt construction and source-page preparation.

use scraper::Html;

/// Characters of source Markdown passed to the model.
pub const MAX_SOURCE_CHARS: usize = 10_000;

/// Build the translation prompt for a case-study page.
///
/// `source` is the page content as Markdown; when `None` the model is
/// expected to read the URL itself (CLI backends with web access).
pub fn translation_prompt(url: &str, language: &str, source: Option<&str>) -> String {
    let mut prompt = format!(
        r#"Translate the following customer case study into an engaging, publication-ready article in {language}.

URL: {url}

## Structure
1. Executive Summary - lead with the quantified results
2. Company Profile - industry, size, infrastructure
3. Challenges - the concrete problems they faced
4. Solution - what was adopted and how it was rolled out
5. Results - quantitative and qualitative outcomes
6. Technical Details - architecture and technology stack
7. Lessons Learned - insights other teams can apply
8. Conclusion

## Style
- Emphasize concrete numbers (percentages, time, cost)
- Render quotations naturally in {language}
- Localize technical terms appropriately
- Use Markdown headings, bullet lists, and tables
- Professional but readable tone
- Carry over the facts of the source accurately; do not invent figures

## Highlight
- ROI
- Time savings
- Cost reduction
- Security improvements
- Compliance

Include a before/after comparison, customer quotes, and a text-based architecture sketch where the source supports them.

Output only the finished Markdown document."#
    );

    if let Some(source) = source {
        prompt.push_str("\n\n## Source content\n\n");
        prompt.push_str(truncate_chars(source, MAX_SOURCE_CHARS));
    }

    prompt
}

/// Convert fetched page HTML into Markdown for the prompt.
pub fn page_to_markdown(html: &str) -> String {
    htmd::convert(html).unwrap_or_else(|_| {
        // Fallback: strip tags and return plain text
        let document = Html::parse_document(html);
        document
            .root_element()
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Prefix of `s` with at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
