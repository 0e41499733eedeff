//! Footnote source references
//!
//! Endnote URLs are often obfuscated by writing the domain dots as the word
//! `dot` with spaces around it (`https://tass dot ru/politika/26459009`).
//! By default a URL stops at the first terminator, so such a reference is
//! cut at the first space. Joined scanning lets a run continue across
//! `" dot "` and recovers the full address.

use crate::document::{Element, PARAGRAPH};
use regex::Regex;
use std::sync::LazyLock;

/// Characters that end a URL run: whitespace, comma and semicolon
pub const URL_TERMINATORS: &str = r"\s,;";

/// The obfuscated form of `.` inside endnote URLs
pub const DOT_OBFUSCATION: &str = " dot ";

static ENDNOTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("https?://[^{}]+", URL_TERMINATORS)).expect("invalid regex: endnote url")
});

static JOINED_ENDNOTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    let run = format!("[^{}]+", URL_TERMINATORS);
    Regex::new(&format!(
        "https?://{run}(?:{dot}{run})*",
        run = run,
        dot = DOT_OBFUSCATION
    ))
    .expect("invalid regex: joined endnote url")
});

/// Every URL in the block's paragraphs, in encounter order, de-obfuscated.
///
/// Repeated URLs are kept.
pub fn extract_source_refs(endnotes: Element<'_>, join_obfuscated: bool) -> Vec<String> {
    endnotes
        .select_all(&PARAGRAPH)
        .flat_map(|p| scan_urls(&p.text(), join_obfuscated))
        .collect()
}

/// Find URLs in raw text and replace every `" dot "` with `"."`
pub fn scan_urls(text: &str, join_obfuscated: bool) -> Vec<String> {
    let pattern = if join_obfuscated {
        &JOINED_ENDNOTE_URL
    } else {
        &ENDNOTE_URL
    };
    pattern
        .find_iter(text)
        .map(|m| m.as_str().replace(DOT_OBFUSCATION, "."))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ReportDocument;

    #[test]
    fn test_plain_urls_and_terminators() {
        let urls = scan_urls("See https://a.org/x, http://b.net/y; and https://c.com/z end", false);
        assert_eq!(urls, vec!["https://a.org/x", "http://b.net/y", "https://c.com/z"]);
    }

    #[test]
    fn test_obfuscated_url_stops_at_whitespace() {
        let urls = scan_urls("[1] https://tass dot ru/politika/26459009 ; https://t.me/rybar/771", false);
        assert_eq!(urls, vec!["https://tass", "https://t.me/rybar/771"]);
    }

    #[test]
    fn test_default_scan_leaves_following_prose_alone() {
        let urls = scan_urls("See https://isw.pub/report dot com and more", false);
        assert_eq!(urls, vec!["https://isw.pub/report"]);
    }

    #[test]
    fn test_joined_dot_obfuscation() {
        let urls = scan_urls("[1] https://tass dot ru/politika/26459009 ; https://t dot me/rybar/771", true);
        assert_eq!(urls, vec!["https://tass.ru/politika/26459009", "https://t.me/rybar/771"]);
        assert!(urls.iter().all(|u| !u.contains(DOT_OBFUSCATION)));
    }

    #[test]
    fn test_joined_url_at_end_of_text() {
        assert_eq!(scan_urls("https://x dot y dot z", true), vec!["https://x.y.z"]);
        assert_eq!(scan_urls("https://x dot y dot z", false), vec!["https://x"]);
    }

    #[test]
    fn test_no_urls() {
        assert!(scan_urls("no links here, ftp://not-http", false).is_empty());
        assert!(scan_urls("no links here, ftp://not-http", true).is_empty());
    }

    #[test]
    fn test_duplicates_kept_across_paragraphs() {
        let doc = ReportDocument::parse(
            r#"<div data-id="endnotes">
                <p>[1] https://isw.pub/a</p>
                <p>[2] <a href="https://ignored.example">link</a> https://isw.pub/a</p>
                <div><p>[3] https://kyiv dot gov/b</p></div>
            </div>"#,
        );
        let endnotes = doc.find_by_attr("data-id", "endnotes").unwrap();
        assert_eq!(
            extract_source_refs(endnotes, false),
            vec!["https://isw.pub/a", "https://isw.pub/a", "https://kyiv"]
        );
        assert_eq!(
            extract_source_refs(endnotes, true),
            vec!["https://isw.pub/a", "https://isw.pub/a", "https://kyiv.gov/b"]
        );
    }
}
