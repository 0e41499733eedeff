//! Bold-lead summary paragraphs

use crate::document::{Element, BOLD};
use crate::report::Topline;
use crate::text::normalize;

/// Extract one `Topline` per non-empty direct child paragraph of the block.
pub fn extract_toplines(block: Element<'_>) -> Vec<Topline> {
    block
        .children_named("p")
        .filter_map(|p| {
            let text = p.normalized_text();
            if text.is_empty() {
                return None;
            }
            Some(split_bold_lead(p, text))
        })
        .collect()
}

/// Split a paragraph into its bold headline and the remaining body.
///
/// When the headline is not a literal prefix of the paragraph text the full
/// text is kept as body; no fuzzy reconciliation is attempted.
fn split_bold_lead(paragraph: Element<'_>, text: String) -> Topline {
    let bold: Vec<String> = paragraph
        .select_all(&BOLD)
        .map(|b| normalize(&b.text()))
        .collect();

    if bold.is_empty() {
        return Topline {
            headline: String::new(),
            body: text,
        };
    }

    let headline = bold.join(" ");
    let body = match text.strip_prefix(headline.as_str()) {
        Some(rest) if !headline.is_empty() => rest.trim().to_string(),
        _ => text,
    };

    Topline { headline, body }
}
