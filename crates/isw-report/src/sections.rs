//! Directional sections and their maps

use crate::config::{DuplicateSectionPolicy, ParserConfig};
use crate::document::{Element, ReportDocument, IMAGE, PARAGRAPH, SUBHEADING};
use crate::error::{ReportError, Result};
use crate::report::Section;
use std::collections::HashSet;
use tracing::warn;

/// Image URL and caption read from a map block
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapInfo {
    pub url: Option<String>,
    pub title: Option<String>,
}

/// Read a map block: its image source, and the caption attribute of the
/// first following caption sibling.
pub fn read_map_block(block: Element<'_>, config: &ParserConfig) -> MapInfo {
    let url = block
        .select_first(&IMAGE)
        .and_then(|img| img.attr("src"))
        .map(str::to_string);

    let title = block
        .next_sibling_with_class("div", &config.map_caption_class)
        .and_then(|caption| caption.attr(&config.map_caption_attr))
        .map(str::to_string);

    MapInfo { url, title }
}

/// Every identified block except the reserved ones, as a `Section`.
///
/// Repeated identifiers are handled per `config.duplicate_sections`.
pub fn extract_sections(doc: &ReportDocument, config: &ParserConfig) -> Result<Vec<Section>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut sections = Vec::new();

    for element in doc.find_all_with_attr(&config.section_attr) {
        let Some(id) = element.attr(&config.section_attr) else {
            continue;
        };
        if config.is_reserved(id) {
            continue;
        }
        if !seen.insert(id) {
            match config.duplicate_sections {
                DuplicateSectionPolicy::KeepFirst => {
                    warn!(section_id = id, "Skipping duplicate section");
                    continue;
                }
                DuplicateSectionPolicy::Reject => {
                    return Err(ReportError::duplicate_section(id));
                }
            }
        }

        sections.push(build_section(id, element, config));
    }

    Ok(sections)
}

fn build_section(id: &str, element: Element<'_>, config: &ParserConfig) -> Section {
    let title = element
        .attr(&config.title_attr)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| element.select_first(&SUBHEADING).map(|h2| h2.normalized_text()))
        .unwrap_or_default();

    // Only the first map is kept; later blocks in the section are ignored.
    let map = element
        .descendants_with_class("div", &config.map_block_class)
        .next()
        .map(|block| read_map_block(block, config))
        .unwrap_or_default();

    Section {
        id: id.to_string(),
        title,
        body: section_body(element),
        map_url: map.url,
        map_title: map.title,
    }
}

/// Non-empty descendant paragraphs joined by blank lines
fn section_body(element: Element<'_>) -> String {
    element
        .select_all(&PARAGRAPH)
        .map(|p| p.normalized_text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Image URL of the first map block in the overview section
pub fn extract_overview_map(doc: &ReportDocument, config: &ParserConfig) -> Option<String> {
    doc.find_by_attr(&config.section_attr, &config.overview_section_id)?
        .descendants_with_class("div", &config.map_block_class)
        .next()?
        .select_first(&IMAGE)?
        .attr("src")
        .map(str::to_string)
}
