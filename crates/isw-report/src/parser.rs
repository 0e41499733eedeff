//! Report assembly

use crate::config::ParserConfig;
use crate::document::ReportDocument;
use crate::error::Result;
use crate::report::ParsedReport;
use crate::sections::{extract_overview_map, extract_sections};
use crate::sources::extract_source_refs;
use crate::takeaways::extract_key_takeaways;
use crate::title::{extract_date_from_title, extract_title};
use crate::toplines::extract_toplines;
use tracing::debug;

/// Turns report HTML into a `ParsedReport`
///
/// Holds no state besides its configuration; one parser can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: ParserConfig,
}

impl ReportParser {
    /// Create a parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The parser's configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one HTML document.
    ///
    /// Fails only when the title carries no date, or on a duplicate section
    /// under `DuplicateSectionPolicy::Reject`.
    pub fn parse(&self, html: &str) -> Result<ParsedReport> {
        let config = &self.config;
        let doc = ReportDocument::parse(html);

        let title = extract_title(&doc);
        let date = extract_date_from_title(&title)?;

        let toplines = doc
            .find_by_attr(&config.section_attr, &config.toplines_id)
            .map(extract_toplines)
            .unwrap_or_default();

        let key_takeaways = doc
            .find_by_attr(&config.section_attr, &config.key_takeaways_id)
            .map(extract_key_takeaways)
            .unwrap_or_default();

        let sections = extract_sections(&doc, config)?;
        let overview_map_url = extract_overview_map(&doc, config);

        let source_refs = doc
            .find_by_attr(&config.section_attr, &config.endnotes_id)
            .map(|block| extract_source_refs(block, config.join_obfuscated_urls))
            .unwrap_or_default();

        debug!(
            date = %date,
            toplines = toplines.len(),
            key_takeaways = key_takeaways.len(),
            sections = sections.len(),
            overview_map = overview_map_url.is_some(),
            source_refs = source_refs.len(),
            "Parsed report"
        );

        Ok(ParsedReport {
            date,
            title,
            toplines,
            key_takeaways,
            sections,
            overview_map_url,
            source_refs,
        })
    }
}

/// Parse report HTML with the default configuration
pub fn parse_report(html: &str) -> Result<ParsedReport> {
    ReportParser::default().parse(html)
}
