//! Extracted report types

use serde::{Deserialize, Serialize};

/// One bolded-lead summary statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topline {
    /// Bold lead text; empty when the paragraph has none
    pub headline: String,

    /// Remaining text, or the whole paragraph when the lead could not be split off
    pub body: String,
}

/// A battlefield-direction or topical subdivision of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier, unique within a report
    pub id: String,

    /// Section title; empty when the block exposes none
    pub title: String,

    /// Paragraph texts separated by blank lines
    pub body: String,

    /// Image URL of the section's first map
    pub map_url: Option<String>,

    /// Caption of the section's first map
    pub map_title: Option<String>,
}

/// Structured form of one daily report
///
/// Field order is the serialized field order. Absent optional values are
/// written as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// ISO 8601 calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub title: String,
    pub toplines: Vec<Topline>,
    pub key_takeaways: Vec<String>,
    pub sections: Vec<Section>,
    pub overview_map_url: Option<String>,
    pub source_refs: Vec<String>,
}

impl ParsedReport {
    /// Look up a section by identifier
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section identifiers in document order
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    /// Pretty JSON with 2-space indentation and non-ASCII left unescaped
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a report back from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedReport {
        ParsedReport {
            date: "2026-02-16".to_string(),
            title: "Assessment, February 16, 2026".to_string(),
            toplines: vec![Topline {
                headline: "Lead.".to_string(),
                body: "Body — with «non-ASCII».".to_string(),
            }],
            key_takeaways: vec!["One".to_string()],
            sections: vec![Section {
                id: "belarus".to_string(),
                title: "Belarus".to_string(),
                body: String::new(),
                map_url: None,
                map_title: None,
            }],
            overview_map_url: None,
            source_refs: vec![],
        }
    }

    #[test]
    fn test_field_order_and_nulls() {
        let json = sample().to_json_pretty().unwrap();
        let keys = [
            "\"date\"",
            "\"title\"",
            "\"toplines\"",
            "\"key_takeaways\"",
            "\"sections\"",
            "\"overview_map_url\"",
            "\"source_refs\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\"overview_map_url\": null"));
        assert!(json.contains("\"map_url\": null"));
        assert!(json.contains("\n  \"date\""));
    }

    #[test]
    fn test_non_ascii_unescaped() {
        let json = sample().to_json_pretty().unwrap();
        assert!(json.contains("«non-ASCII»"));
        assert!(json.contains('—'));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample();
        let back = ParsedReport::from_json(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_section_lookup() {
        let report = sample();
        assert_eq!(report.section("belarus").unwrap().title, "Belarus");
        assert!(report.section("ukr-ops").is_none());
        assert_eq!(report.section_ids(), vec!["belarus"]);
    }
}
