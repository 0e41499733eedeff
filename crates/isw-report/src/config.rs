//! Parser configuration

use serde::{Deserialize, Serialize};

/// What to do when two elements carry the same section identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateSectionPolicy {
    /// Keep the first occurrence, skip later ones with a warning
    #[default]
    KeepFirst,
    /// Fail the parse with `MalformedDocument`
    Reject,
}

/// Markers of the report's HTML dialect
///
/// The defaults describe the published daily assessment pages; there is
/// normally no reason to change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Attribute that identifies a block of the report
    pub section_attr: String,

    /// Identifier of the toplines block
    pub toplines_id: String,

    /// Identifier of the key takeaways block
    pub key_takeaways_id: String,

    /// Identifier of the endnotes block
    pub endnotes_id: String,

    /// Identifier of the general operations section holding the overview map
    pub overview_section_id: String,

    /// Attribute holding a section's own title
    pub title_attr: String,

    /// Class of a map block
    pub map_block_class: String,

    /// Class of the caption element following a map block
    pub map_caption_class: String,

    /// Attribute of the caption element holding the map title
    pub map_caption_attr: String,

    /// Handling of repeated section identifiers
    pub duplicate_sections: DuplicateSectionPolicy,

    /// Let endnote URLs continue across `" dot "` instead of stopping at
    /// the first whitespace
    pub join_obfuscated_urls: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            section_attr: "data-id".to_string(),
            toplines_id: "toplines".to_string(),
            key_takeaways_id: "key-takeaways".to_string(),
            endnotes_id: "endnotes".to_string(),
            overview_section_id: "ukr-ops".to_string(),
            title_attr: "title".to_string(),
            map_block_class: "conflict-map-block".to_string(),
            map_caption_class: "conflict-map-title".to_string(),
            map_caption_attr: "data-map-title".to_string(),
            duplicate_sections: DuplicateSectionPolicy::KeepFirst,
            join_obfuscated_urls: false,
        }
    }
}

impl ParserConfig {
    /// Identifiers handled by dedicated extractors, never emitted as sections
    pub fn reserved_ids(&self) -> [&str; 3] {
        [
            self.toplines_id.as_str(),
            self.key_takeaways_id.as_str(),
            self.endnotes_id.as_str(),
        ]
    }

    /// Whether `id` is one of the reserved identifiers
    pub fn is_reserved(&self, id: &str) -> bool {
        self.reserved_ids().contains(&id)
    }

    /// Use a different identifying attribute
    pub fn with_section_attr(mut self, attr: impl Into<String>) -> Self {
        self.section_attr = attr.into();
        self
    }

    /// Use a different section for the overview map
    pub fn with_overview_section(mut self, id: impl Into<String>) -> Self {
        self.overview_section_id = id.into();
        self
    }

    /// Use different map block and caption classes
    pub fn with_map_classes(
        mut self,
        block_class: impl Into<String>,
        caption_class: impl Into<String>,
    ) -> Self {
        self.map_block_class = block_class.into();
        self.map_caption_class = caption_class.into();
        self
    }

    /// Set the duplicate section policy
    pub fn with_duplicate_sections(mut self, policy: DuplicateSectionPolicy) -> Self {
        self.duplicate_sections = policy;
        self
    }

    /// Join obfuscated endnote URLs across `" dot "`
    pub fn with_joined_obfuscated_urls(mut self, join: bool) -> Self {
        self.join_obfuscated_urls = join;
        self
    }
}
