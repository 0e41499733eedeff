//! Numbered key takeaways

use crate::document::{Element, ORDERED_LIST};

/// Items of the first ordered list in the block, normalized, empties dropped.
pub fn extract_key_takeaways(block: Element<'_>) -> Vec<String> {
    let Some(list) = block.select_first(&ORDERED_LIST) else {
        return Vec::new();
    };

    list.children_named("li")
        .map(|li| li.normalized_text())
        .filter(|text| !text.is_empty())
        .collect()
}
