//! Error types for report extraction

use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that abort a parse
///
/// Missing optional blocks (toplines, maps, endnotes, ...) are not errors;
/// the extractors degrade to empty results instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The document cannot be turned into a report
    #[error("Malformed document: {reason}")]
    MalformedDocument {
        reason: String,
        /// The offending piece of input, e.g. the title that carried no date
        excerpt: Option<String>,
    },
}

impl ReportError {
    /// The title did not contain a recognizable date
    pub fn missing_date(title: impl Into<String>) -> Self {
        let title = title.into();
        ReportError::MalformedDocument {
            reason: format!("Could not extract date from title: {}", title),
            excerpt: Some(title),
        }
    }

    /// Two elements carry the same section identifier
    pub fn duplicate_section(id: impl Into<String>) -> Self {
        let id = id.into();
        ReportError::MalformedDocument {
            reason: format!("Duplicate section identifier: {}", id),
            excerpt: Some(id),
        }
    }

    /// The offending excerpt, if one was captured
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            ReportError::MalformedDocument { excerpt, .. } => excerpt.as_deref(),
        }
    }
}
