//! Error types for the ingestion service

use axum::http::StatusCode;
use isw_report::ReportError;
use thiserror::Error;

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that can occur while fetching, parsing or storing a report
#[derive(Error, Debug)]
pub enum IngestError {
    /// Request date is not an ISO calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Storage location escapes the store or is empty
    #[error("Invalid storage path: {0}")]
    InvalidPath(String),

    /// The report HTML could not be parsed
    #[error(transparent)]
    Parse(#[from] ReportError),

    /// Upstream site answered with an error status
    #[error("Upstream fetch failed: {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Network error during fetch
    #[error("Network error: {0}")]
    Network(String),

    /// Object storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IngestError {
    /// HTTP status reported to callers of the ingest endpoint
    pub fn status_code(&self) -> StatusCode {
        match self {
            IngestError::InvalidDate(_) | IngestError::InvalidPath(_) | IngestError::Parse(_) => {
                StatusCode::BAD_REQUEST
            }
            IngestError::Upstream { .. } | IngestError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            IngestError::Upstream {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            IngestError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for IngestError {
    fn from(err: url::ParseError) -> Self {
        IngestError::Config(format!("invalid report URL: {}", err))
    }
}
