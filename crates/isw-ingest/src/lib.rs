//! # ISW Ingest
//!
//! Fetches a daily assessment report, keeps the raw HTML, parses it with
//! `isw-report` and stores the resulting JSON, behind an HTTP endpoint or a
//! one-shot CLI.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Source      │ ──► │ Raw HTML     │ ──► │ ReportParser │ ──► │ Parsed JSON  │
//! │ (HTTP/store)│     │ (stored)     │     │ (pure)       │     │ (stored)     │
//! └─────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod server;
pub mod storage;

pub use config::IngestConfig;
pub use error::{IngestError, Result};
pub use fetch::{date_slug, HttpReportSource, ReportSource};
pub use pipeline::{IngestRequest, IngestResponse, Ingestor};
pub use storage::{LocalStore, ReportStore};
