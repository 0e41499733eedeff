//! # ISW Report
//!
//! Structured extraction of the daily campaign-assessment report.
//!
//! The report page is a semi-regular HTML dialect: blocks tagged with a
//! `data-id` attribute, bold-lead summary paragraphs, a numbered list of key
//! takeaways, directional sections illustrated by map blocks with sibling
//! captions, and endnotes whose URLs hide their dots behind the word `dot`.
//! This crate turns one such page into a [`ParsedReport`]. It is pure and
//! synchronous: no network, no filesystem, no shared state.
//!
//! ## Example
//!
//! ```rust
//! use isw_report::parse_report;
//!
//! let html = r#"
//!     <h1>Russian Offensive Campaign Assessment, February 16, 2026</h1>
//!     <div data-id="key-takeaways"><ol><li>First takeaway.</li></ol></div>
//! "#;
//! let report = parse_report(html).unwrap();
//! assert_eq!(report.date, "2026-02-16");
//! assert_eq!(report.key_takeaways, vec!["First takeaway."]);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐     ┌──────────────┐     ┌─────────────────┐     ┌──────────────┐
//! │ HTML     │ ──► │ Document     │ ──► │ Field           │ ──► │ ParsedReport │
//! │ (string) │     │ Loader       │     │ Extractors      │     │ (assembled)  │
//! └──────────┘     └──────────────┘     └─────────────────┘     └──────────────┘
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod parser;
pub mod report;
pub mod sections;
pub mod sources;
pub mod takeaways;
pub mod text;
pub mod title;
pub mod toplines;

pub use config::{DuplicateSectionPolicy, ParserConfig};
pub use error::{ReportError, Result};
pub use parser::{parse_report, ReportParser};
pub use report::{ParsedReport, Section, Topline};
pub use text::normalize;
