//! Fetch, store, parse, store

use crate::error::{IngestError, Result};
use crate::fetch::ReportSource;
use crate::storage::{parsed_report_key, raw_html_key, ReportStore};
use chrono::NaiveDate;
use isw_report::ReportParser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Inbound ingestion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestRequest {
    /// ISO date of the report, e.g. `2026-02-16`
    pub date: String,

    /// Location of pre-uploaded HTML; the report is fetched when absent
    #[serde(default, alias = "html_gcs_path")]
    pub html_source_path: Option<String>,
}

/// Result of a successful ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResponse {
    /// Location of the stored parsed report
    pub parsed_report_path: String,
}

/// Runs one report through fetch, raw storage, parsing and parsed storage
pub struct Ingestor {
    source: Arc<dyn ReportSource>,
    store: Arc<dyn ReportStore>,
    parser: ReportParser,
}

impl Ingestor {
    /// Create an ingestor over a report source, a store and a parser
    pub fn new(source: Arc<dyn ReportSource>, store: Arc<dyn ReportStore>, parser: ReportParser) -> Self {
        Self {
            source,
            store,
            parser,
        }
    }

    /// Ingest one report and return where its parsed JSON was stored.
    ///
    /// Uses the stored HTML at `html_source_path` when given, otherwise
    /// fetches the report for `date`.
    pub async fn ingest(&self, request: &IngestRequest) -> Result<IngestResponse> {
        info!(date = %request.date, "Ingestion request");

        let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
            .map_err(|_| IngestError::InvalidDate(request.date.clone()))?;

        let html = match &request.html_source_path {
            Some(location) => self.store.read_text(location).await?,
            None => self.source.fetch(date).await?,
        };

        // Raw HTML is kept verbatim so any parse can be reproduced later.
        self.store
            .write(&raw_html_key(&date.to_string()), html.as_bytes(), "text/html")
            .await?;
        info!(date = %date, "Raw HTML stored");

        let report = self.parser.parse(&html)?;
        info!(
            toplines = report.toplines.len(),
            key_takeaways = report.key_takeaways.len(),
            sections = report.sections.len(),
            "Parsed report"
        );

        let json = report.to_json_pretty()?;
        let parsed_report_path = self
            .store
            .write(&parsed_report_key(&report.date), json.as_bytes(), "application/json")
            .await?;
        info!(path = %parsed_report_path, "Parsed report stored");

        Ok(IngestResponse { parsed_report_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStore;
    use async_trait::async_trait;
    use isw_report::ParsedReport;

    struct StaticSource(String);

    #[async_trait]
    impl ReportSource for StaticSource {
        async fn fetch(&self, _date: NaiveDate) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ReportSource for FailingSource {
        async fn fetch(&self, _date: NaiveDate) -> Result<String> {
            Err(IngestError::Upstream {
                status: 404,
                message: "404 Not Found".to_string(),
            })
        }
    }

    const HTML: &str = r#"<h1>Assessment, March 2, 2026</h1>
        <div data-id="key-takeaways"><ol><li>Ушли.</li></ol></div>"#;

    fn ingestor(source: impl ReportSource + 'static, store: &LocalStore) -> Ingestor {
        Ingestor::new(Arc::new(source), Arc::new(store.clone()), ReportParser::default())
    }

    fn request(date: &str, html_source_path: Option<&str>) -> IngestRequest {
        IngestRequest {
            date: date.to_string(),
            html_source_path: html_source_path.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_fetch_parse_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let ingestor = ingestor(StaticSource(HTML.to_string()), &store);

        let response = ingestor.ingest(&request("2026-03-02", None)).await.unwrap();
        assert_eq!(
            response.parsed_report_path,
            store.location("parsed/2026-03-02/parsed_report.json")
        );

        let raw = store.read_text("raw/2026-03-02/report.html").await.unwrap();
        assert_eq!(raw, HTML);

        let json = store.read_text(&response.parsed_report_path).await.unwrap();
        assert!(json.contains("Ушли."));
        let report = ParsedReport::from_json(&json).unwrap();
        assert_eq!(report.date, "2026-03-02");
        assert_eq!(report.key_takeaways, vec!["Ушли."]);
    }

    #[tokio::test]
    async fn test_reads_stored_html() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let location = store
            .write("uploads/march.html", HTML.as_bytes(), "text/html")
            .await
            .unwrap();
        let ingestor = ingestor(FailingSource, &store);

        let response = ingestor
            .ingest(&request("2026-03-02", Some(&location)))
            .await
            .unwrap();
        assert!(response.parsed_report_path.ends_with("parsed_report.json"));
    }

    #[tokio::test]
    async fn test_invalid_date() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let err = ingestor(StaticSource(HTML.to_string()), &store)
            .ingest(&request("16/02/2026", None))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::InvalidDate(_)));
    }

    #[tokio::test]
    async fn test_raw_html_kept_when_parse_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let err = ingestor(StaticSource("<h1>No date here</h1>".to_string()), &store)
            .ingest(&request("2026-03-02", None))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)));
        assert!(dir.path().join("raw/2026-03-02/report.html").exists());
        assert!(!dir.path().join("parsed").exists());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let err = ingestor(FailingSource, &store)
            .ingest(&request("2026-03-02", None))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Upstream { status: 404, .. }));
    }
}
