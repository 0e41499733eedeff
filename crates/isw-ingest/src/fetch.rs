//! Report retrieval from the publishing site

use crate::config::{IngestConfig, SLUG_PLACEHOLDER};
use crate::error::{IngestError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Source of raw report HTML for a calendar date
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the report published for `date`
    async fn fetch(&self, date: NaiveDate) -> Result<String>;
}

/// URL slug of a report date: `2026-02-16` becomes `february-16-2026`
pub fn date_slug(date: NaiveDate) -> String {
    date.format("%B-%-d-%Y").to_string().to_lowercase()
}

/// Fetches reports over HTTP from a URL template
pub struct HttpReportSource {
    base_url: String,
    client: Client,
}

impl HttpReportSource {
    /// Create a source from the service configuration
    pub fn new(config: &IngestConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| IngestError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Report URL for `date`
    pub fn report_url(&self, date: NaiveDate) -> Result<Url> {
        let url = self.base_url.replace(SLUG_PLACEHOLDER, &date_slug(date));
        Ok(Url::parse(&url)?)
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch(&self, date: NaiveDate) -> Result<String> {
        let url = self.report_url(date)?;
        info!(url = %url, "Fetching report");

        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Upstream {
                status: status.as_u16(),
                message: status.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
