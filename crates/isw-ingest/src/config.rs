//! Service configuration
//!
//! Defaults, optionally overlaid by a TOML file, then by environment
//! variables.

use crate::error::{IngestError, Result};
use isw_report::ParserConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder in `base_url` replaced by the report's date slug
pub const SLUG_PLACEHOLDER: &str = "{slug}";

/// Default location of the published daily reports
pub const DEFAULT_BASE_URL: &str =
    "https://understandingwar.org/research/russia-ukraine/russian-offensive-campaign-assessment-{slug}/";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Configuration for the ingestion service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Root directory of the object store
    pub storage_root: PathBuf,

    /// Report URL template containing `{slug}`
    pub base_url: String,

    /// Listen host
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Upstream request timeout in seconds
    pub fetch_timeout_secs: u64,

    /// User agent for upstream requests
    pub user_agent: String,

    /// HTML dialect markers
    pub parser: ParserConfig,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("./data"),
            base_url: DEFAULT_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            fetch_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            parser: ParserConfig::default(),
        }
    }
}

impl IngestConfig {
    /// Defaults, then the TOML file at `path` if given, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| IngestError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Overlay values from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup("ISW_STORAGE_ROOT") {
            self.storage_root = PathBuf::from(root);
        }
        if let Some(base_url) = lookup("ISW_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(host) = lookup("ISW_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|_| IngestError::Config(format!("PORT is not a port number: {}", port)))?;
        }
        if let Some(timeout) = lookup("ISW_FETCH_TIMEOUT_SECS") {
            self.fetch_timeout_secs = timeout.parse().map_err(|_| {
                IngestError::Config(format!("ISW_FETCH_TIMEOUT_SECS is not a number: {}", timeout))
            })?;
        }
        if let Some(user_agent) = lookup("ISW_USER_AGENT") {
            self.user_agent = user_agent;
        }
        Ok(())
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.contains(SLUG_PLACEHOLDER) {
            return Err(IngestError::Config(format!(
                "base_url must contain {}: {}",
                SLUG_PLACEHOLDER, self.base_url
            )));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(IngestError::Config("fetch_timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// `host:port` to bind
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Use a different storage root
    pub fn with_storage_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.storage_root = root.into();
        self
    }

    /// Use a different listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = IngestConfig::default();
        config.validate().unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("ISW_STORAGE_ROOT", "/srv/isw"),
            ("PORT", "9090"),
            ("ISW_FETCH_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let mut config = IngestConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.storage_root, PathBuf::from("/srv/isw"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bad_port_rejected() {
        let mut config = IngestConfig::default();
        let err = config
            .apply_env(|key| (key == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, IngestError::Config(_)));
    }

    #[test]
    fn test_validate_requires_slug() {
        let mut config = IngestConfig::default();
        config.base_url = "https://example.com/report".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "port = 3000\nstorage_root = \"/tmp/reports\"\n\n[parser]\nduplicate_sections = \"reject\""
        )
        .unwrap();

        let config = IngestConfig::from_file(file.path()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage_root, PathBuf::from("/tmp/reports"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(
            config.parser.duplicate_sections,
            isw_report::DuplicateSectionPolicy::Reject
        );
    }
}
