//! Object storage for raw and parsed reports

use crate::error::{IngestError, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Key of the raw HTML stored for a request date
pub fn raw_html_key(date: &str) -> String {
    format!("raw/{}/report.html", date)
}

/// Key of the parsed JSON stored for a report date
pub fn parsed_report_key(date: &str) -> String {
    format!("parsed/{}/parsed_report.json", date)
}

/// Minimal object store: keyed blobs addressed by a printable location
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Printable location of `key`
    fn location(&self, key: &str) -> String;

    /// Read a UTF-8 object by location or key
    async fn read_text(&self, location: &str) -> Result<String>;

    /// Write an object, replacing any previous one, and return its location
    async fn write(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<String>;
}

/// Store backed by a local directory
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Key of a location: the root prefix is stripped if present
    fn key_of<'a>(&self, location: &'a str) -> &'a str {
        Path::new(location)
            .strip_prefix(&self.root)
            .ok()
            .and_then(Path::to_str)
            .unwrap_or(location)
    }

    /// Resolve a key to a path inside the root
    fn resolve(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let valid = key
            .split('/')
            .all(|segment| !matches!(segment, "" | "." | ".."))
            && relative.components().all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(IngestError::InvalidPath(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

/// Unique sibling of `path` to stage a write in
fn staging_path(path: &Path) -> PathBuf {
    let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(format!(".{}.{}.tmp", std::process::id(), seq));
    path.with_file_name(name)
}

#[async_trait]
impl ReportStore for LocalStore {
    fn location(&self, key: &str) -> String {
        self.root.join(key).display().to_string()
    }

    async fn read_text(&self, location: &str) -> Result<String> {
        let path = self.resolve(self.key_of(location))?;
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| IngestError::Storage(format!("{}: {}", path.display(), e)))
    }

    async fn write(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<String> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Readers see either the old object or the new one, never a partial file.
        let staging = staging_path(&path);
        let staged = match tokio::fs::write(&staging, bytes).await {
            Ok(()) => tokio::fs::rename(&staging, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = staged {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(IngestError::Storage(format!("{}: {}", path.display(), e)));
        }

        debug!(path = %path.display(), content_type, size = bytes.len(), "Stored object");
        Ok(self.location(key))
    }
}
