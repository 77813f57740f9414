//! Listing source backed by a JSON document on disk.
//!
//! Stands in for the listings API in the CLI and the test harness: the file
//! holds exactly what the API would answer.

use crate::types::InternshipSource;
use anyhow::{Context, Result};
use data_loader::{InternshipRecord, ListingCatalog, parse_internships_json};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Reads the whole listing document on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InternshipSource for JsonFileSource {
    fn name(&self) -> &str {
        "JsonFileSource"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_internships(&self) -> Result<Vec<InternshipRecord>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let records = parse_internships_json(&text, &self.path.display().to_string())?;
        // Reject documents the catalog would reject (duplicate or blank ids).
        let catalog = ListingCatalog::from_records(records)?;

        debug!("Fetched {} listings", catalog.len());
        Ok(catalog.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_temp(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "listings.json",
            r#"{ "internships": [ { "id": "a", "title": "Backend Intern" }, { "id": "b", "title": "QA Intern" } ] }"#,
        );
        let source = JsonFileSource::new(&path);

        let records = source.fetch_internships().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Backend Intern");

        let root = dir.path().to_path_buf();
        drop(dir);
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = JsonFileSource::new("no/such/listings.json");

        let err = source.fetch_internships().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "dupes.json", r#"[ { "id": 1 }, { "id": "1" } ]"#);

        assert!(JsonFileSource::new(path).fetch_internships().await.is_err());
    }
}
