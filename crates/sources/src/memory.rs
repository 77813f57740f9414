//! In-memory listing source.

use crate::types::InternshipSource;
use anyhow::Result;
use data_loader::InternshipRecord;
use std::sync::Arc;

/// Serves a fixed listing collection. Cloning is cheap; the listings are
/// shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Arc<Vec<InternshipRecord>>,
}

impl StaticSource {
    pub fn new(records: Vec<InternshipRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

impl InternshipSource for StaticSource {
    fn name(&self) -> &str {
        "StaticSource"
    }

    async fn fetch_internships(&self) -> Result<Vec<InternshipRecord>> {
        Ok(self.records.as_ref().clone())
    }
}
