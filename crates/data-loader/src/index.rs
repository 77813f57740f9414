//! ListingCatalog building and validation.
//!
//! Several listing documents (one per backend export, say) can be loaded
//! at once. They are parsed in parallel, then concatenated in the order the
//! paths were given so that provider order is stable across loads.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

impl ListingCatalog {
    /// Load one listing document.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_from_files(&[path.to_path_buf()])
    }

    /// Load and merge several listing documents.
    ///
    /// Steps:
    /// 1. Parse every file in parallel
    /// 2. Concatenate in argument order
    /// 3. Validate id uniqueness
    pub fn load_from_files(paths: &[PathBuf]) -> Result<Self> {
        info!("Loading listings from {} file(s)", paths.len());

        // Indexed parallel collect keeps argument order.
        let parsed: Vec<Result<Vec<InternshipRecord>>> = paths
            .par_iter()
            .map(|path| parser::parse_internships_file(path))
            .collect();

        let mut catalog = ListingCatalog::new();
        for records in parsed {
            for record in records? {
                catalog.insert(record);
            }
        }

        catalog.validate()?;

        let (listings, companies, open) = catalog.counts();
        info!(
            "Loaded {} listings from {} companies ({} open)",
            listings, companies, open
        );
        Ok(catalog)
    }

    /// Build a catalog from records already in memory.
    pub fn from_records(records: Vec<InternshipRecord>) -> Result<Self> {
        let mut catalog = ListingCatalog::new();
        for record in records {
            catalog.insert(record);
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - every listing has a non-empty id
    /// - no two listings share an id
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for (pos, record) in self.records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(DataLoadError::ValidationError(format!(
                    "listing #{} has an empty id",
                    pos + 1
                )));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(DataLoadError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(())
    }
}
