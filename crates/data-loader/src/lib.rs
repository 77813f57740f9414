//! # Data Loader Crate
//!
//! Loads internship listings published by the listings backend.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (InternshipRecord, ListingStatus, ListingCatalog)
//! - **parser**: Decode JSON listing documents into Rust structs
//! - **index**: Build a catalog from one or more documents and validate it
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::ListingCatalog;
//! use std::path::Path;
//!
//! let catalog = ListingCatalog::load_from_file(Path::new("data/internships.json"))?;
//!
//! let listing = catalog.get("backend-01").unwrap();
//! println!("{} open listings", catalog.counts().2);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{parse_internships_file, parse_internships_json};
pub use types::{InternshipRecord, ListingCatalog, ListingId, ListingStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = ListingCatalog::new();
        assert_eq!(catalog.counts(), (0, 0, 0));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insert_listing() {
        let mut catalog = ListingCatalog::new();

        let mut record = InternshipRecord::new("ml-2", "ML Intern");
        record.company = "Initech".to_string();
        record.status = ListingStatus::Filled;
        catalog.insert(record);

        let retrieved = catalog.get("ml-2").unwrap();
        assert_eq!(retrieved.title, "ML Intern");
        assert!(!retrieved.is_open());
        assert_eq!(retrieved.to_string(), "ML Intern @ Initech");
        assert_eq!(catalog.counts(), (1, 1, 0));
    }

    #[test]
    fn test_empty_queries() {
        let catalog = ListingCatalog::new();

        assert!(catalog.get("missing").is_none());
        assert!(catalog.records().is_empty());
    }

    #[test]
    fn test_record_serializes_with_provider_field_names() {
        let mut record = InternshipRecord::new("r1", "Data Intern");
        record.work_type = "hybrid".to_string();
        record.min_semester = 4;

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "hybrid");
        assert_eq!(json["minSemester"], 4);
        assert!(json.get("salaryAmount").is_none());
    }
}
