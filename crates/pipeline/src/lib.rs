//! Search-and-filter engine for internship listings.
//!
//! This crate provides:
//! - FilterCriteria, the user's current search form values
//! - Filter trait and one implementation per criteria field
//! - FilterPipeline for composing filters
//!
//! ## Semantics
//! Every criteria field is optional; a field at its default never excludes a
//! listing. Active fields combine with logical AND. Evaluation is pure: the
//! input is only borrowed, results keep input order, and no input shape is an
//! error.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, filter_internships, match_count};
//!
//! let criteria = FilterCriteria::new()
//!     .with_skills("python, sql")
//!     .with_semester("5");
//!
//! let matches = filter_internships(catalog.records(), &criteria);
//! println!("{} listings", matches.len());
//! ```

pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use criteria::{ALL_TYPES, FilterCriteria};
pub use traits::Filter;
pub use filter_pipeline::{FilterPipeline, filter_internships, match_count};
