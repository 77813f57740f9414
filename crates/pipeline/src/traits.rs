//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to listing collections.

use data_loader::InternshipRecord;

/// Core trait for listing predicates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets the pipeline evaluate a filter from rayon workers
/// - A filter is built from the criteria once per evaluation and holds the
///   normalized (lower-cased, split) form of its input, so per-listing work
///   is only the comparison
/// - Filters are pure: `matches` must not depend on anything but the listing
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// True if the listing passes this filter.
    fn matches(&self, record: &InternshipRecord) -> bool;
}
